//! # chord-dsp
//!
//! Chord classification engine for chroma features: template-based chord
//! matching, chroma segmentation, chord event building with quality and
//! extension detection, confidence scoring, and key estimation.
//!
//! The engine consumes chroma matrices (one 12-element pitch-class vector
//! per frame) produced by an external extractor; it does no audio decoding
//! or spectral analysis of its own.
//!
//! ## Quick Start
//!
//! ```
//! use chord_dsp::{analyze_chroma, AnalysisConfig};
//!
//! // Two bars of a held C major triad (C, E, G active)
//! let mut frame = vec![0.0f32; 12];
//! frame[0] = 1.0;
//! frame[4] = 1.0;
//! frame[7] = 1.0;
//! let chroma = vec![frame; 100];
//!
//! let result = analyze_chroma(&chroma, &AnalysisConfig::default())?;
//! assert_eq!(result.events[0].symbol, "C");
//! # Ok::<(), chord_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`features::chords`] - template library, matching, quality/extension
//!   classification
//! - [`features::segmentation`] - chroma difference segmentation
//! - [`analysis`] - event building, confidence, key estimation, results
//! - [`model`] - pluggable analysis backends

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod model;

use std::time::Instant;

pub use analysis::{
    build_chord_events, estimate_key, fallback_progression, AnalysisMetadata, ChordEvent,
    ChordMatch, ProgressionResult, Quality,
};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::chords::{match_chord, ChordTemplates, MatchStrategy};
pub use features::segmentation::{segment_chord_regions, ChordSegment};
pub use model::{available_models, ChordModel, ModelKind, SingleChordResult};

/// Version tag stamped into result metadata
pub const ALGORITHM_VERSION: &str = "1.0.0";

/// Produces chroma features from raw audio samples
///
/// Implemented by external feature extractors; the engine itself performs
/// no spectral analysis.
pub trait ChromaExtractor {
    /// Extract a chroma matrix from audio samples
    ///
    /// # Errors
    ///
    /// Implementation-defined; any error triggers the engine's fallback
    /// progression in [`analyze_samples`].
    fn extract(
        &self,
        samples: &[f32],
        sample_rate: u32,
        hop_length: usize,
        n_fft: usize,
    ) -> Result<Vec<Vec<f32>>, AnalysisError>;
}

/// Classify a single chroma vector against the chord template library
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the chroma vector is not
/// 12 elements long.
pub fn classify_segment(
    chroma: &[f32],
    strategy: MatchStrategy,
    threshold: f32,
) -> Result<ChordMatch, AnalysisError> {
    match_chord(chroma, ChordTemplates::global(), strategy, threshold)
}

/// Classify a single chroma vector with strategy and threshold drawn from
/// configuration
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the chroma vector is not
/// 12 elements long.
pub fn classify_segment_with_config(
    chroma: &[f32],
    config: &AnalysisConfig,
) -> Result<ChordMatch, AnalysisError> {
    classify_segment(chroma, config.strategy, config.match_threshold)
}

/// Run the full progression analysis over a chroma matrix
///
/// Segments the chroma into stable regions, classifies each region into a
/// chord event, and estimates the overall key.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the chroma matrix is empty or
/// malformed.
pub fn analyze_chroma(
    chroma: &[Vec<f32>],
    config: &AnalysisConfig,
) -> Result<ProgressionResult, AnalysisError> {
    let started = Instant::now();

    let segments = segment_chord_regions(
        chroma,
        config.sample_rate,
        config.hop_length,
        config.min_chord_duration,
    )?;

    let events = build_chord_events(
        chroma,
        &segments,
        config.sample_rate,
        config.hop_length,
        config.extension_threshold,
    )?;

    let key = estimate_key(&events);

    let duration_seconds =
        chroma.len() as f32 * config.hop_length as f32 / config.sample_rate as f32;

    Ok(ProgressionResult {
        events,
        key,
        metadata: AnalysisMetadata {
            frame_count: chroma.len(),
            duration_seconds,
            sample_rate: config.sample_rate,
            hop_length: config.hop_length,
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
            algorithm_version: ALGORITHM_VERSION.to_string(),
            used_fallback: false,
        },
    })
}

/// Analyze raw audio samples end to end with an external chroma extractor
///
/// Extraction or analysis failure does not surface as an error: the engine
/// substitutes the canned fallback progression and marks the result's
/// metadata with `used_fallback = true`.
pub fn analyze_samples<E: ChromaExtractor>(
    extractor: &E,
    samples: &[f32],
    config: &AnalysisConfig,
) -> ProgressionResult {
    let started = Instant::now();

    let analyzed = extractor
        .extract(samples, config.sample_rate, config.hop_length, config.n_fft)
        .and_then(|chroma| analyze_chroma(&chroma, config));

    match analyzed {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Chord analysis failed ({}), using fallback progression", e);

            let events = fallback_progression();
            let key = estimate_key(&events);
            let duration_seconds = events.last().map(|e| e.end_time).unwrap_or(0.0);

            ProgressionResult {
                events,
                key,
                metadata: AnalysisMetadata {
                    frame_count: 0,
                    duration_seconds,
                    sample_rate: config.sample_rate,
                    hop_length: config.hop_length,
                    processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
                    algorithm_version: ALGORITHM_VERSION.to_string(),
                    used_fallback: true,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_segment_c_major() {
        let chroma = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        let result = classify_segment(&chroma, MatchStrategy::CorrelationOnly, 0.3).unwrap();
        assert_eq!(result.chord, "C");
    }

    #[test]
    fn test_classify_segment_with_config() {
        let chroma = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];

        let config = AnalysisConfig {
            strategy: MatchStrategy::CorrelationOnly,
            ..AnalysisConfig::default()
        };
        let result = classify_segment_with_config(&chroma, &config).unwrap();
        assert_eq!(result.chord, "C");

        // The configured threshold gates the weighted strategy
        let gated = AnalysisConfig {
            match_threshold: 100.0,
            ..AnalysisConfig::default()
        };
        let result = classify_segment_with_config(&chroma, &gated).unwrap();
        assert_eq!(result.chord, "Unknown");
    }

    #[test]
    fn test_analyze_chroma_empty_is_invalid() {
        let result = analyze_chroma(&[], &AnalysisConfig::default());
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_metadata_duration() {
        let mut frame = vec![0.0f32; 12];
        frame[0] = 1.0;
        frame[4] = 1.0;
        frame[7] = 1.0;
        let chroma = vec![frame; 100];

        let config = AnalysisConfig::default();
        let result = analyze_chroma(&chroma, &config).unwrap();

        let expected = 100.0 * 512.0 / 22050.0;
        assert!((result.metadata.duration_seconds - expected).abs() < 1e-4);
        assert_eq!(result.metadata.frame_count, 100);
        assert!(!result.metadata.used_fallback);
        assert_eq!(result.metadata.algorithm_version, ALGORITHM_VERSION);
    }
}
