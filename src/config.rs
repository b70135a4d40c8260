//! Configuration parameters for chord analysis

use crate::features::chords::matcher::MatchStrategy;

/// Chord analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Feature extraction frame geometry
    /// Sample rate the chroma frames were computed at (default: 22050)
    pub sample_rate: u32,

    /// Hop length between chroma frames in samples (default: 512)
    pub hop_length: usize,

    /// FFT window size handed to the chroma extractor (default: 2048)
    pub n_fft: usize,

    // Segmentation
    /// Minimum chord region duration in seconds (default: 0.5)
    /// Regions shorter than this are dropped, not merged into neighbors
    pub min_chord_duration: f32,

    // Matching
    /// Minimum combined score for a named match (default: 0.3)
    /// Below this the matcher reports "Unknown" (with the best raw score)
    /// Used by the single-chord classification path, not segmentation
    pub match_threshold: f32,

    /// Matching strategy for single-chord classification (default: WeightedMultiMetric)
    pub strategy: MatchStrategy,

    // Event building
    /// Rotated-chroma energy above which an extension (9/11/13) is flagged (default: 0.3)
    pub extension_threshold: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22050,
            hop_length: 512,
            n_fft: 2048,
            min_chord_duration: 0.5,
            match_threshold: 0.3,
            strategy: MatchStrategy::WeightedMultiMetric,
            extension_threshold: 0.3,
        }
    }
}
