//! Template-correlation chord model

use super::{ChordModel, SingleChordResult};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::chords::templates::ChordTemplates;
use crate::features::chords::{match_chord, MatchStrategy};
use crate::features::chroma::average_chroma;
use crate::features::chroma::normalization::normalize_max;

/// Default minimum combined score for a named match
const DEFAULT_MATCH_THRESHOLD: f32 = 0.3;

/// Chord model backed by the fixed template library
///
/// Averages the chroma frames, max-normalizes the average, and matches it
/// with the configured strategy. Feature extraction is not this model's
/// job; chroma arrives from an external extractor.
pub struct TemplateChordModel {
    strategy: MatchStrategy,
    threshold: f32,
}

impl TemplateChordModel {
    /// Create a template model with the default strategy and threshold
    pub fn new() -> Self {
        Self {
            strategy: MatchStrategy::WeightedMultiMetric,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    /// Create a template model with a custom match threshold
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            strategy: MatchStrategy::WeightedMultiMetric,
            threshold,
        }
    }

    /// Create a template model from analysis configuration
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            strategy: config.strategy,
            threshold: config.match_threshold,
        }
    }
}

impl Default for TemplateChordModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordModel for TemplateChordModel {
    fn extract_features(
        &self,
        _samples: &[f32],
        _sample_rate: u32,
    ) -> Result<Vec<Vec<f32>>, AnalysisError> {
        Err(AnalysisError::NotImplemented(
            "Template model expects externally extracted chroma features".to_string(),
        ))
    }

    fn analyze_features(&self, features: &[Vec<f32>]) -> Result<SingleChordResult, AnalysisError> {
        let avg = average_chroma(features)?;
        let normalized = normalize_max(&avg);

        let templates = ChordTemplates::global();
        let matched = match_chord(&normalized, templates, self.strategy, self.threshold)?;

        Ok(SingleChordResult {
            chord: matched.chord,
            confidence: matched.score.clamp(0.0, 1.0),
            chroma_vector: normalized,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_features_not_implemented() {
        let model = TemplateChordModel::new();
        let result = model.extract_features(&[0.0; 1024], 22050);
        assert!(matches!(result, Err(AnalysisError::NotImplemented(_))));
    }

    #[test]
    fn test_analyze_c_major_frames() {
        let mut frame = vec![0.0f32; 12];
        frame[0] = 1.0;
        frame[4] = 0.8;
        frame[7] = 0.9;
        let frames = vec![frame; 10];

        let model = TemplateChordModel::new();
        let result = model.analyze_features(&frames).unwrap();
        assert!(result.chord.starts_with('C'), "chord {}", result.chord);
        assert!(result.confidence > 0.0);
        assert_eq!(result.chroma_vector.len(), 12);
        // Max-normalized average peaks at (approximately) 1
        let max = result
            .chroma_vector
            .iter()
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((max - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_from_config_threads_strategy_and_threshold() {
        let mut frame = vec![0.0f32; 12];
        frame[0] = 1.0;
        frame[4] = 1.0;
        frame[7] = 1.0;
        let frames = vec![frame; 10];

        // An unreachable threshold gates the weighted strategy to "Unknown"
        let gated = AnalysisConfig {
            match_threshold: 100.0,
            ..AnalysisConfig::default()
        };
        let result = TemplateChordModel::from_config(&gated)
            .analyze_features(&frames)
            .unwrap();
        assert_eq!(result.chord, "Unknown");

        // The correlation strategy ignores the threshold entirely
        let ungated = AnalysisConfig {
            match_threshold: 100.0,
            strategy: MatchStrategy::CorrelationOnly,
            ..AnalysisConfig::default()
        };
        let result = TemplateChordModel::from_config(&ungated)
            .analyze_features(&frames)
            .unwrap();
        assert_eq!(result.chord, "C");
    }

    #[test]
    fn test_analyze_empty_features_is_invalid() {
        let model = TemplateChordModel::new();
        let result = model.analyze_features(&[]);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }
}
