//! Deep learning chord model placeholder
//!
//! Reserved backend slot. Both operations report `NotImplemented` so
//! callers can probe for it and fall back to the template model.

use super::{ChordModel, SingleChordResult};
use crate::error::AnalysisError;

/// Unimplemented learned-classifier backend
#[derive(Debug, Default)]
pub struct DeepLearningChordModel;

impl DeepLearningChordModel {
    /// Create the placeholder backend
    pub fn new() -> Self {
        Self
    }
}

impl ChordModel for DeepLearningChordModel {
    fn extract_features(
        &self,
        _samples: &[f32],
        _sample_rate: u32,
    ) -> Result<Vec<Vec<f32>>, AnalysisError> {
        Err(AnalysisError::NotImplemented(
            "Deep learning feature extraction is not available".to_string(),
        ))
    }

    fn analyze_features(&self, _features: &[Vec<f32>]) -> Result<SingleChordResult, AnalysisError> {
        Err(AnalysisError::NotImplemented(
            "Deep learning classification is not available".to_string(),
        ))
    }
}
