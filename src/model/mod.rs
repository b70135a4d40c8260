//! Pluggable chord analysis models
//!
//! The [`ChordModel`] trait splits analysis into feature extraction and
//! feature classification so backends can implement either half. The
//! template model classifies pre-extracted chroma; a deep learning backend
//! is reserved but not implemented.

pub mod deep_learning;
pub mod template_model;

pub use deep_learning::DeepLearningChordModel;
pub use template_model::TemplateChordModel;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Classification of a single chroma region by a model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleChordResult {
    /// Chord symbol, or "Unknown"
    pub chord: String,
    /// Classification confidence in [0, 1]
    pub confidence: f32,
    /// The averaged, normalized chroma vector the decision was made on
    pub chroma_vector: Vec<f32>,
}

/// A chord analysis backend
///
/// Both operations may legitimately be unimplemented for a given backend;
/// such backends return `AnalysisError::NotImplemented`.
pub trait ChordModel {
    /// Extract chroma features from raw audio samples
    ///
    /// # Errors
    ///
    /// `NotImplemented` if the backend relies on externally extracted
    /// features; `InvalidInput` for unusable audio.
    fn extract_features(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<Vec<Vec<f32>>, AnalysisError>;

    /// Classify pre-extracted chroma frames as a single chord
    ///
    /// # Errors
    ///
    /// `NotImplemented` if the backend cannot classify; `InvalidInput`
    /// for malformed feature matrices.
    fn analyze_features(&self, features: &[Vec<f32>]) -> Result<SingleChordResult, AnalysisError>;
}

/// Available model backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Template correlation over averaged chroma
    Template,
    /// Learned classifier (reserved, unimplemented)
    DeepLearning,
}

impl ModelKind {
    /// Construct the backend for this kind
    pub fn build(&self) -> Box<dyn ChordModel + Send + Sync> {
        match self {
            ModelKind::Template => Box::new(TemplateChordModel::new()),
            ModelKind::DeepLearning => Box::new(DeepLearningChordModel::new()),
        }
    }
}

/// All model kinds the factory can construct
pub fn available_models() -> Vec<ModelKind> {
    vec![ModelKind::Template, ModelKind::DeepLearning]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_each_kind() {
        for kind in available_models() {
            let model = kind.build();
            // Every backend answers, even if only with NotImplemented
            let _ = model.extract_features(&[0.0; 128], 22050);
        }
    }

    #[test]
    fn test_model_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ModelKind::DeepLearning).unwrap(),
            "\"deep_learning\""
        );
        assert_eq!(serde_json::to_string(&ModelKind::Template).unwrap(), "\"template\"");
    }
}
