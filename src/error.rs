//! Error types for the chord analysis engine

use std::fmt;

/// Errors that can occur during chord analysis
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters (empty chroma, wrong dimensions, bad bounds)
    InvalidInput(String),

    /// Requested chord template does not exist in the library
    NotFound(String),

    /// Processing error during analysis
    ProcessingError(String),

    /// Feature not implemented (e.g. the deep-learning model stub)
    NotImplemented(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AnalysisError::ProcessingError(msg) => write!(f, "Processing error: {}", msg),
            AnalysisError::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
