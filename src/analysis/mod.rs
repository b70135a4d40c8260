//! Analysis pipeline: confidence scoring, event building, key estimation,
//! and the result types they produce

pub mod confidence;
pub mod event;
pub mod key;
pub mod result;

pub use confidence::{
    clarity_distinctness_confidence, correlation_to_confidence, template_match_confidence,
};
pub use event::{build_chord_events, fallback_progression};
pub use key::estimate_key;
pub use result::{AnalysisMetadata, ChordEvent, ChordMatch, ProgressionResult, Quality};
