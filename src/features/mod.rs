//! Feature analysis modules
//!
//! This module contains the chord classification algorithms:
//! - Chroma vector validation and normalization
//! - Chord-region segmentation (onset detection over chroma flux)
//! - Chord template library, matching, and quality classification

pub mod chords;
pub mod chroma;
pub mod segmentation;
