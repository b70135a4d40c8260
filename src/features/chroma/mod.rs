//! Chroma vector utilities
//!
//! A chroma vector is a 12-bin pitch-class energy profile; index i is the
//! pitch class i semitones above C (C, C#, D, ..., B). A chroma matrix is a
//! sequence of such vectors, one per analysis frame.

pub mod normalization;

use crate::error::AnalysisError;

/// Pitch class names, indexed by semitones above C
pub const PITCH_CLASSES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Number of pitch classes in a chroma vector
pub const NUM_PITCH_CLASSES: usize = 12;

/// Validate a single chroma vector
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the vector does not have exactly
/// 12 elements.
pub fn validate_chroma_vector(chroma: &[f32]) -> Result<(), AnalysisError> {
    if chroma.len() != NUM_PITCH_CLASSES {
        return Err(AnalysisError::InvalidInput(format!(
            "Chroma vector must have 12 elements, got {}",
            chroma.len()
        )));
    }
    Ok(())
}

/// Validate a chroma matrix (one 12-element vector per frame)
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the matrix is empty or any frame
/// does not have exactly 12 elements.
pub fn validate_chroma_frames(frames: &[Vec<f32>]) -> Result<(), AnalysisError> {
    if frames.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "Empty chroma matrix".to_string(),
        ));
    }

    for (i, frame) in frames.iter().enumerate() {
        if frame.len() != NUM_PITCH_CLASSES {
            return Err(AnalysisError::InvalidInput(format!(
                "Chroma frame at index {} has {} elements, expected 12",
                i,
                frame.len()
            )));
        }
    }

    Ok(())
}

/// Average a chroma matrix over its frames into one chroma vector
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the matrix is empty or malformed.
pub fn average_chroma(frames: &[Vec<f32>]) -> Result<Vec<f32>, AnalysisError> {
    validate_chroma_frames(frames)?;

    let mut avg = vec![0.0f32; NUM_PITCH_CLASSES];
    for frame in frames {
        for (acc, &v) in avg.iter_mut().zip(frame.iter()) {
            *acc += v;
        }
    }

    let n = frames.len() as f32;
    for v in avg.iter_mut() {
        *v /= n;
    }

    Ok(avg)
}
