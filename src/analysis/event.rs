//! Chord event construction
//!
//! Turns chroma segments into timed, classified chord events: average the
//! segment's chroma, pick a root, rotate, classify quality and extensions,
//! and score confidence from the strongest pitch classes. Segments are
//! independent, so they are classified in parallel.

use rayon::prelude::*;
use std::cmp::Ordering;

use super::confidence::clarity_distinctness_confidence;
use super::result::{ChordEvent, Quality};
use crate::error::AnalysisError;
use crate::features::chords::quality::{classify_quality, detect_extensions, rotate_to_root};
use crate::features::chroma::{average_chroma, PITCH_CLASSES};
use crate::features::segmentation::ChordSegment;

/// Number of strongest pitch classes considered for root and confidence
const TOP_PITCH_CLASSES: usize = 4;

/// Build classified chord events from chroma segments
///
/// Each segment becomes one event. The root is the strongest pitch class of
/// the segment's average chroma; on exact energy ties the tied candidates
/// are each tried as root and the one whose rotation correlates best with
/// any quality template wins, lowest pitch class on a residual tie.
///
/// # Arguments
///
/// * `chroma` - chroma matrix, one 12-element vector per frame
/// * `segments` - chord segments indexing into `chroma`
/// * `sample_rate` - audio sample rate in Hz
/// * `hop_length` - hop length in samples between frames
/// * `extension_threshold` - chroma energy above which an extension tone
///   is reported (typically 0.3)
///
/// # Returns
///
/// One [`ChordEvent`] per segment, in segment order.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if a segment is empty or reaches
/// outside the chroma matrix.
pub fn build_chord_events(
    chroma: &[Vec<f32>],
    segments: &[ChordSegment],
    sample_rate: u32,
    hop_length: usize,
    extension_threshold: f32,
) -> Result<Vec<ChordEvent>, AnalysisError> {
    let frame_duration = hop_length as f32 / sample_rate as f32;

    let events: Result<Vec<ChordEvent>, AnalysisError> = segments
        .par_iter()
        .map(|segment| {
            if segment.is_empty() || segment.end_frame > chroma.len() {
                return Err(AnalysisError::InvalidInput(format!(
                    "Segment ({}, {}) out of bounds for {} frames",
                    segment.start_frame,
                    segment.end_frame,
                    chroma.len()
                )));
            }

            let avg = average_chroma(&chroma[segment.start_frame..segment.end_frame])?;
            let (root, rotated, quality) = classify_root_and_quality(&avg);

            let extensions = detect_extensions(&rotated, extension_threshold);
            let symbol = format!("{}{}", PITCH_CLASSES[root], quality.suffix());

            let top_values = top_pitch_class_values(&avg);
            let confidence = clarity_distinctness_confidence(&top_values);

            Ok(ChordEvent {
                symbol,
                start_time: segment.start_frame as f32 * frame_duration,
                end_time: segment.end_frame as f32 * frame_duration,
                confidence,
                root: PITCH_CLASSES[root].to_string(),
                quality,
                extensions,
            })
        })
        .collect();

    let events = events?;
    log::debug!("Built {} chord events from {} segments", events.len(), segments.len());
    Ok(events)
}

/// Pick the root pitch class and classify quality in one pass
///
/// Candidates are the top pitch classes tied at the maximum average energy;
/// each is rotated to index 0 and the rotation with the best quality
/// correlation decides both the root and the quality.
fn classify_root_and_quality(avg: &[f32]) -> (usize, Vec<f32>, Quality) {
    let max_val = avg.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let candidates: Vec<usize> = (0..avg.len()).filter(|&i| avg[i] == max_val).collect();

    let mut best_root = candidates[0];
    let mut best_rotated = rotate_to_root(avg, best_root);
    let (mut best_quality, mut best_score) = classify_quality(&best_rotated);

    for &root in &candidates[1..] {
        let rotated = rotate_to_root(avg, root);
        let (quality, score) = classify_quality(&rotated);
        // Strictly greater: the lowest tied pitch class wins residual ties
        if score > best_score {
            best_root = root;
            best_rotated = rotated;
            best_quality = quality;
            best_score = score;
        }
    }

    (best_root, best_rotated, best_quality)
}

/// Values of the strongest pitch classes, strongest first
fn top_pitch_class_values(avg: &[f32]) -> Vec<f32> {
    let mut indices: Vec<usize> = (0..avg.len()).collect();
    indices.sort_by(|&a, &b| avg[b].partial_cmp(&avg[a]).unwrap_or(Ordering::Equal));
    indices
        .iter()
        .take(TOP_PITCH_CLASSES)
        .map(|&i| avg[i])
        .collect()
}

/// Canned progression returned when feature extraction fails
///
/// A plausible Cmaj7 / Am7 / Dm7 / G7 loop with fixed timings and
/// confidences. Returning this instead of an error keeps downstream
/// consumers rendering something; the metadata marks the substitution.
pub fn fallback_progression() -> Vec<ChordEvent> {
    let seventh = vec!["7".to_string()];
    vec![
        ChordEvent {
            symbol: "Cmaj7".to_string(),
            start_time: 0.0,
            end_time: 2.0,
            confidence: 0.87,
            root: "C".to_string(),
            quality: Quality::Major7,
            extensions: seventh.clone(),
        },
        ChordEvent {
            symbol: "Am7".to_string(),
            start_time: 2.0,
            end_time: 4.0,
            confidence: 0.82,
            root: "A".to_string(),
            quality: Quality::Minor7,
            extensions: seventh.clone(),
        },
        ChordEvent {
            symbol: "Dm7".to_string(),
            start_time: 4.0,
            end_time: 6.0,
            confidence: 0.85,
            root: "D".to_string(),
            quality: Quality::Minor7,
            extensions: seventh.clone(),
        },
        ChordEvent {
            symbol: "G7".to_string(),
            start_time: 6.0,
            end_time: 8.0,
            confidence: 0.89,
            root: "G".to_string(),
            quality: Quality::Dominant7,
            extensions: seventh,
        },
    ]
}
