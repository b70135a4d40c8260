//! Chord quality classification and extension detection
//!
//! Works on root-rotated chroma vectors: the segment's averaged chroma is
//! rotated so the detected root sits at index 0, then correlated against
//! root-relative quality templates (intervals in semitones above the root).

use super::pearson_correlation;
use crate::analysis::result::Quality;

/// Root-relative quality templates, in declared priority order
///
/// Declaration order doubles as the tie-break: the classifier only replaces
/// the current best on a strictly greater correlation, so earlier qualities
/// win ties and `Major` is the all-scores-nonpositive default.
#[rustfmt::skip]
const QUALITY_TEMPLATES: [(Quality, [f32; 12]); 7] = [
    (Quality::Major,      [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]), // 1, 3, 5
    (Quality::Minor,      [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]), // 1, b3, 5
    (Quality::Dominant7,  [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // 1, 3, 5, b7
    (Quality::Major7,     [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]), // 1, 3, 5, 7
    (Quality::Minor7,     [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // 1, b3, 5, b7
    (Quality::Diminished, [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]), // 1, b3, b5
    (Quality::Augmented,  [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // 1, 3, #5
];

/// Rotate a chroma vector left so `root_idx` lands at index 0
pub fn rotate_to_root(chroma: &[f32], root_idx: usize) -> Vec<f32> {
    let n = chroma.len();
    (0..n).map(|i| chroma[(i + root_idx) % n]).collect()
}

/// Classify chord quality from a root-rotated chroma vector
///
/// Correlates the rotated vector against each quality template (normalized
/// to sum 1) and keeps the quality with the strictly highest correlation;
/// NaN correlations count as 0. If nothing scores above 0 the result
/// degrades to `Quality::Major` rather than failing.
///
/// # Returns
///
/// `(best_quality, best_correlation)`
pub fn classify_quality(rotated_chroma: &[f32]) -> (Quality, f32) {
    let mut best_quality = Quality::Major;
    let mut best_score = 0.0f32;

    for (quality, template) in QUALITY_TEMPLATES.iter() {
        let sum: f32 = template.iter().sum();
        let normalized: Vec<f32> = template.iter().map(|&v| v / sum).collect();

        let score = pearson_correlation(rotated_chroma, &normalized);
        let score = if score.is_nan() { 0.0 } else { score };

        if score > best_score {
            best_score = score;
            best_quality = *quality;
        }
    }

    (best_quality, best_score)
}

/// Detect chord extensions (9th, 11th, 13th) from a root-rotated chroma
///
/// Checks the 2nd, 4th, and 6th scale degrees (semitone offsets 2, 5, 9)
/// against the energy threshold; detection is independent of the classified
/// quality.
pub fn detect_extensions(rotated_chroma: &[f32], threshold: f32) -> Vec<String> {
    let mut extensions = Vec::new();

    if rotated_chroma[2] > threshold {
        extensions.push("9".to_string());
    }
    if rotated_chroma[5] > threshold {
        extensions.push("11".to_string());
    }
    if rotated_chroma[9] > threshold {
        extensions.push("13".to_string());
    }

    extensions
}
