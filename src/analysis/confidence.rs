//! Confidence scoring for chord detection
//!
//! Two families of confidence live here: clarity/distinctness over a set of
//! competing scores, and correlation-derived confidence for a single
//! template comparison. Every function returns a value in [0, 1] and maps
//! degenerate input to a fixed value instead of erroring.

use crate::features::chords::pearson_correlation;

/// Division guard for clarity and distinctness
const CONFIDENCE_EPSILON: f32 = 1e-6;

/// Confidence from the clarity and distinctness of competing scores
///
/// Clarity is the share of total energy held by the maximum; distinctness
/// is how far the maximum stands above the mean, in standard deviations
/// (population). The two are averaged and clamped to 1.0.
///
/// # Arguments
///
/// * `values` - candidate scores, typically the top pitch-class energies
///   of a segment
///
/// # Returns
///
/// Confidence in [0, 1]; an empty slice yields 0.0 with a warning.
pub fn clarity_distinctness_confidence(values: &[f32]) -> f32 {
    if values.is_empty() {
        log::warn!("Confidence requested for an empty score set");
        return 0.0;
    }

    let n = values.len() as f32;
    let max_val = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let sum: f32 = values.iter().sum();
    let mean = sum / n;

    let variance = values.iter().map(|&v| (v - mean) * (v - mean)).sum::<f32>() / n;
    let stddev = variance.sqrt();

    let clarity = max_val / (sum + CONFIDENCE_EPSILON);
    let distinctness = (max_val - mean) / (stddev + CONFIDENCE_EPSILON);

    ((clarity + distinctness) / 2.0).min(1.0)
}

/// Map a Pearson correlation coefficient to a confidence value
///
/// Linear rescale of [-1, 1] onto [0, 1]; NaN (degenerate correlation)
/// maps to 0.0.
pub fn correlation_to_confidence(r: f32) -> f32 {
    if r.is_nan() {
        return 0.0;
    }
    ((r + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Confidence of a chroma vector against one chord template
///
/// Correlates the chroma with the template and converts the result with
/// [`correlation_to_confidence`]; correlations below `threshold` (and NaN)
/// report zero confidence rather than a small one.
pub fn template_match_confidence(chroma: &[f32], template: &[f32], threshold: f32) -> f32 {
    let r = pearson_correlation(chroma, template);
    if r.is_nan() || r < threshold {
        return 0.0;
    }
    correlation_to_confidence(r)
}
