//! Chord classification modules
//!
//! Classify chroma vectors into chord symbols using:
//! - A fixed, hand-authored chord template library (66 patterns)
//! - Template matching (two strategies, see [`matcher::MatchStrategy`])
//! - Root/quality/extension classification for chord events

pub mod matcher;
pub mod quality;
pub mod templates;

pub use matcher::{match_chord, MatchStrategy};
pub use quality::{classify_quality, detect_extensions};
pub use templates::ChordTemplates;

/// Pearson correlation coefficient between two equal-length vectors
///
/// Returns `f32::NAN` when either vector has zero variance (mirrors the
/// behavior of standard correlation routines on degenerate input); callers
/// decide how to handle the NaN case.
///
/// Accumulates in f64 for numerical stability.
pub fn pearson_correlation(x: &[f32], y: &[f32]) -> f32 {
    debug_assert_eq!(x.len(), y.len());

    let n = x.len();
    if n == 0 {
        return f32::NAN;
    }

    let mean_x: f64 = x.iter().map(|&v| v as f64).sum::<f64>() / n as f64;
    let mean_y: f64 = y.iter().map(|&v| v as f64).sum::<f64>() / n as f64;

    let mut cov = 0.0f64;
    let mut var_x = 0.0f64;
    let mut var_y = 0.0f64;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi as f64 - mean_x;
        let dy = yi as f64 - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f32::NAN;
    }

    (cov / denom) as f32
}

/// Dot product of two equal-length vectors
pub(crate) fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pearson_self_correlation() {
        let v = vec![1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let r = pearson_correlation(&v, &v);
        assert!((r - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pearson_anti_correlation() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![4.0, 3.0, 2.0, 1.0];
        let r = pearson_correlation(&x, &y);
        assert!((r + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pearson_degenerate_is_nan() {
        let x = vec![0.5f32; 12];
        let y = vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        assert!(pearson_correlation(&x, &y).is_nan());
        assert!(pearson_correlation(&[], &[]).is_nan());
    }

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert_eq!(dot_product(&a, &b), 32.0);
    }
}
