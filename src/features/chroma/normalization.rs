//! Chroma normalization strategies

/// Numerical stability epsilon for max-normalization
const EPSILON: f32 = 1e-8;

/// Normalize a chroma vector so its maximum value is (approximately) 1
///
/// Divides by `max + epsilon`; a vector whose maximum is at or below the
/// epsilon is returned unchanged rather than blown up by the division.
///
/// # Arguments
///
/// * `chroma` - 12-element chroma vector
///
/// # Returns
///
/// Max-normalized chroma vector
pub fn normalize_max(chroma: &[f32]) -> Vec<f32> {
    let max_val = chroma.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    if max_val > EPSILON {
        chroma.iter().map(|&v| v / (max_val + EPSILON)).collect()
    } else {
        chroma.to_vec()
    }
}
