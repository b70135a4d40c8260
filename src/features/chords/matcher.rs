//! Chord template matching
//!
//! Two matching strategies exist side by side because the engine grew two
//! analysis paths that never got reconciled:
//!
//! - [`MatchStrategy::WeightedMultiMetric`] blends correlation, a weighted
//!   dot product, and a chord-tone presence score, gated by a threshold.
//! - [`MatchStrategy::CorrelationOnly`] ranks templates by Pearson
//!   correlation alone and always reports the best name, however weak.
//!
//! Callers choose; neither is authoritative. Both iterate the library in
//! insertion order and keep the first-seen template on ties.

use serde::{Deserialize, Serialize};

use super::templates::ChordTemplates;
use super::{dot_product, pearson_correlation};
use crate::analysis::result::ChordMatch;
use crate::error::AnalysisError;
use crate::features::chroma::validate_chroma_vector;

/// Chroma energy above which a pitch class counts as "present"
const PRESENCE_THRESHOLD: f32 = 0.1;

/// Epsilon added to the chroma maximum before max-normalization
const MAX_NORM_EPSILON: f32 = 1e-8;

/// Per-chord-tone bonus rewarding richer templates
///
/// Deliberate tie-break favoring 7th/9th templates over plain triads when
/// scores are close.
const COMPLEXITY_BONUS_PER_TONE: f32 = 0.01;

/// Template matching strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Weighted blend of correlation, dot product, and presence, with a
    /// complexity bonus and a minimum-score gate
    WeightedMultiMetric,

    /// Pearson correlation only, no threshold gate
    CorrelationOnly,
}

/// Match a chroma vector against the chord template library
///
/// # Arguments
///
/// * `chroma` - 12-element chroma vector
/// * `templates` - chord template library
/// * `strategy` - matching strategy (see module docs)
/// * `threshold` - minimum combined score for a named match
///   (WeightedMultiMetric only; typically 0.3)
///
/// # Returns
///
/// Best [`ChordMatch`]. With `WeightedMultiMetric`, a best score below the
/// threshold yields the chord name "Unknown" but still carries the best raw
/// combined score (downstream consumers rank near-misses with it), so it is
/// deliberately not zeroed.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the chroma vector does not have
/// exactly 12 elements.
pub fn match_chord(
    chroma: &[f32],
    templates: &ChordTemplates,
    strategy: MatchStrategy,
    threshold: f32,
) -> Result<ChordMatch, AnalysisError> {
    validate_chroma_vector(chroma)?;

    let result = match strategy {
        MatchStrategy::WeightedMultiMetric => {
            match_weighted_multi_metric(chroma, templates, threshold)
        }
        MatchStrategy::CorrelationOnly => match_correlation_only(chroma, templates),
    };

    log::debug!(
        "Matched chroma with {:?}: {} (score {:.4})",
        strategy,
        result.chord,
        result.score
    );

    Ok(result)
}

fn match_weighted_multi_metric(
    chroma: &[f32],
    templates: &ChordTemplates,
    threshold: f32,
) -> ChordMatch {
    let max_val = chroma.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let norm_chroma: Vec<f32> = chroma.iter().map(|&v| v / (max_val + MAX_NORM_EPSILON)).collect();

    let mut best_chord = "Unknown";
    let mut best_score = 0.0f32;

    for (name, pattern) in templates.iter() {
        // Metric 1: correlation (overall shape)
        let correlation = pearson_correlation(chroma, pattern);
        let correlation = if correlation.is_nan() { 0.0 } else { correlation };

        // Metric 2: dot product of max-normalized chroma with the raw pattern
        let dot = dot_product(&norm_chroma, pattern);

        // Metric 3: fraction of template chord tones present in the chroma
        let mut tones = 0u32;
        let mut hits = 0u32;
        for (&flag, &energy) in pattern.iter().zip(chroma.iter()) {
            if flag > 0.0 {
                tones += 1;
                if energy > PRESENCE_THRESHOLD {
                    hits += 1;
                }
            }
        }
        let presence = hits as f32 / tones as f32;

        let base = 0.4 * correlation + 0.4 * dot + 0.2 * presence;
        let complexity_bonus = pattern.iter().sum::<f32>() * COMPLEXITY_BONUS_PER_TONE;
        let combined = base + complexity_bonus;

        // Strictly greater: first-inserted template keeps ties
        if combined > best_score {
            best_score = combined;
            best_chord = name;
        }
    }

    if best_score >= threshold {
        ChordMatch {
            chord: best_chord.to_string(),
            score: best_score,
        }
    } else {
        ChordMatch {
            chord: "Unknown".to_string(),
            score: best_score,
        }
    }
}

fn match_correlation_only(chroma: &[f32], templates: &ChordTemplates) -> ChordMatch {
    let mut best_chord = "Unknown";
    let mut best_score = 0.0f32;

    for (name, pattern) in templates.iter() {
        let correlation = pearson_correlation(chroma, pattern);

        if !correlation.is_nan() && correlation > best_score {
            best_score = correlation;
            best_chord = name;
        }
    }

    ChordMatch {
        chord: best_chord.to_string(),
        score: best_score.max(0.0),
    }
}
