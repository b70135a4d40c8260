//! Chroma-based chord segmentation
//!
//! Splits a chroma matrix into stable-harmony regions by thresholding the
//! frame-to-frame L1 chroma difference. Boundaries land on the first frame
//! of the new harmony, so segment `(start, end)` covers frames
//! `start..end` exclusively.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::features::chroma::validate_chroma_frames;

/// A contiguous run of chroma frames with (approximately) stable harmony
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordSegment {
    /// First frame of the segment (inclusive)
    pub start_frame: usize,
    /// One past the last frame of the segment (exclusive)
    pub end_frame: usize,
}

impl ChordSegment {
    /// Segment length in frames
    pub fn len(&self) -> usize {
        self.end_frame - self.start_frame
    }

    /// True if the segment covers no frames
    pub fn is_empty(&self) -> bool {
        self.end_frame <= self.start_frame
    }
}

/// Segment a chroma matrix into stable chord regions
///
/// Computes `diff[t] = sum_i |chroma[t][i] - chroma[t-1][i]|` for
/// `t in 1..frames`, then places a boundary at every frame whose difference
/// exceeds `mean + population standard deviation` of all differences.
/// Segments shorter than `min_duration` seconds are dropped silently;
/// their frames are not merged into neighbors.
///
/// # Arguments
///
/// * `chroma` - chroma matrix, one 12-element vector per frame
/// * `sample_rate` - audio sample rate in Hz
/// * `hop_length` - hop length in samples between consecutive frames
/// * `min_duration` - minimum chord duration in seconds
///
/// # Returns
///
/// Segments in time order. Perfectly constant chroma yields at most one
/// segment spanning everything; input shorter than the minimum duration
/// yields none.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the chroma matrix is empty or
/// any frame is not 12 elements long.
pub fn segment_chord_regions(
    chroma: &[Vec<f32>],
    sample_rate: u32,
    hop_length: usize,
    min_duration: f32,
) -> Result<Vec<ChordSegment>, AnalysisError> {
    validate_chroma_frames(chroma)?;

    let n_frames = chroma.len();
    let min_frames = min_duration * sample_rate as f32 / hop_length as f32;

    // Frame-to-frame L1 difference, indexed by the later frame
    let diffs: Vec<f32> = (1..n_frames)
        .map(|t| {
            chroma[t]
                .iter()
                .zip(chroma[t - 1].iter())
                .map(|(a, b)| (a - b).abs())
                .sum()
        })
        .collect();

    let mut segments = Vec::new();

    if diffs.is_empty() {
        // Single frame: one segment if it clears the duration floor
        if 1.0 >= min_frames {
            segments.push(ChordSegment {
                start_frame: 0,
                end_frame: n_frames,
            });
        }
        return Ok(segments);
    }

    let mean: f32 = diffs.iter().sum::<f32>() / diffs.len() as f32;
    let variance: f32 =
        diffs.iter().map(|&d| (d - mean) * (d - mean)).sum::<f32>() / diffs.len() as f32;
    let threshold = mean + variance.sqrt();

    let mut prev = 0usize;
    for (i, &diff) in diffs.iter().enumerate() {
        let onset = i + 1;
        if diff > threshold {
            if (onset - prev) as f32 >= min_frames {
                segments.push(ChordSegment {
                    start_frame: prev,
                    end_frame: onset,
                });
            }
            // Advance past dropped segments too, never merge them
            prev = onset;
        }
    }

    if (n_frames - prev) as f32 >= min_frames {
        segments.push(ChordSegment {
            start_frame: prev,
            end_frame: n_frames,
        });
    }

    log::debug!(
        "Segmented {} frames into {} chord regions (threshold {:.4}, min {:.1} frames)",
        n_frames,
        segments.len(),
        threshold,
        min_frames
    );

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RATE: u32 = 22050;
    const HOP_LENGTH: usize = 512;

    fn block(pattern: [f32; 12], frames: usize) -> Vec<Vec<f32>> {
        vec![pattern.to_vec(); frames]
    }

    #[test]
    fn test_empty_chroma_is_invalid() {
        let result = segment_chord_regions(&[], SAMPLE_RATE, HOP_LENGTH, 0.5);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_constant_chroma_single_segment() {
        let mut c = [0.0f32; 12];
        c[0] = 1.0;
        c[4] = 1.0;
        c[7] = 1.0;
        let chroma = block(c, 60);

        let segments =
            segment_chord_regions(&chroma, SAMPLE_RATE, HOP_LENGTH, 0.5).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start_frame, 0);
        assert_eq!(segments[0].end_frame, 60);
    }

    #[test]
    fn test_two_blocks_split_at_transition() {
        let mut c_major = [0.0f32; 12];
        c_major[0] = 1.0;
        c_major[4] = 1.0;
        c_major[7] = 1.0;
        let mut a_minor = [0.0f32; 12];
        a_minor[9] = 1.0;
        a_minor[0] = 1.0;
        a_minor[4] = 1.0;

        let mut chroma = block(c_major, 40);
        chroma.extend(block(a_minor, 40));

        let segments =
            segment_chord_regions(&chroma, SAMPLE_RATE, HOP_LENGTH, 0.5).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[0],
            ChordSegment {
                start_frame: 0,
                end_frame: 40
            }
        );
        assert_eq!(
            segments[1],
            ChordSegment {
                start_frame: 40,
                end_frame: 80
            }
        );
    }

    #[test]
    fn test_short_input_yields_no_segments() {
        // 0.5s at 22050/512 needs ~21.5 frames; 10 frames is below the floor
        let mut c = [0.0f32; 12];
        c[0] = 1.0;
        let chroma = block(c, 10);

        let segments =
            segment_chord_regions(&chroma, SAMPLE_RATE, HOP_LENGTH, 0.5).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_short_middle_segment_dropped_not_merged() {
        let mut a = [0.0f32; 12];
        a[0] = 1.0;
        let mut b = [0.0f32; 12];
        b[6] = 1.0;
        let mut c = [0.0f32; 12];
        c[3] = 1.0;

        // 30 + 5 + 30: the 5-frame middle vanishes, neighbors keep their spans
        let mut chroma = block(a, 30);
        chroma.extend(block(b, 5));
        chroma.extend(block(c, 30));

        let segments =
            segment_chord_regions(&chroma, SAMPLE_RATE, HOP_LENGTH, 0.5).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].end_frame, 30);
        assert_eq!(segments[1].start_frame, 35);
        assert_eq!(segments[1].end_frame, 65);
    }

    #[test]
    fn test_single_frame_zero_min_duration() {
        let chroma = block([0.1f32; 12], 1);
        let segments = segment_chord_regions(&chroma, SAMPLE_RATE, HOP_LENGTH, 0.0).unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), 1);
    }
}
