//! Result types for chord analysis
//!
//! All result types serialize with serde so callers can ship them over an
//! API boundary or persist them as JSON without conversion.

use serde::{Deserialize, Serialize};

/// Best match from the chord template library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordMatch {
    /// Chord symbol, or "Unknown" when no template clears the gate
    pub chord: String,
    /// Combined match score (strategy-dependent scale)
    pub score: f32,
}

/// Chord quality classified from a root-rotated chroma vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Major triad
    Major,
    /// Minor triad
    Minor,
    /// Dominant seventh
    Dominant7,
    /// Major seventh
    Major7,
    /// Minor seventh
    Minor7,
    /// Diminished triad
    Diminished,
    /// Augmented triad
    Augmented,
}

impl Quality {
    /// Symbol suffix appended to the root note name
    pub fn suffix(&self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Dominant7 => "7",
            Quality::Major7 => "maj7",
            Quality::Minor7 => "m7",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
        }
    }
}

/// A single detected chord with timing and classification detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordEvent {
    /// Full chord symbol, e.g. "Cmaj7" or "Am"
    pub symbol: String,
    /// Event start time in seconds
    pub start_time: f32,
    /// Event end time in seconds
    pub end_time: f32,
    /// Detection confidence in [0, 1]
    pub confidence: f32,
    /// Root pitch class name, e.g. "C" or "A#"
    pub root: String,
    /// Classified chord quality
    pub quality: Quality,
    /// Detected extensions ("9", "11", "13"), in ascending order
    pub extensions: Vec<String>,
}

impl ChordEvent {
    /// Event duration in seconds
    pub fn duration(&self) -> f32 {
        self.end_time - self.start_time
    }
}

/// Run statistics attached to every analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Number of chroma frames analyzed
    pub frame_count: usize,
    /// Analyzed duration in seconds
    pub duration_seconds: f32,
    /// Audio sample rate in Hz
    pub sample_rate: u32,
    /// Hop length in samples
    pub hop_length: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
    /// Analysis algorithm version
    pub algorithm_version: String,
    /// True when the canned fallback progression replaced a failed analysis
    pub used_fallback: bool,
}

/// Complete chord progression analysis result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionResult {
    /// Detected chord events in time order
    pub events: Vec<ChordEvent>,
    /// Estimated overall key, e.g. "C Major" or "Unknown"
    pub key: String,
    /// Run statistics
    pub metadata: AnalysisMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_suffixes() {
        assert_eq!(Quality::Major.suffix(), "");
        assert_eq!(Quality::Minor.suffix(), "m");
        assert_eq!(Quality::Dominant7.suffix(), "7");
        assert_eq!(Quality::Major7.suffix(), "maj7");
        assert_eq!(Quality::Minor7.suffix(), "m7");
        assert_eq!(Quality::Diminished.suffix(), "dim");
        assert_eq!(Quality::Augmented.suffix(), "aug");
    }

    #[test]
    fn test_quality_serializes_lowercase() {
        let json = serde_json::to_string(&Quality::Dominant7).unwrap();
        assert_eq!(json, "\"dominant7\"");
        let json = serde_json::to_string(&Quality::Major).unwrap();
        assert_eq!(json, "\"major\"");
    }

    #[test]
    fn test_event_duration() {
        let event = ChordEvent {
            symbol: "Am7".to_string(),
            start_time: 2.0,
            end_time: 4.0,
            confidence: 0.82,
            root: "A".to_string(),
            quality: Quality::Minor7,
            extensions: vec!["7".to_string()],
        };
        assert!((event.duration() - 2.0).abs() < 1e-6);
    }
}
