//! Chord template library
//!
//! Fixed, hand-authored mapping from chord name to a 12-element chroma
//! pattern of 0/1 flags marking chord-tone pitch classes. Patterns are not
//! normalized (sums vary from 2 to 6; the G# family rows carry only two
//! flags as authored). The table is built once and never
//! mutated; iteration order is the authored insertion order, which the
//! matcher relies on for stable tie-breaking (first-inserted wins).

use std::sync::OnceLock;

use crate::error::AnalysisError;

/// One authored chord template: (name, 0/1 chroma pattern)
pub type ChordTemplate = (&'static str, [f32; 12]);

/// Authored chord table, pitch classes [C, C#, D, D#, E, F, F#, G, G#, A, A#, B]
#[rustfmt::skip]
const TEMPLATE_TABLE: [ChordTemplate; 66] = [
    // Major chords
    ("C",      [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]), // C-E-G
    ("C#",     [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // C#-F-G#
    ("D",      [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // D-F#-A
    ("D#",     [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // D#-G-A#
    ("E",      [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]), // E-G#-B
    ("F",      [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // F-A-C
    ("F#",     [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // F#-A#-C#
    ("G",      [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]), // G-B-D
    ("G#",     [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // G#-C-D#
    ("A",      [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // A-C#-E
    ("A#",     [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // A#-D-F
    ("B",      [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]), // B-D#-F#

    // Minor chords
    ("Cm",     [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]), // C-Eb-G
    ("C#m",    [0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // C#-E-G#
    ("Dm",     [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // D-F-A
    ("D#m",    [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // D#-F#-A#
    ("Em",     [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]), // E-G-B
    ("Fm",     [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // F-Ab-C
    ("F#m",    [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // F#-A-C#
    ("Gm",     [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // G-Bb-D
    ("G#m",    [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]), // G#-B-D#
    ("Am",     [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // A-C-E
    ("A#m",    [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // A#-C#-F
    ("Bm",     [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]), // B-D-F#

    // Dominant 7th chords
    ("C7",     [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // C-E-G-Bb
    ("C#7",    [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]), // C#-F-G#-B
    ("D7",     [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // D-F#-A-C
    ("D#7",    [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // D#-G-A#-C#
    ("E7",     [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]), // E-G#-B-D
    ("F7",     [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // F-A-C-Eb
    ("F#7",    [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // F#-A#-C#-E
    ("G7",     [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]), // G-B-D-F
    ("G#7",    [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // G#-C-D#-F#
    ("A7",     [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // A-C#-E-G
    ("A#7",    [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // A#-D-F-G#
    ("B7",     [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]), // B-D#-F#-A

    // Major 7th chords
    ("Cmaj7",  [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]), // C-E-G-B
    ("C#maj7", [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // C#-F-G#-C
    ("Dmaj7",  [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // D-F#-A-C#
    ("D#maj7", [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // D#-G-A#-D
    ("Emaj7",  [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]), // E-G#-B-D#
    ("Fmaj7",  [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // F-A-C-E
    ("F#maj7", [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // F#-A#-C#-F
    ("Gmaj7",  [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]), // G-B-D-F#
    ("G#maj7", [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // G#-C-D#-G
    ("Amaj7",  [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // A-C#-E-G#
    ("A#maj7", [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // A#-D-F-A
    ("Bmaj7",  [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]), // B-D#-F#-A#

    // Minor 7th chords
    ("Cm7",    [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // C-Eb-G-Bb
    ("C#m7",   [0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]), // C#-E-G#-B
    ("Dm7",    [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // D-F-A-C
    ("D#m7",   [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // D#-F#-A#-C#
    ("Em7",    [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]), // E-G-B-D
    ("Fm7",    [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]), // F-Ab-C-Eb
    ("F#m7",   [0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // F#-A-C#-E
    ("Gm7",    [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // G-Bb-D-F
    ("G#m7",   [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]), // G#-B-D#-F#
    ("Am7",    [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]), // A-C-E-G
    ("A#m7",   [0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // A#-C#-F-G#
    ("Bm7",    [0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]), // B-D-F#-A

    // Special chords
    ("Bb7#11", [1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // Bb-D-F-Ab-E
    ("Bb6",    [1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]), // Bb-D-F-G
    ("Bb6/Ab", [1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0]), // Bb-D-Ab-C
    ("Bb7",    [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]), // Bb-D-F-Ab
    ("Bb",     [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]), // Bb-D-F
    ("Bb9",    [1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0]), // Bb-D-F-Ab-C
];

/// Chord template library (insertion-ordered, read-only after construction)
#[derive(Debug, Clone)]
pub struct ChordTemplates {
    templates: Vec<ChordTemplate>,
}

impl ChordTemplates {
    /// Create a new template library from the authored table
    pub fn new() -> Self {
        Self {
            templates: TEMPLATE_TABLE.to_vec(),
        }
    }

    /// Process-wide read-only template library
    ///
    /// Built on first access and shared thereafter; never mutated, so no
    /// further synchronization is needed.
    pub fn global() -> &'static ChordTemplates {
        static GLOBAL: OnceLock<ChordTemplates> = OnceLock::new();
        GLOBAL.get_or_init(ChordTemplates::new)
    }

    /// Look up a chord template by name
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::NotFound` if the chord name is not in the
    /// library. An unknown name here indicates a programming error; callers
    /// should pre-validate against [`ChordTemplates::all_names`].
    pub fn get_template(&self, name: &str) -> Result<&[f32; 12], AnalysisError> {
        self.templates
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, pattern)| pattern)
            .ok_or_else(|| AnalysisError::NotFound(format!("Chord template not found: {}", name)))
    }

    /// All chord names in insertion order
    pub fn all_names(&self) -> Vec<&'static str> {
        self.templates.iter().map(|(name, _)| *name).collect()
    }

    /// Iterate over (name, pattern) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &ChordTemplate> {
        self.templates.iter()
    }

    /// Number of templates in the library
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True if the library is empty (never the case for the authored table)
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for ChordTemplates {
    fn default() -> Self {
        Self::new()
    }
}
