//! Key estimation from detected chord events
//!
//! A deliberately crude heuristic: the most frequent chord symbol names the
//! key, and its suffix decides the mode. Good enough to label a progression;
//! not a substitute for profile-based key detection.

use super::result::ChordEvent;

/// Estimate the overall key from a sequence of chord events
///
/// Counts exact chord symbols and takes the most frequent one (first seen
/// wins ties), then reads the mode off its suffix:
///
/// - contains "maj", or contains '7' without being minor: major
/// - contains 'm' (and not "maj"): minor
/// - otherwise the symbol is reported verbatim with "(Unknown)"
///
/// # Returns
///
/// A label like "Bb Major", "A Minor", "C (Unknown)", or "Unknown" when
/// there are no events.
pub fn estimate_key(events: &[ChordEvent]) -> String {
    if events.is_empty() {
        return "Unknown".to_string();
    }

    // First-seen order is the tie-break, so count without a hash map
    let mut symbols: Vec<(&str, usize)> = Vec::new();
    for event in events {
        match symbols.iter_mut().find(|(s, _)| *s == event.symbol) {
            Some((_, count)) => *count += 1,
            None => symbols.push((&event.symbol, 1)),
        }
    }

    let mut best = symbols[0];
    for &entry in &symbols[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    let symbol = best.0;

    let (root, rest) = split_root(symbol);
    let minor = rest.contains('m') && !rest.contains("maj");

    let key = if rest.contains("maj") || (!minor && rest.contains('7')) {
        format!("{} Major", root)
    } else if minor {
        format!("{} Minor", root)
    } else {
        format!("{} (Unknown)", symbol)
    };

    log::debug!("Estimated key {} from {} events", key, events.len());
    key
}

/// Split a chord symbol into root note name and the remaining suffix
fn split_root(symbol: &str) -> (&str, &str) {
    let mut root_len = 1;
    let bytes = symbol.as_bytes();
    if bytes.len() > 1 && (bytes[1] == b'#' || bytes[1] == b'b') {
        root_len = 2;
    }
    symbol.split_at(root_len.min(symbol.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::result::Quality;

    fn event(symbol: &str) -> ChordEvent {
        ChordEvent {
            symbol: symbol.to_string(),
            start_time: 0.0,
            end_time: 1.0,
            confidence: 0.9,
            root: symbol.chars().take(1).collect(),
            quality: Quality::Major,
            extensions: vec![],
        }
    }

    #[test]
    fn test_empty_events_unknown() {
        assert_eq!(estimate_key(&[]), "Unknown");
    }

    #[test]
    fn test_flat_root_seventh_is_major() {
        let events = vec![event("Bb7#11"), event("Bb7#11"), event("Bb7#11")];
        assert_eq!(estimate_key(&events), "Bb Major");
    }

    #[test]
    fn test_minor_seventh_is_minor() {
        let events = vec![event("Am7"), event("Am7"), event("C")];
        assert_eq!(estimate_key(&events), "A Minor");
    }

    #[test]
    fn test_maj7_is_major() {
        let events = vec![event("Cmaj7")];
        assert_eq!(estimate_key(&events), "C Major");
    }

    #[test]
    fn test_plain_triad_is_unknown_mode() {
        let events = vec![event("C"), event("C")];
        assert_eq!(estimate_key(&events), "C (Unknown)");
    }

    #[test]
    fn test_dim_reads_as_minor() {
        // The suffix heuristic sees the 'm' in "dim"
        let events = vec![event("Cdim")];
        assert_eq!(estimate_key(&events), "C Minor");
    }

    #[test]
    fn test_first_seen_wins_ties() {
        let events = vec![event("G7"), event("Am"), event("G7"), event("Am")];
        assert_eq!(estimate_key(&events), "G Major");
    }

    #[test]
    fn test_sharp_root_preserved() {
        let events = vec![event("F#m"), event("F#m")];
        assert_eq!(estimate_key(&events), "F# Minor");
    }
}
