//! Chord identification.
//!
//! Identification proper is a black box behind the `Analyzer` trait: MIDI
//! numbers in, a quality label and spelled pitches out. `IntervalAnalyzer`
//! is the built in implementation, a lookup over interval patterns that
//! covers the qualities these mutations commonly land on.

use crate::names::Naming;
use crate::pitch::{mod12, PitchClass};

/// What the analyzer had to say about one chord.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Analysis {
    pub name: String,
    pub pitches: Vec<String>,
}

/// Narrow interface to a chord identification service.
pub trait Analyzer {
    fn analyze(&self, midi: &[usize]) -> Analysis;
}

/// Quality names keyed by the interval pattern above a candidate root.
const QUALITIES: [(&str, &[usize]); 12] = [
    ("diminished seventh chord", &[0, 3, 6, 9]),
    ("half-diminished seventh chord", &[0, 3, 6, 10]),
    ("minor seventh chord", &[0, 3, 7, 10]),
    ("dominant seventh chord", &[0, 4, 7, 10]),
    ("major seventh chord", &[0, 4, 7, 11]),
    ("minor-major seventh chord", &[0, 3, 7, 11]),
    ("augmented seventh chord", &[0, 4, 8, 10]),
    ("major triad", &[0, 4, 7]),
    ("minor triad", &[0, 3, 7]),
    ("diminished triad", &[0, 3, 6]),
    ("augmented triad", &[0, 4, 8]),
    ("tritone", &[0, 6]),
];

pub struct IntervalAnalyzer;

impl IntervalAnalyzer {
    pub fn new() -> IntervalAnalyzer {
        IntervalAnalyzer {}
    }

    /// Try each member of the set as a root and look its interval pattern
    /// up in the quality table.
    fn classify(set: &[PitchClass]) -> Option<&'static str> {
        for &root in set {
            let mut intervals: Vec<usize> = set
                .iter()
                .map(|&pc| mod12(pc as i64 - root as i64))
                .collect();
            intervals.sort();
            for &(name, pattern) in QUALITIES.iter() {
                if intervals == pattern {
                    return Some(name);
                }
            }
        }
        None
    }
}

impl Default for IntervalAnalyzer {
    fn default() -> IntervalAnalyzer {
        IntervalAnalyzer::new()
    }
}

impl Analyzer for IntervalAnalyzer {
    fn analyze(&self, midi: &[usize]) -> Analysis {
        let classes: Vec<PitchClass> = midi.iter().map(|&m| m % 12).collect();

        let mut set = classes.clone();
        set.sort();
        set.dedup();

        let name = match IntervalAnalyzer::classify(&set) {
            Some(name) => name.to_string(),
            None => format!("unidentified {}-note chord", set.len()),
        };
        let pitches = classes
            .iter()
            .map(|&pc| Naming::Sharp.name(pc).to_string())
            .collect();

        Analysis {
            name: name,
            pitches: pitches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(midi: &[usize]) -> Analysis {
        IntervalAnalyzer::new().analyze(midi)
    }

    #[test]
    fn recognizes_the_seed_chord() {
        let result = analyze(&[60, 63, 66, 69]);
        assert_eq!(result.name, "diminished seventh chord");
        assert_eq!(result.pitches, vec!["C", "D#", "F#", "A"]);
    }

    #[test]
    fn recognizes_qualities_in_any_rotation() {
        // G7 voiced from its third
        let result = analyze(&[59, 62, 65, 67]);
        assert_eq!(result.name, "dominant seventh chord");
    }

    #[test]
    fn recognizes_a_minor_seventh() {
        assert_eq!(analyze(&[60, 63, 67, 70]).name, "minor seventh chord");
    }

    #[test]
    fn collapsed_positions_reduce_the_set() {
        // Two voices on the same pitch class leave a diminished triad
        let result = analyze(&[60, 63, 66, 72]);
        assert_eq!(result.name, "diminished triad");
        assert_eq!(result.pitches.len(), 4);
    }

    #[test]
    fn unmatched_sets_fall_back_to_a_generic_label() {
        let result = analyze(&[60, 61, 62, 63]);
        assert_eq!(result.name, "unidentified 4-note chord");
    }
}
