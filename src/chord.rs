use crate::pitch::{mod12, PitchClass};

/// Number of notes in the seed chord.
pub const CHORD_LEN: usize = 4;

/// Interval in semitones between adjacent members of the seed chord.
const GENERATOR: i64 = 3;

/// An ordered sequence of pitch classes.
///
/// Order is positional, not registral. Position `i` keeps its identity
/// across mutations even when its pitch class wraps past the octave, and
/// two positions may hold the same pitch class.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Chord {
    notes: Vec<PitchClass>,
}

impl Chord {
    pub fn new(notes: Vec<PitchClass>) -> Chord {
        Chord { notes: notes }
    }

    /// The diminished seventh chord on `root`, three minor thirds stacked.
    pub fn dim7(root: PitchClass) -> Chord {
        let notes = (0..CHORD_LEN as i64)
            .map(|i| mod12(root as i64 + GENERATOR * i))
            .collect();
        Chord { notes: notes }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    /// Copy of the chord with position `i` moved by `delta` semitones.
    pub fn with_shift(&self, i: usize, delta: i64) -> Chord {
        let mut notes = self.notes.clone();
        notes[i] = mod12(notes[i] as i64 + delta);
        Chord { notes: notes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dim7_on_c() {
        assert_eq!(Chord::dim7(0).notes(), &[0, 3, 6, 9]);
    }

    #[test]
    fn dim7_wraps_past_the_octave() {
        assert_eq!(Chord::dim7(9).notes(), &[9, 0, 3, 6]);
        assert_eq!(Chord::dim7(11).notes(), &[11, 2, 5, 8]);
    }

    #[test]
    fn dim7_has_four_notes_on_every_root() {
        for root in 0..12 {
            assert_eq!(Chord::dim7(root).len(), CHORD_LEN);
        }
    }

    #[test]
    fn with_shift_leaves_the_input_alone() {
        let chord = Chord::dim7(0);
        let next = chord.with_shift(0, -1);
        assert_eq!(next.notes(), &[11, 3, 6, 9]);
        assert_eq!(chord.notes(), &[0, 3, 6, 9]);
    }
}
