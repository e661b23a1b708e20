//! The four mutation families.
//!
//! Each family is a pure function from a chord to one or more new chords
//! with a fixed enumeration order, so the same input always produces the
//! same list. None of them touches its input.

use crate::chord::Chord;
use crate::pitch::mod12;

/// Semitone shifts tried by the enumerating families, in order.
const SHIFTS: [i64; 2] = [-1, 1];

/// Move every note up a tritone.
///
/// Applying the rotation twice gives back the input chord.
pub fn tritone_rotation(chord: &Chord) -> Chord {
    let notes = chord.notes().iter().map(|&n| mod12(n as i64 + 6)).collect();
    Chord::new(notes)
}

/// Every chord reachable by moving one note a semitone either way.
///
/// Positions are visited in ascending order, down before up, giving `2n`
/// results for a chord of `n` notes. Two positions holding the same pitch
/// class can produce duplicate results; they are kept.
pub fn single_note_mutations(chord: &Chord) -> Vec<Chord> {
    let mut results = Vec::with_capacity(chord.len() * SHIFTS.len());
    for i in 0..chord.len() {
        for &shift in &SHIFTS {
            results.push(chord.with_shift(i, shift));
        }
    }
    results
}

/// Every chord reachable by moving a contiguous run of two or more notes
/// a semitone either way.
///
/// Single-position runs belong to `single_note_mutations` and are not
/// enumerated again here. `start` ascends, then `end`, then the shift.
pub fn sequential_shifts(chord: &Chord) -> Vec<Chord> {
    let n = chord.len();
    let mut results = Vec::new();
    for start in 0..n {
        for end in start + 1..n {
            for &shift in &SHIFTS {
                let mut notes = chord.notes().to_vec();
                for note in &mut notes[start..=end] {
                    *note = mod12(*note as i64 + shift);
                }
                results.push(Chord::new(notes));
            }
        }
    }
    results
}

/// The four parity chords: even positions up then down, odd positions up
/// then down. Parity is position parity, not pitch class parity.
pub fn alternate_shifts(chord: &Chord) -> Vec<Chord> {
    let mut results = Vec::with_capacity(4);
    for &parity in &[0, 1] {
        for &shift in &[1, -1] {
            let notes = chord
                .notes()
                .iter()
                .enumerate()
                .map(|(i, &n)| {
                    if i % 2 == parity {
                        mod12(n as i64 + shift)
                    } else {
                        n
                    }
                })
                .collect();
            results.push(Chord::new(notes));
        }
    }
    results
}
