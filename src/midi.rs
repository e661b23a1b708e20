use crate::chord::Chord;

/// Middle C, the default anchor octave.
pub const BASE_MIDI: usize = 60;

/// Absolute note numbers for a chord, anchored at `base`.
///
/// The chord's first position is the pivot and maps to exactly `base`;
/// every other position lands in the octave above it. Which octave a tone
/// "really" belonged to is discarded on purpose, only pitch class identity
/// and position order matter downstream.
pub fn chord_to_midi(chord: &Chord, base: usize) -> Vec<usize> {
    let pivot = match chord.notes().first() {
        Some(&note) => note as i64,
        None => return Vec::new(),
    };
    chord
        .notes()
        .iter()
        .map(|&note| {
            let mut offset = note as i64 - pivot;
            if offset < 0 {
                offset += 12;
            }
            (base as i64 + offset) as usize
        })
        .collect()
}
