use crate::chord::Chord;
use crate::err::Error;
use crate::pitch::PitchClass;

pub const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Spelling preference for printed note names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Naming {
    Sharp,
    Flat,
}

impl Naming {
    pub fn new(name: &str) -> Result<Naming, Error> {
        match name {
            "sharp" | "" => Ok(Naming::Sharp),
            "flat" => Ok(Naming::Flat),
            _ => Err(Error::UnknownNaming(name.to_string())),
        }
    }

    pub fn name(&self, pc: PitchClass) -> &'static str {
        match *self {
            Naming::Sharp => NOTE_NAMES_SHARP[pc % 12],
            Naming::Flat => NOTE_NAMES_FLAT[pc % 12],
        }
    }
}

/// Resolve a textual root name, sharp and flat spellings both accepted.
pub fn note_to_pc(name: &str) -> Result<PitchClass, Error> {
    match name {
        "C" => Ok(0),
        "C#" | "Db" => Ok(1),
        "D" => Ok(2),
        "D#" | "Eb" => Ok(3),
        "E" => Ok(4),
        "F" => Ok(5),
        "F#" | "Gb" => Ok(6),
        "G" => Ok(7),
        "G#" | "Ab" => Ok(8),
        "A" => Ok(9),
        "A#" | "Bb" => Ok(10),
        "B" => Ok(11),
        _ => Err(Error::UnknownNote(name.to_string())),
    }
}

pub fn chord_names(chord: &Chord, naming: Naming) -> Vec<&'static str> {
    chord.notes().iter().map(|&n| naming.name(n)).collect()
}
