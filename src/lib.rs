mod analysis;
mod api;
mod chord;
mod circle;
mod err;
mod midi;
mod mutate;
mod names;
mod pitch;

extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

pub use crate::analysis::{Analysis, Analyzer, IntervalAnalyzer};
pub use crate::api::{report, report_json, run_operation, Operation, Report};
pub use crate::chord::{Chord, CHORD_LEN};
pub use crate::circle::pitch_class_circle;
pub use crate::err::Error;
pub use crate::midi::{chord_to_midi, BASE_MIDI};
pub use crate::mutate::{
    alternate_shifts, sequential_shifts, single_note_mutations, tritone_rotation,
};
pub use crate::names::{
    chord_names, note_to_pc, Naming, NOTE_NAMES_FLAT, NOTE_NAMES_SHARP,
};
pub use crate::pitch::{mod12, PitchClass};
