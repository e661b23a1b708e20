use serde_json;

use crate::analysis::{Analyzer, IntervalAnalyzer};
use crate::chord::Chord;
use crate::err::Error;
use crate::midi::{chord_to_midi, BASE_MIDI};
use crate::mutate::{
    alternate_shifts, sequential_shifts, single_note_mutations, tritone_rotation,
};
use crate::names::{chord_names, Naming};
use crate::pitch::PitchClass;

/// The mutation catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Operation {
    Base,
    Tritone,
    Single,
    Sequential,
    Alternate,
}

impl Operation {
    /// Resolve an operation selector, rejecting anything outside the set.
    pub fn new(name: &str) -> Result<Operation, Error> {
        match name {
            "base" => Ok(Operation::Base),
            "tritone" => Ok(Operation::Tritone),
            "single" => Ok(Operation::Single),
            "sequential" => Ok(Operation::Sequential),
            "alternate" => Ok(Operation::Alternate),
            _ => Err(Error::UnknownOperation(name.to_string())),
        }
    }
}

/// Build the diminished seventh chord on `root` and apply one mutation
/// family, pairing every result with its label.
pub fn run_operation(op: Operation, root: PitchClass) -> Vec<(&'static str, Chord)> {
    let base = Chord::dim7(root);
    match op {
        Operation::Base => vec![("Base", base)],
        Operation::Tritone => vec![("Tritone Rotation", tritone_rotation(&base))],
        Operation::Single => single_note_mutations(&base)
            .into_iter()
            .map(|chord| ("Single Mutation", chord))
            .collect(),
        Operation::Sequential => sequential_shifts(&base)
            .into_iter()
            .map(|chord| ("Sequential Shift", chord))
            .collect(),
        Operation::Alternate => alternate_shifts(&base)
            .into_iter()
            .map(|chord| ("Alternate Shift", chord))
            .collect(),
    }
}

/// One reported chord.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub label: &'static str,
    pub chord: Vec<&'static str>,
    pub analysis: String,
    pub pitches: Vec<String>,
}

/// Run an operation and hand every result chord to the analyzer.
pub fn report(
    op: Operation,
    root: PitchClass,
    naming: Naming,
    analyzer: &dyn Analyzer,
) -> Vec<Report> {
    run_operation(op, root)
        .into_iter()
        .map(|(label, chord)| {
            let analysis = analyzer.analyze(&chord_to_midi(&chord, BASE_MIDI));
            Report {
                label: label,
                chord: chord_names(&chord, naming),
                analysis: analysis.name,
                pitches: analysis.pitches,
            }
        })
        .collect()
}

/// The full report as JSON, using the built in analyzer.
pub fn report_json(op: Operation, root: PitchClass, naming: Naming) -> String {
    let analyzer = IntervalAnalyzer::new();
    let results = report(op, root, naming, &analyzer);
    serde_json::to_string_pretty(&results).unwrap()
}
