extern crate dim7;
extern crate serde_json;

use dim7::{
    note_to_pc, report, report_json, Analysis, Analyzer, IntervalAnalyzer, Naming,
    Operation,
};

struct FixedAnalyzer;

impl Analyzer for FixedAnalyzer {
    fn analyze(&self, midi: &[usize]) -> Analysis {
        Analysis {
            name: format!("{} notes", midi.len()),
            pitches: Vec::new(),
        }
    }
}

#[test]
fn test_report_base_chord() {
    let analyzer = IntervalAnalyzer::new();
    let results = report(Operation::Base, 0, Naming::Sharp, &analyzer);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].label, "Base");
    assert_eq!(results[0].chord, vec!["C", "D#", "F#", "A"]);
    assert_eq!(results[0].analysis, "diminished seventh chord");
    assert_eq!(results[0].pitches, vec!["C", "D#", "F#", "A"]);
}

#[test]
fn test_report_respects_naming() {
    let analyzer = IntervalAnalyzer::new();
    let root = note_to_pc("Eb").unwrap();
    let results = report(Operation::Base, root, Naming::Flat, &analyzer);
    assert_eq!(results[0].chord, vec!["Eb", "Gb", "A", "C"]);
}

#[test]
fn test_report_accepts_external_analyzers() {
    let results = report(Operation::Tritone, 0, Naming::Sharp, &FixedAnalyzer);
    assert_eq!(results[0].analysis, "4 notes");
    assert!(results[0].pitches.is_empty());
}

#[test]
fn test_tritone_of_dim7_is_still_dim7() {
    // The rotation permutes the same symmetric pitch class set
    let analyzer = IntervalAnalyzer::new();
    let results = report(Operation::Tritone, 0, Naming::Sharp, &analyzer);
    assert_eq!(results[0].analysis, "diminished seventh chord");
    assert_eq!(results[0].chord, vec!["F#", "A", "C", "D#"]);
}

#[test]
fn test_json_report_shape() {
    let text = report_json(Operation::Single, 0, Naming::Sharp);
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 8);
    for entry in entries {
        assert_eq!(entry["label"], "Single Mutation");
        assert_eq!(entry["chord"].as_array().unwrap().len(), 4);
        assert!(entry["analysis"].is_string());
        assert_eq!(entry["pitches"].as_array().unwrap().len(), 4);
    }
}
