extern crate docopt;
#[macro_use]
extern crate serde_derive;

use std::io;
use std::io::Write;

use docopt::Docopt;

use dim7::{
    note_to_pc, pitch_class_circle, report, report_json, Error, IntervalAnalyzer,
    Naming, Operation,
};

const USAGE: &str = "
Dim7.

Generates and analyses mutations of the diminished seventh chord.

Usage:
  dim7 [options] <operation> <root>
  dim7 (-h | --help)
  dim7 --version

Operations:
  base        Show the base diminished seventh chord.
  tritone     Rotate the whole chord by a tritone.
  single      Shift one note by a semitone (all possibilities).
  sequential  Shift contiguous segments by a semitone.
  alternate   Shift even or odd positions by a semitone.

Options:
  -h --help        Show this screen.
  --naming=NAME    Spell notes with sharps or flats [default: sharp].
  --json           Output the results as JSON.
  --plot           Draw the 12 pitch classes on a circle afterwards.
";

#[derive(Debug, Deserialize)]
struct Args {
    arg_operation: String,
    arg_root: String,
    flag_naming: String,
    flag_json: bool,
    flag_plot: bool,
    flag_version: bool,
}

fn run_app(args: &Args) -> Result<(), Error> {
    let naming = Naming::new(&args.flag_naming)?;
    let op = Operation::new(&args.arg_operation)?;
    let root = note_to_pc(args.arg_root.trim())?;

    if args.flag_json {
        println!("{}", report_json(op, root, naming));
    } else {
        let analyzer = IntervalAnalyzer::new();
        for entry in report(op, root, naming, &analyzer) {
            println!(
                "{}: {:?} | Analysis: {} | Pitches: {:?}",
                entry.label, entry.chord, entry.analysis, entry.pitches
            );
        }
    }

    if args.flag_plot {
        print!("{}", pitch_class_circle(naming));
    }

    Ok(())
}

fn main() {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    if args.flag_version {
        println!("v0.1.0");
        return;
    }

    let code = match run_app(&args) {
        Ok(_) => 0,
        Err(err) => {
            writeln!(io::stderr(), "Error: {}", err).unwrap();
            1
        }
    };

    std::process::exit(code);
}
