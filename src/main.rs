use scalemaker::{
    chord_kinds, diatonic_chords, frequency_from_reference, interval_definitions, scale_kinds,
    Chord, ChordKind, Scale, ScaleKind, TheoryError, TuningConfig,
};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: scalemaker [--config tuning.yaml] <command>

Commands:
  scale <root> <kind>     Tones of a scale, e.g. `scale C major`
  chord <root> <kind>     Tones of a chord, e.g. `chord G 7`
  triads <root> <kind>    Triads on every degree of a scale
  frequency <offset>      Equal-tempered frequency, semitones from concert A
  intervals               List the interval catalog
  scales                  List scale kinds
  chords                  List chord kinds";

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    // Parse flags
    let mut config = TuningConfig::default();
    if args.first().map(String::as_str) == Some("--config") {
        if args.len() < 2 {
            usage();
        }
        let path = args[1].clone();
        config = match TuningConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading '{}': {}", path, e);
                process::exit(1);
            }
        };
        args.drain(..2);
    }

    if let Err(e) = run(&config, &args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &TuningConfig, args: &[String]) -> Result<(), TheoryError> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["scale", root, kind] => {
            let scale = Scale::new(config.make_note(root, None, None)?, kind.parse()?)?;
            println!("{}:", scale.display_name());
            for (i, (tone, interval)) in scale.tones().iter().zip(scale.pattern()).enumerate() {
                println!(
                    "{:<3}. {}\t({:.2} Hz)\t[{}]",
                    i + 1,
                    tone,
                    tone.frequency(),
                    interval.display_name()
                );
            }
        }
        ["chord", root, kind] => {
            let kind: ChordKind = kind.parse()?;
            let chord = Chord::new(config.make_note(root, None, None)?, kind)?;
            println!("{} ({}):", chord, kind.display_name());
            for (tone, interval) in chord.tones().iter().zip(chord.pattern()) {
                println!("  {}\t({:.2} Hz)\t[{}]", tone, tone.frequency(), interval.display_name());
            }
        }
        ["triads", root, kind] => {
            let kind: ScaleKind = kind.parse()?;
            let scale = Scale::new(config.make_note(root, None, None)?, kind)?;
            for (i, chord) in diatonic_chords(&scale)?.iter().enumerate() {
                println!("{}: {}\t{}", i + 1, chord, chord.note_names().join(" "));
            }
        }
        ["frequency", offset] => {
            let offset: i32 = offset.parse().map_err(|_| {
                TheoryError::ConfigError(format!("offset must be an integer, got '{}'", offset))
            })?;
            println!(
                "{:.2} Hz",
                frequency_from_reference(config.reference_frequency(), offset)
            );
        }
        ["intervals"] => {
            for row in interval_definitions() {
                println!(
                    "{:<6} {:<16} {:<38} {:<9} {:>9.6} {:>3}",
                    row.short_code,
                    row.display_name,
                    row.details,
                    row.ratio_string,
                    row.ratio,
                    row.semitones
                );
            }
        }
        ["scales"] => {
            for kind in scale_kinds() {
                println!("{:<17} {}", kind.name(), kind.display_name());
            }
        }
        ["chords"] => {
            for kind in chord_kinds() {
                println!("{:<18} {:<28} ({})", kind.name(), kind.display_name(), kind.symbol());
            }
        }
        _ => usage(),
    }
    Ok(())
}
