//! # Chord Engine
//!
//! Builds a [`Chord`] from a root [`Pitch`] and a chord pattern, using the same tone
//! derivation as scales. The chord symbol is the root name followed by the pattern's
//! suffix: `C`, `Am`, `G7`, `Hdim`.
//!
//! ```rust
//! use scalemaker::{Chord, ChordKind, Pitch};
//!
//! let c_major = Chord::new(Pitch::new("C", 264.0, 1), ChordKind::Major)?;
//! assert_eq!(c_major.note_names(), vec!["C", "E", "G"]);
//! assert_eq!(c_major.frequencies(), vec![264.0, 330.0, 396.0]);
//! # Ok::<(), scalemaker::TheoryError>(())
//! ```

use crate::error::TheoryError;
use crate::interval::Interval;
use crate::note::Pitch;
use crate::patterns::ChordKind;
use crate::scale::derive_tones;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// A chord built on a root note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chord {
    root: Pitch,
    kind: Option<ChordKind>,
    pattern: Vec<Interval>,
    symbol: String,
    tones: Vec<Pitch>,
}

/// Build a chord from an arbitrary pattern, naming it `root + suffix`.
///
/// # Errors
/// [`TheoryError::EmptyPattern`] for an empty pattern, and
/// [`TheoryError::UnrecognizedChromaticLetter`] if the root name has no chromatic index.
pub fn build_chord(root: Pitch, pattern: &[Interval], suffix: &str) -> Result<Chord, TheoryError> {
    Chord::build(root, None, pattern.to_vec(), suffix)
}

impl Chord {
    /// Build one of the library chords on `root`.
    pub fn new(root: Pitch, kind: ChordKind) -> Result<Self, TheoryError> {
        Self::build(root, Some(kind), kind.pattern(), kind.symbol())
    }

    fn build(
        root: Pitch,
        kind: Option<ChordKind>,
        pattern: Vec<Interval>,
        suffix: &str,
    ) -> Result<Self, TheoryError> {
        let tones = derive_tones(&root, &pattern)?;
        let symbol = format!("{}{}", root.name(), suffix);
        debug!(symbol = %symbol, tones = tones.len(), "built chord");
        Ok(Self {
            root,
            kind,
            pattern,
            symbol,
            tones,
        })
    }

    pub fn major(root: Pitch) -> Result<Self, TheoryError> {
        Self::new(root, ChordKind::Major)
    }

    pub fn minor(root: Pitch) -> Result<Self, TheoryError> {
        Self::new(root, ChordKind::Minor)
    }

    pub fn diminished(root: Pitch) -> Result<Self, TheoryError> {
        Self::new(root, ChordKind::Diminished)
    }

    pub fn augmented(root: Pitch) -> Result<Self, TheoryError> {
        Self::new(root, ChordKind::Augmented)
    }

    pub fn dominant_7(root: Pitch) -> Result<Self, TheoryError> {
        Self::new(root, ChordKind::Dominant7)
    }

    pub fn root(&self) -> &Pitch {
        &self.root
    }

    pub fn kind(&self) -> Option<ChordKind> {
        self.kind
    }

    pub fn pattern(&self) -> &[Interval] {
        &self.pattern
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn tones(&self) -> &[Pitch] {
        &self.tones
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.tones.iter().map(Pitch::frequency).collect()
    }

    pub fn note_names(&self) -> Vec<&str> {
        self.tones.iter().map(Pitch::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }

    pub fn is_triad(&self) -> bool {
        self.len() == 3
    }

    pub fn is_seventh_chord(&self) -> bool {
        self.len() == 4
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::IntervalType;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn note(name: &str, frequency: f64) -> Pitch {
        Pitch::new(name, frequency, 1)
    }

    #[test]
    fn test_c_major_triad() {
        let chord = Chord::new(note("C", 264.0), ChordKind::Major).unwrap();
        assert_eq!(chord.symbol(), "C");
        assert_eq!(chord.note_names(), vec!["C", "E", "G"]);
        assert_eq!(chord.frequencies(), vec![264.0, 330.0, 396.0]);
        assert!(chord.is_triad());
        assert!(!chord.is_seventh_chord());
    }

    #[test]
    fn test_symbols() {
        let a = note("A", 440.0);
        assert_eq!(Chord::minor(a.clone()).unwrap().symbol(), "Am");
        assert_eq!(Chord::augmented(a.clone()).unwrap().symbol(), "A+");
        assert_eq!(Chord::new(a.clone(), ChordKind::HalfDiminished7).unwrap().symbol(), "Am7b5");
        assert_eq!(Chord::new(a, ChordKind::MinorMajor7).unwrap().to_string(), "Am(maj7)");
    }

    #[test]
    fn test_dominant_seventh() {
        let g7 = Chord::dominant_7(note("G", 396.0)).unwrap();
        assert_eq!(g7.symbol(), "G7");
        assert_eq!(g7.note_names(), vec!["G", "H", "D", "F"]);
        assert!(g7.is_seventh_chord());
        assert_relative_eq!(g7.frequencies()[3], 396.0 * 16.0 / 9.0, max_relative = 1e-12);
    }

    #[test]
    fn test_flat_root_spelling() {
        let b = Chord::new(note("B", 466.0), ChordKind::Minor7).unwrap();
        assert_eq!(b.note_names(), vec!["B", "Des", "F", "As"]);

        let fis = Chord::major(note("Fis", 374.0)).unwrap();
        assert_eq!(fis.note_names(), vec!["Fis", "B", "Cis"]);
    }

    #[test]
    fn test_diminished_chords() {
        let dim = Chord::diminished(note("H", 495.0)).unwrap();
        assert_eq!(dim.note_names(), vec!["H", "D", "F"]);

        let dim7 = Chord::new(note("H", 495.0), ChordKind::Diminished7).unwrap();
        assert_eq!(dim7.note_names(), vec!["H", "D", "F", "Gis"]);
    }

    #[test]
    fn test_sus_chords() {
        let sus2 = Chord::new(note("D", 297.0), ChordKind::Sus2).unwrap();
        assert_eq!(sus2.note_names(), vec!["D", "E", "A"]);
        let sus4 = Chord::new(note("D", 297.0), ChordKind::Sus4).unwrap();
        assert_eq!(sus4.note_names(), vec!["D", "G", "A"]);
    }

    #[test]
    fn test_root_tone_unchanged() {
        let root = Pitch::new("a'", 880.0, 2);
        let chord = Chord::major(root.clone()).unwrap();
        assert_eq!(chord.tones()[0], root);
        assert!(chord.tones().iter().all(|t| t.octave() == 2));
    }

    #[test]
    fn test_build_chord_with_custom_pattern() {
        let pattern = [
            IntervalType::Unison.interval().clone(),
            IntervalType::MajorThird.interval().clone(),
            IntervalType::PerfectFifth.interval().clone(),
            IntervalType::MinorSeventhNatural.interval().clone(),
        ];
        let chord = build_chord(note("C", 264.0), &pattern, "7(nat)").unwrap();
        assert_eq!(chord.symbol(), "C7(nat)");
        assert_eq!(chord.kind(), None);
        assert_eq!(chord.note_names(), vec!["C", "E", "G", "B"]);
        assert_eq!(chord.frequencies()[3], 462.0);
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        assert!(matches!(
            build_chord(note("C", 264.0), &[], "?"),
            Err(TheoryError::EmptyPattern)
        ));
    }

    #[test]
    fn test_unrecognized_root() {
        assert!(matches!(
            Chord::major(note("Eis", 341.0)),
            Err(TheoryError::UnrecognizedChromaticLetter(_))
        ));
    }
}
