//! # Public API
//!
//! This module contains the main entry points for the scalemaker library.
//!
//! ## Construction Functions
//!
//! - [`make_note()`] - Note from a name, with optional frequency and octave
//! - [`make_scale()`] - Scale of a [`ScaleKind`] on a root note
//! - [`make_chord()`] - Chord of a [`ChordKind`] on a root note
//! - [`diatonic_triad()`] - Triad on a scale degree
//! - [`diatonic_chords()`] / [`diatonic_chord_symbols()`] - Triads on every degree
//!
//! ## Catalog Browsing
//!
//! - [`scale_kinds()`], [`chord_kinds()`], [`interval_definitions()`]
//!
//! ## Typical Usage
//!
//! ```rust
//! use scalemaker::{diatonic_chord_symbols, make_chord, make_note, make_scale, ChordKind, ScaleKind};
//!
//! let c_major = make_scale(make_note("C", None, None)?, ScaleKind::Major)?;
//! assert_eq!(
//!     diatonic_chord_symbols(&c_major)?,
//!     vec!["C", "Dm", "Em", "F", "G", "Am", "Hdim"]
//! );
//!
//! let g7 = make_chord(make_note("G", None, None)?, ChordKind::Dominant7)?;
//! assert_eq!(g7.note_names(), vec!["G", "H", "D", "F"]);
//! # Ok::<(), scalemaker::TheoryError>(())
//! ```

use crate::chord::Chord;
use crate::config::TuningConfig;
use crate::error::TheoryError;
use crate::interval::IntervalDefinition;
use crate::note::Pitch;
use crate::patterns::{ChordKind, ScaleKind};
use crate::scale::Scale;

/// Create a note.
///
/// Without an explicit frequency the note takes its frequency from the default table
/// (C' = 264 Hz, A' = 440 Hz); the octave defaults to 1.
///
/// # Example
/// ```rust
/// use scalemaker::{make_note, TheoryError};
///
/// assert_eq!(make_note("C", None, None)?.frequency(), 264.0);
/// assert_eq!(make_note("Es", Some(313.5), None)?.frequency(), 313.5);
/// assert!(matches!(make_note("Es", None, None), Err(TheoryError::UnknownNoteName(_))));
/// # Ok::<(), TheoryError>(())
/// ```
///
/// # Errors
/// [`TheoryError::UnknownNoteName`] if no frequency is given and the name is not in the
/// default table.
pub fn make_note(
    letter: &str,
    frequency: Option<f64>,
    octave: Option<i32>,
) -> Result<Pitch, TheoryError> {
    TuningConfig::default().make_note(letter, frequency, octave)
}

/// Build a scale of the given kind on `root`.
pub fn make_scale(root: Pitch, kind: ScaleKind) -> Result<Scale, TheoryError> {
    Scale::new(root, kind)
}

/// Build a chord of the given kind on `root`.
pub fn make_chord(root: Pitch, kind: ChordKind) -> Result<Chord, TheoryError> {
    Chord::new(root, kind)
}

/// Triad on a 1-based degree of `scale`.
///
/// # Errors
/// [`TheoryError::InvalidDegree`] outside `1..=scale.degree_count()`.
pub fn diatonic_triad(scale: &Scale, degree: usize) -> Result<Chord, TheoryError> {
    scale.triad_on_degree(degree)
}

/// Triads on every degree of `scale` (seven for heptatonic scales).
pub fn diatonic_chords(scale: &Scale) -> Result<Vec<Chord>, TheoryError> {
    scale.diatonic_chords()
}

/// Chord symbols of [`diatonic_chords()`], e.g. `["C", "Dm", "Em", ...]`.
pub fn diatonic_chord_symbols(scale: &Scale) -> Result<Vec<String>, TheoryError> {
    Ok(scale
        .diatonic_chords()?
        .iter()
        .map(|chord| chord.symbol().to_string())
        .collect())
}

pub fn scale_kinds() -> &'static [ScaleKind] {
    ScaleKind::all()
}

pub fn chord_kinds() -> &'static [ChordKind] {
    ChordKind::all()
}

pub fn interval_definitions() -> Vec<IntervalDefinition> {
    crate::interval::interval_definitions()
}

/// Library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
