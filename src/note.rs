//! # Notes
//!
//! A [`Pitch`] is a single pitched note: a German note name, a frequency in Hz and an
//! octave marker. It is an immutable value; scales and chords own copies of their tones.
//!
//! ## Octave markers
//! Octaves are counted the way German notation marks them with apostrophes:
//! octave 1 is the one-line octave (`c'`), octave 2 the two-line octave (`c''`).
//! The `Display` impl renders the name followed by that many apostrophes.
//!
//! ## Default frequencies
//! When no frequency is supplied, notes take their frequency from a just C major table
//! built on C = 264 Hz (which puts A at 440 Hz).

use crate::error::TheoryError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Octave assigned to notes created without an explicit octave
pub const DEFAULT_OCTAVE: i32 = 1;

/// Default frequencies in Hz, one-line octave.
pub const DEFAULT_FREQUENCIES: [(&str, f64); 13] = [
    ("C", 264.0),
    ("Cis", 280.5),
    ("D", 297.0),
    ("Dis", 313.5),
    ("E", 330.0),
    ("Eis", 341.0),
    ("F", 352.0),
    ("Fis", 374.0),
    ("G", 396.0),
    ("Gis", 418.0),
    ("A", 440.0),
    ("B", 466.0),
    ("H", 495.0),
];

/// Frequency of `letter` in the default table, if present. Names are case-sensitive.
pub fn default_frequency(letter: &str) -> Option<f64> {
    DEFAULT_FREQUENCIES
        .iter()
        .find(|(name, _)| *name == letter)
        .map(|(_, freq)| *freq)
}

/// Apostrophes for an octave number (`2` → `''`). Non-positive octaves render empty.
pub fn octave_to_symbols(octave: i32) -> String {
    "'".repeat(octave.max(0) as usize)
}

/// A single note with frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pitch {
    name: String,
    frequency: f64,
    octave: i32,
}

impl Pitch {
    /// Create a note from explicit values. No table lookup happens here.
    pub fn new(name: impl Into<String>, frequency: f64, octave: i32) -> Self {
        Self {
            name: name.into(),
            frequency,
            octave,
        }
    }

    /// Create a note in the default octave with its frequency from [`DEFAULT_FREQUENCIES`].
    ///
    /// # Example
    /// ```
    /// use scalemaker::Pitch;
    ///
    /// let c = Pitch::from_default_table("C")?;
    /// assert_eq!(c.frequency(), 264.0);
    /// assert_eq!(c.to_string(), "C'");
    /// # Ok::<(), scalemaker::TheoryError>(())
    /// ```
    pub fn from_default_table(name: &str) -> Result<Self, TheoryError> {
        let frequency = default_frequency(name)
            .ok_or_else(|| TheoryError::UnknownNoteName(name.to_string()))?;
        Ok(Self::new(name, frequency, DEFAULT_OCTAVE))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, octave_to_symbols(self.octave))
    }
}

impl Default for Pitch {
    /// Concert A, 440 Hz in the one-line octave.
    fn default() -> Self {
        Self::new("A", ConcertPitch::Default.frequency(), DEFAULT_OCTAVE)
    }
}

/// Regional concert pitch (frequency of A').
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcertPitch {
    #[default]
    Default,
    /// Germany
    De,
    /// Austria
    At,
    /// Switzerland
    Ch,
}

impl ConcertPitch {
    pub fn frequency(self) -> f64 {
        match self {
            ConcertPitch::Default => 440.0,
            ConcertPitch::De | ConcertPitch::At => 443.0,
            ConcertPitch::Ch => 442.0,
        }
    }
}

impl FromStr for ConcertPitch {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(ConcertPitch::Default),
            "de" => Ok(ConcertPitch::De),
            "at" => Ok(ConcertPitch::At),
            "ch" => Ok(ConcertPitch::Ch),
            _ => Err(TheoryError::UnknownConcertPitch(s.to_string())),
        }
    }
}
