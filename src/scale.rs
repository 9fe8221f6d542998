//! # Scale Engine
//!
//! Builds a concrete [`Scale`] from a root [`Pitch`] and an interval pattern, and derives
//! diatonic triads from its degrees.
//!
//! ## Tone derivation
//! Every tone after the root is derived from the root alone, never from its neighbour:
//! - frequency: `root.frequency * interval.ratio`
//! - octave: `root.octave + 1` once the ratio reaches 2.0, else `root.octave`
//! - name: the root name moved by the interval's semitone size (see [`crate::speller`])
//!
//! The same derivation is used for chords.
//!
//! ## Diatonic triads
//! Triad quality on each degree comes from a fixed table:
//!
//! | degree       | 1   | 2   | 3   | 4   | 5   | 6   | 7   |
//! |--------------|-----|-----|-----|-----|-----|-----|-----|
//! | Major/Ionian | maj | min | min | maj | maj | min | dim |
//! | Minor/Aeolian| min | dim | maj | min | min | maj | maj |
//!
//! Every other scale (other modes, harmonic/melodic minor, pentatonics, blues, custom
//! patterns) currently gets a major triad on every degree.
//!
//! ## Example
//! ```rust
//! use scalemaker::{make_note, ScaleKind, Scale};
//!
//! let c_major = Scale::new(make_note("C", None, None)?, ScaleKind::Major)?;
//! assert_eq!(c_major.note_names(), vec!["C", "D", "E", "F", "G", "A", "H", "C"]);
//!
//! let dominant = c_major.triad_on_degree(5)?;
//! assert_eq!(dominant.symbol(), "G");
//! # Ok::<(), scalemaker::TheoryError>(())
//! ```

use crate::chord::Chord;
use crate::error::TheoryError;
use crate::interval::Interval;
use crate::note::Pitch;
use crate::patterns::{ChordKind, ScaleKind};
use crate::speller::{chromatic_index, spell};
use serde::Serialize;
use tracing::{debug, trace};

/// Derive the tones of a pattern above `root`, one per interval. Tone 0 is always
/// `root` itself.
pub(crate) fn derive_tones(root: &Pitch, pattern: &[Interval]) -> Result<Vec<Pitch>, TheoryError> {
    if pattern.is_empty() {
        return Err(TheoryError::EmptyPattern);
    }
    chromatic_index(root.name())?;

    let mut tones = Vec::with_capacity(pattern.len());
    tones.push(root.clone());

    for interval in pattern.iter().skip(1) {
        let frequency = root.frequency() * interval.ratio();
        let octave = if interval.ratio() >= 2.0 {
            root.octave() + 1
        } else {
            root.octave()
        };
        let name = spell(root.name(), interval.semitones())?;
        trace!(
            interval = interval.short_code(),
            name,
            frequency,
            octave,
            "derived tone"
        );
        tones.push(Pitch::new(name, frequency, octave));
    }

    Ok(tones)
}

/// A scale built on a root note.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    root: Pitch,
    kind: Option<ScaleKind>,
    pattern: Vec<Interval>,
    tones: Vec<Pitch>,
}

/// Build a scale from an arbitrary pattern.
///
/// Scales built this way have no [`ScaleKind`], so their diatonic triads fall back to
/// major triads.
///
/// # Errors
/// [`TheoryError::EmptyPattern`] for an empty pattern, and
/// [`TheoryError::UnrecognizedChromaticLetter`] if the root name has no chromatic index.
pub fn build_scale(root: Pitch, pattern: &[Interval]) -> Result<Scale, TheoryError> {
    Scale::build(root, None, pattern.to_vec())
}

impl Scale {
    /// Build one of the library scales on `root`.
    pub fn new(root: Pitch, kind: ScaleKind) -> Result<Self, TheoryError> {
        Self::build(root, Some(kind), kind.pattern())
    }

    fn build(
        root: Pitch,
        kind: Option<ScaleKind>,
        pattern: Vec<Interval>,
    ) -> Result<Self, TheoryError> {
        let tones = derive_tones(&root, &pattern)?;
        debug!(root = %root, kind = ?kind, tones = tones.len(), "built scale");
        Ok(Self {
            root,
            kind,
            pattern,
            tones,
        })
    }

    pub fn root(&self) -> &Pitch {
        &self.root
    }

    pub fn kind(&self) -> Option<ScaleKind> {
        self.kind
    }

    pub fn pattern(&self) -> &[Interval] {
        &self.pattern
    }

    pub fn tones(&self) -> &[Pitch] {
        &self.tones
    }

    /// Tone on a 1-based degree. The closing octave counts as the last degree.
    pub fn note(&self, degree: usize) -> Option<&Pitch> {
        degree.checked_sub(1).and_then(|i| self.tones.get(i))
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.tones.iter().map(Pitch::frequency).collect()
    }

    pub fn note_names(&self) -> Vec<&str> {
        self.tones.iter().map(Pitch::name).collect()
    }

    /// e.g. `"C-Dur"`
    pub fn display_name(&self) -> String {
        let kind = self.kind.map_or("Skala", ScaleKind::display_name);
        format!("{}-{}", self.root.name(), kind)
    }

    /// Number of degrees usable for triads: every tone except the closing octave.
    pub fn degree_count(&self) -> usize {
        self.tones.len().saturating_sub(1)
    }

    /// Triad built on a 1-based scale degree.
    ///
    /// Valid degrees are `1..=degree_count()`; anything else is
    /// [`TheoryError::InvalidDegree`].
    pub fn triad_on_degree(&self, degree: usize) -> Result<Chord, TheoryError> {
        let max = self.degree_count();
        if degree < 1 || degree > max {
            return Err(TheoryError::InvalidDegree { degree, max });
        }

        let quality = triad_quality(self.kind, degree);
        Chord::new(self.tones[degree - 1].clone(), quality)
    }

    /// Triads on every degree, in order.
    pub fn diatonic_chords(&self) -> Result<Vec<Chord>, TheoryError> {
        (1..=self.degree_count())
            .map(|degree| self.triad_on_degree(degree))
            .collect()
    }
}

fn triad_quality(kind: Option<ScaleKind>, degree: usize) -> ChordKind {
    match kind {
        Some(kind) if kind.is_major_like() => match degree {
            2 | 3 | 6 => ChordKind::Minor,
            7 => ChordKind::Diminished,
            _ => ChordKind::Major,
        },
        Some(kind) if kind.is_minor_like() => match degree {
            3 | 6 | 7 => ChordKind::Major,
            2 => ChordKind::Diminished,
            _ => ChordKind::Minor,
        },
        // TODO: mode-correct harmonization for the remaining church modes
        _ => ChordKind::Major,
    }
}
