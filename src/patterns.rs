//! # Pattern Library
//!
//! Named interval patterns for scales and chords.
//!
//! A pattern is an ordered list of intervals measured from the root, always starting at
//! the unison. Scale patterns end at the octave; chord patterns stop at the fifth or
//! seventh. [`ScaleKind`] and [`ChordKind`] select their pattern from a static table.
//!
//! All patterns are tuned in 5-limit just intonation with the major second as 9:8 and
//! the minor seventh as 16:9, so that every pattern shares the fourth and fifth of the
//! major scale on the same root.

use crate::error::TheoryError;
use crate::interval::{Interval, IntervalType};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use IntervalType::*;

// Scales

const MAJOR_SCALE: [IntervalType; 8] = [
    Unison, MajorSecond, MajorThird, PerfectFourth, PerfectFifth, MajorSixth, MajorSeventh, Octave,
];

const NATURAL_MINOR_SCALE: [IntervalType; 8] = [
    Unison, MajorSecond, MinorThird, PerfectFourth, PerfectFifth, MinorSixth,
    MinorSeventhPythagorean, Octave,
];

const DORIAN_SCALE: [IntervalType; 8] = [
    Unison, MajorSecond, MinorThird, PerfectFourth, PerfectFifth, MajorSixth,
    MinorSeventhPythagorean, Octave,
];

const PHRYGIAN_SCALE: [IntervalType; 8] = [
    Unison, MinorSecond, MinorThird, PerfectFourth, PerfectFifth, MinorSixth,
    MinorSeventhPythagorean, Octave,
];

const LYDIAN_SCALE: [IntervalType; 8] = [
    Unison, MajorSecond, MajorThird, AugmentedFourth, PerfectFifth, MajorSixth, MajorSeventh,
    Octave,
];

const MIXOLYDIAN_SCALE: [IntervalType; 8] = [
    Unison, MajorSecond, MajorThird, PerfectFourth, PerfectFifth, MajorSixth,
    MinorSeventhPythagorean, Octave,
];

const LOCRIAN_SCALE: [IntervalType; 8] = [
    Unison, MinorSecond, MinorThird, PerfectFourth, DiminishedFifth, MinorSixth,
    MinorSeventhPythagorean, Octave,
];

const HARMONIC_MINOR_SCALE: [IntervalType; 8] = [
    Unison, MajorSecond, MinorThird, PerfectFourth, PerfectFifth, MinorSixth, MajorSeventh, Octave,
];

// Ascending form
const MELODIC_MINOR_SCALE: [IntervalType; 8] = [
    Unison, MajorSecond, MinorThird, PerfectFourth, PerfectFifth, MajorSixth, MajorSeventh, Octave,
];

const PENTATONIC_MAJOR_SCALE: [IntervalType; 6] = [
    Unison, MajorSecond, MajorThird, PerfectFifth, MajorSixth, Octave,
];

const PENTATONIC_MINOR_SCALE: [IntervalType; 6] = [
    Unison, MinorThird, PerfectFourth, PerfectFifth, MinorSeventhPythagorean, Octave,
];

const BLUES_SCALE: [IntervalType; 7] = [
    Unison, MinorThird, PerfectFourth, DiminishedFifth, PerfectFifth, MinorSeventhPythagorean,
    Octave,
];

// Chords

const MAJOR_TRIAD: [IntervalType; 3] = [Unison, MajorThird, PerfectFifth];
const MINOR_TRIAD: [IntervalType; 3] = [Unison, MinorThird, PerfectFifth];
const DIMINISHED_TRIAD: [IntervalType; 3] = [Unison, MinorThird, DiminishedFifth];
const AUGMENTED_TRIAD: [IntervalType; 3] = [Unison, MajorThird, AugmentedFifth];
const SUS2_CHORD: [IntervalType; 3] = [Unison, MajorSecond, PerfectFifth];
const SUS4_CHORD: [IntervalType; 3] = [Unison, PerfectFourth, PerfectFifth];

const MAJOR_SEVENTH_CHORD: [IntervalType; 4] = [Unison, MajorThird, PerfectFifth, MajorSeventh];
const MINOR_SEVENTH_CHORD: [IntervalType; 4] =
    [Unison, MinorThird, PerfectFifth, MinorSeventhPythagorean];
const DOMINANT_SEVENTH_CHORD: [IntervalType; 4] =
    [Unison, MajorThird, PerfectFifth, MinorSeventhPythagorean];
const DIMINISHED_SEVENTH_CHORD: [IntervalType; 4] =
    [Unison, MinorThird, DiminishedFifth, DiminishedSeventh];
const HALF_DIMINISHED_SEVENTH_CHORD: [IntervalType; 4] =
    [Unison, MinorThird, DiminishedFifth, MinorSeventhPythagorean];
const MINOR_MAJOR_SEVENTH_CHORD: [IntervalType; 4] =
    [Unison, MinorThird, PerfectFifth, MajorSeventh];

fn resolve(types: &[IntervalType]) -> Vec<Interval> {
    types.iter().map(|t| t.interval().clone()).collect()
}

/// Lower-cased with separators removed, so `HARMONIC_MINOR`, `harmonic-minor` and
/// `HarmonicMinor` all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Grouping used when listing scale kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleCategory {
    ChurchMode,
    MajorMinor,
    PentatonicBlues,
}

/// Scale patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleKind {
    // Church modes
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,

    // Aliases for Ionian and Aeolian
    Major,
    Minor,

    HarmonicMinor,
    MelodicMinor,

    PentatonicMajor,
    PentatonicMinor,

    Blues,
}

impl ScaleKind {
    const ALL: [ScaleKind; 14] = [
        ScaleKind::Ionian,
        ScaleKind::Dorian,
        ScaleKind::Phrygian,
        ScaleKind::Lydian,
        ScaleKind::Mixolydian,
        ScaleKind::Aeolian,
        ScaleKind::Locrian,
        ScaleKind::Major,
        ScaleKind::Minor,
        ScaleKind::HarmonicMinor,
        ScaleKind::MelodicMinor,
        ScaleKind::PentatonicMajor,
        ScaleKind::PentatonicMinor,
        ScaleKind::Blues,
    ];

    pub fn all() -> &'static [ScaleKind] {
        &Self::ALL
    }

    /// The interval types of this scale, unison to octave.
    pub fn interval_types(self) -> &'static [IntervalType] {
        match self {
            ScaleKind::Ionian | ScaleKind::Major => &MAJOR_SCALE,
            ScaleKind::Dorian => &DORIAN_SCALE,
            ScaleKind::Phrygian => &PHRYGIAN_SCALE,
            ScaleKind::Lydian => &LYDIAN_SCALE,
            ScaleKind::Mixolydian => &MIXOLYDIAN_SCALE,
            ScaleKind::Aeolian | ScaleKind::Minor => &NATURAL_MINOR_SCALE,
            ScaleKind::Locrian => &LOCRIAN_SCALE,
            ScaleKind::HarmonicMinor => &HARMONIC_MINOR_SCALE,
            ScaleKind::MelodicMinor => &MELODIC_MINOR_SCALE,
            ScaleKind::PentatonicMajor => &PENTATONIC_MAJOR_SCALE,
            ScaleKind::PentatonicMinor => &PENTATONIC_MINOR_SCALE,
            ScaleKind::Blues => &BLUES_SCALE,
        }
    }

    pub fn pattern(self) -> Vec<Interval> {
        resolve(self.interval_types())
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ScaleKind::Ionian => "Ionisch (Dur)",
            ScaleKind::Dorian => "Dorisch",
            ScaleKind::Phrygian => "Phrygisch",
            ScaleKind::Lydian => "Lydisch",
            ScaleKind::Mixolydian => "Mixolydisch",
            ScaleKind::Aeolian => "Äolisch (Moll)",
            ScaleKind::Locrian => "Lokrisch",
            ScaleKind::Major => "Dur",
            ScaleKind::Minor => "Natürlich Moll",
            ScaleKind::HarmonicMinor => "Harmonisch Moll",
            ScaleKind::MelodicMinor => "Melodisch Moll",
            ScaleKind::PentatonicMajor => "Dur-Pentatonik",
            ScaleKind::PentatonicMinor => "Moll-Pentatonik",
            ScaleKind::Blues => "Blues-Skala",
        }
    }

    /// Identifier as used in listings and accepted by [`FromStr`], e.g. `HARMONIC_MINOR`.
    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Ionian => "IONIAN",
            ScaleKind::Dorian => "DORIAN",
            ScaleKind::Phrygian => "PHRYGIAN",
            ScaleKind::Lydian => "LYDIAN",
            ScaleKind::Mixolydian => "MIXOLYDIAN",
            ScaleKind::Aeolian => "AEOLIAN",
            ScaleKind::Locrian => "LOCRIAN",
            ScaleKind::Major => "MAJOR",
            ScaleKind::Minor => "MINOR",
            ScaleKind::HarmonicMinor => "HARMONIC_MINOR",
            ScaleKind::MelodicMinor => "MELODIC_MINOR",
            ScaleKind::PentatonicMajor => "PENTATONIC_MAJOR",
            ScaleKind::PentatonicMinor => "PENTATONIC_MINOR",
            ScaleKind::Blues => "BLUES",
        }
    }

    pub fn category(self) -> ScaleCategory {
        match self {
            ScaleKind::Ionian
            | ScaleKind::Dorian
            | ScaleKind::Phrygian
            | ScaleKind::Lydian
            | ScaleKind::Mixolydian
            | ScaleKind::Aeolian
            | ScaleKind::Locrian => ScaleCategory::ChurchMode,
            ScaleKind::Major
            | ScaleKind::Minor
            | ScaleKind::HarmonicMinor
            | ScaleKind::MelodicMinor => ScaleCategory::MajorMinor,
            ScaleKind::PentatonicMajor | ScaleKind::PentatonicMinor | ScaleKind::Blues => {
                ScaleCategory::PentatonicBlues
            }
        }
    }

    pub fn is_major_like(self) -> bool {
        matches!(self, ScaleKind::Major | ScaleKind::Ionian)
    }

    pub fn is_minor_like(self) -> bool {
        matches!(self, ScaleKind::Minor | ScaleKind::Aeolian)
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleKind {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| normalize(kind.name()) == wanted)
            .ok_or_else(|| TheoryError::UnknownScaleKind(s.to_string()))
    }
}

/// Grouping used when listing chord kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordCategory {
    Triad,
    Seventh,
}

/// Chord patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChordKind {
    // Triads
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,

    // Seventh chords
    #[serde(rename = "MAJOR_7")]
    Major7,
    #[serde(rename = "MINOR_7")]
    Minor7,
    #[serde(rename = "DOMINANT_7")]
    Dominant7,
    #[serde(rename = "DIMINISHED_7")]
    Diminished7,
    #[serde(rename = "HALF_DIMINISHED_7")]
    HalfDiminished7,
    #[serde(rename = "MINOR_MAJOR_7")]
    MinorMajor7,
}

impl ChordKind {
    const ALL: [ChordKind; 12] = [
        ChordKind::Major,
        ChordKind::Minor,
        ChordKind::Diminished,
        ChordKind::Augmented,
        ChordKind::Sus2,
        ChordKind::Sus4,
        ChordKind::Major7,
        ChordKind::Minor7,
        ChordKind::Dominant7,
        ChordKind::Diminished7,
        ChordKind::HalfDiminished7,
        ChordKind::MinorMajor7,
    ];

    pub fn all() -> &'static [ChordKind] {
        &Self::ALL
    }

    pub fn interval_types(self) -> &'static [IntervalType] {
        match self {
            ChordKind::Major => &MAJOR_TRIAD,
            ChordKind::Minor => &MINOR_TRIAD,
            ChordKind::Diminished => &DIMINISHED_TRIAD,
            ChordKind::Augmented => &AUGMENTED_TRIAD,
            ChordKind::Sus2 => &SUS2_CHORD,
            ChordKind::Sus4 => &SUS4_CHORD,
            ChordKind::Major7 => &MAJOR_SEVENTH_CHORD,
            ChordKind::Minor7 => &MINOR_SEVENTH_CHORD,
            ChordKind::Dominant7 => &DOMINANT_SEVENTH_CHORD,
            ChordKind::Diminished7 => &DIMINISHED_SEVENTH_CHORD,
            ChordKind::HalfDiminished7 => &HALF_DIMINISHED_SEVENTH_CHORD,
            ChordKind::MinorMajor7 => &MINOR_MAJOR_SEVENTH_CHORD,
        }
    }

    pub fn pattern(self) -> Vec<Interval> {
        resolve(self.interval_types())
    }

    /// Suffix appended to the root name to form the chord symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            ChordKind::Major => "",
            ChordKind::Minor => "m",
            ChordKind::Diminished => "dim",
            ChordKind::Augmented => "+",
            ChordKind::Sus2 => "sus2",
            ChordKind::Sus4 => "sus4",
            ChordKind::Major7 => "maj7",
            ChordKind::Minor7 => "m7",
            ChordKind::Dominant7 => "7",
            ChordKind::Diminished7 => "dim7",
            ChordKind::HalfDiminished7 => "m7b5",
            ChordKind::MinorMajor7 => "m(maj7)",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ChordKind::Major => "Dur",
            ChordKind::Minor => "Moll",
            ChordKind::Diminished => "Vermindert",
            ChordKind::Augmented => "Übermäßig",
            ChordKind::Sus2 => "Suspended 2",
            ChordKind::Sus4 => "Suspended 4",
            ChordKind::Major7 => "Dur-Septakkord",
            ChordKind::Minor7 => "Moll-Septakkord",
            ChordKind::Dominant7 => "Dominantseptakkord",
            ChordKind::Diminished7 => "Verminderter Septakkord",
            ChordKind::HalfDiminished7 => "Halbverminderter Septakkord",
            ChordKind::MinorMajor7 => "Moll-Dur-Septakkord",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordKind::Major => "MAJOR",
            ChordKind::Minor => "MINOR",
            ChordKind::Diminished => "DIMINISHED",
            ChordKind::Augmented => "AUGMENTED",
            ChordKind::Sus2 => "SUS2",
            ChordKind::Sus4 => "SUS4",
            ChordKind::Major7 => "MAJOR_7",
            ChordKind::Minor7 => "MINOR_7",
            ChordKind::Dominant7 => "DOMINANT_7",
            ChordKind::Diminished7 => "DIMINISHED_7",
            ChordKind::HalfDiminished7 => "HALF_DIMINISHED_7",
            ChordKind::MinorMajor7 => "MINOR_MAJOR_7",
        }
    }

    pub fn category(self) -> ChordCategory {
        if self.interval_types().len() == 3 {
            ChordCategory::Triad
        } else {
            ChordCategory::Seventh
        }
    }
}

impl fmt::Display for ChordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordKind {
    type Err = TheoryError;

    /// Accepts the kind name (`DOMINANT_7`, `dominant7`) or the chord symbol suffix
    /// (`7`, `m7b5`). Suffixes are matched case-sensitively so `m` and `M` stay distinct.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| normalize(kind.name()) == wanted)
            .or_else(|| Self::ALL.iter().copied().find(|kind| kind.symbol() == s.trim()))
            .ok_or_else(|| TheoryError::UnknownChordKind(s.to_string()))
    }
}
