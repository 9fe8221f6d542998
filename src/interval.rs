//! # Interval Catalog
//!
//! Named frequency ratios, the building blocks of every scale and chord pattern.
//!
//! Each [`Interval`] carries its ratio as numerator/denominator, a short code (`"Tg1"`),
//! a display name (`"Gr. Terz"`) and a details line (`"rein"`). The ratio is computed
//! once when the value is built and is the multiplier applied to a base frequency.
//!
//! ## Semitone equivalence
//! Note naming works on the 12-tone chromatic cycle, so every interval also needs an
//! equal-tempered size. Catalog short codes map to fixed values (a tritone is 6 whatever
//! its tuning). Anything else falls back to `round(12 * log2(ratio))`, which lets
//! user-defined just intervals still be named approximately:
//!
//! ```rust
//! use scalemaker::{Interval, IntervalType};
//!
//! assert_eq!(IntervalType::PerfectFifth.interval().semitones(), 7);
//!
//! let septimal_third = Interval::new("T7", "Septimale Terz", "", 9, 7)?;
//! assert_eq!(septimal_third.semitones(), 4);
//! # Ok::<(), scalemaker::TheoryError>(())
//! ```

use crate::error::TheoryError;
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// A named frequency ratio.
///
/// Catalog entries borrow their names; intervals built at runtime own them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    short_code: Cow<'static, str>,
    display_name: Cow<'static, str>,
    details: Cow<'static, str>,
    numerator: u32,
    denominator: u32,
    ratio: f64,
}

/// Builds a catalog entry; the ratio is folded at compile time.
macro_rules! interval {
    ($short:literal, $display:literal, $details:literal, $num:literal, $den:literal) => {
        Interval {
            short_code: Cow::Borrowed($short),
            display_name: Cow::Borrowed($display),
            details: Cow::Borrowed($details),
            numerator: $num,
            denominator: $den,
            ratio: $num as f64 / $den as f64,
        }
    };
}

impl Interval {
    /// Create an interval outside the catalog, e.g. a custom just-intonation ratio.
    ///
    /// Names may be borrowed literals or owned strings read at runtime.
    ///
    /// # Errors
    /// [`TheoryError::InvalidRatio`] if either term is zero.
    pub fn new(
        short_code: impl Into<Cow<'static, str>>,
        display_name: impl Into<Cow<'static, str>>,
        details: impl Into<Cow<'static, str>>,
        numerator: u32,
        denominator: u32,
    ) -> Result<Self, TheoryError> {
        if numerator == 0 || denominator == 0 {
            return Err(TheoryError::InvalidRatio {
                numerator,
                denominator,
            });
        }
        Ok(Self {
            short_code: short_code.into(),
            display_name: display_name.into(),
            details: details.into(),
            numerator,
            denominator,
            ratio: numerator as f64 / denominator as f64,
        })
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn numerator(&self) -> u32 {
        self.numerator
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// The frequency multiplier, `numerator / denominator`.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The ratio as `"n:d"`, e.g. `"5:4"`.
    pub fn ratio_string(&self) -> String {
        format!("{}:{}", self.numerator, self.denominator)
    }

    /// Equal-tempered size in semitones.
    ///
    /// Uses the fixed short-code table, otherwise `round(12 * log2(ratio))`.
    pub fn semitones(&self) -> i32 {
        if let Some(semitones) = mapped_semitones(&self.short_code) {
            return semitones;
        }
        let estimate = (12.0 * self.ratio.log2()).round() as i32;
        debug!(
            short_code = self.short_code(),
            ratio = self.ratio,
            estimate,
            "no fixed semitone value, using logarithmic estimate"
        );
        estimate
    }
}

/// Fixed semitone sizes by short code.
const SEMITONES: [(&str, i32); 26] = [
    ("P", 0),
    ("Sk1", 1),
    ("Sk2", 1),
    ("Sg1", 2),
    ("Sg2", 2),
    ("Tk1", 3),
    ("Tk2", 3),
    ("Tg1", 4),
    ("Tg2", 4),
    ("Qua", 5),
    ("Qua1", 6),
    ("Qua2", 6),
    ("Qua3", 6),
    ("Qui1", 6),
    ("Qui2", 6),
    ("Qui3", 6),
    ("Qui", 7),
    ("Qui+", 8),
    ("Sxk", 8),
    ("Sxg", 9),
    ("Sepk1", 10),
    ("Sepk2", 10),
    ("Sepk3", 10),
    ("Sep--", 9),
    ("Sepg", 11),
    ("Ok", 12),
];

fn mapped_semitones(short_code: &str) -> Option<i32> {
    SEMITONES
        .iter()
        .find(|(code, _)| *code == short_code)
        .map(|(_, semitones)| *semitones)
}

/// Every interval in the catalog.
///
/// The discriminant is the index into the catalog table, so the variant order must
/// match [`CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalType {
    // Unison
    Unison,
    AugmentedUnisonSmall,
    AugmentedUnisonLarge,

    // Seconds
    MinorSecondPythagorean,
    MinorSecond,
    MajorSecondSmall,
    MajorSecond,

    // Thirds
    MinorThirdPythagorean,
    MinorThird,
    MajorThird,
    MajorThirdPythagorean,

    // Fourths
    PerfectFourth,
    AugmentedFourthHuygens,
    AugmentedFourth,
    AugmentedFourthPythagorean,

    // Fifths
    DiminishedFifthPythagorean,
    DiminishedFifth,
    DiminishedFifthEuler,
    PerfectFifth,
    AugmentedFifth,

    // Sixths
    MinorSixth,
    MajorSixth,

    // Sevenths
    MinorSeventhPythagorean,
    MinorSeventh,
    MinorSeventhNatural,
    DiminishedSeventh,
    MajorSeventh,

    // Octave
    Octave,
}

static CATALOG: [Interval; 28] = [
    interval!("P", "Prim", "", 1, 1),
    interval!("P1", "Überm. Prim", "kleiner chromatischer Halbton", 25, 24),
    interval!("P2", "Überm. Prim", "großer chromatischer Halbton", 135, 128),
    interval!("Sk1", "Kl. Sekunde", "Leimma (pythagoreisch)", 256, 243),
    interval!("Sk2", "Kl. Sekunde", "diatonischer Halbton (rein)", 16, 15),
    interval!("Sg1", "Gr. Sekunde", "kleiner Ganzton (rein)", 10, 9),
    interval!("Sg2", "Gr. Sekunde", "großer Ganzton (pythagoreisch/rein)", 9, 8),
    interval!("Tk1", "Kl. Terz", "pythagoreisch", 32, 27),
    interval!("Tk2", "Kl. Terz", "rein", 6, 5),
    interval!("Tg1", "Gr. Terz", "rein", 5, 4),
    interval!("Tg2", "Gr. Terz", "Ditonus (pythagoreisch)", 81, 64),
    interval!("Qua", "Quarte", "rein", 4, 3),
    interval!("Qua2", "Überm. Quarte", "Huygens' Tritonus", 7, 5),
    interval!("Qua1", "Überm. Quarte", "diatonischer Tritonus", 45, 32),
    interval!("Qua3", "Überm. Quarte", "pythagoreisch", 729, 512),
    interval!("Qui1", "Verm. Quinte", "pythagoreisch", 1024, 729),
    interval!("Qui2", "Verm. Quinte", "rein", 64, 45),
    interval!("Qui3", "Verm. Quinte", "Eulers Tritonus", 10, 7),
    interval!("Qui", "Quinte", "rein", 3, 2),
    interval!("Qui+", "Überm. Quinte", "rein", 25, 16),
    interval!("Sxk", "Kl. Sexte", "rein", 8, 5),
    interval!("Sxg", "Gr. Sexte", "rein", 5, 3),
    interval!("Sepk1", "Kl. Septime", "pythagoreisch", 16, 9),
    interval!("Sepk2", "Kl. Septime", "rein (Oktave - kleiner Ganzton)", 9, 5),
    interval!("Sepk3", "Kl. Septime", "Naturseptime", 7, 4),
    interval!("Sep--", "Verm. Septime", "doppelt vermindert", 128, 75),
    interval!("Sepg", "Gr. Septime", "diatonisch rein", 15, 8),
    interval!("Ok", "Oktave", "rein", 2, 1),
];

impl IntervalType {
    const ALL: [IntervalType; 28] = [
        IntervalType::Unison,
        IntervalType::AugmentedUnisonSmall,
        IntervalType::AugmentedUnisonLarge,
        IntervalType::MinorSecondPythagorean,
        IntervalType::MinorSecond,
        IntervalType::MajorSecondSmall,
        IntervalType::MajorSecond,
        IntervalType::MinorThirdPythagorean,
        IntervalType::MinorThird,
        IntervalType::MajorThird,
        IntervalType::MajorThirdPythagorean,
        IntervalType::PerfectFourth,
        IntervalType::AugmentedFourthHuygens,
        IntervalType::AugmentedFourth,
        IntervalType::AugmentedFourthPythagorean,
        IntervalType::DiminishedFifthPythagorean,
        IntervalType::DiminishedFifth,
        IntervalType::DiminishedFifthEuler,
        IntervalType::PerfectFifth,
        IntervalType::AugmentedFifth,
        IntervalType::MinorSixth,
        IntervalType::MajorSixth,
        IntervalType::MinorSeventhPythagorean,
        IntervalType::MinorSeventh,
        IntervalType::MinorSeventhNatural,
        IntervalType::DiminishedSeventh,
        IntervalType::MajorSeventh,
        IntervalType::Octave,
    ];

    /// All interval types in catalog order.
    pub fn all() -> &'static [IntervalType] {
        &Self::ALL
    }

    /// The catalog entry for this type.
    pub fn interval(self) -> &'static Interval {
        &CATALOG[self as usize]
    }

    pub fn from_short_code(short_code: &str) -> Option<IntervalType> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.interval().short_code() == short_code)
    }
}

/// Look up a catalog interval by its short code.
pub fn lookup(short_code: &str) -> Option<&'static Interval> {
    IntervalType::from_short_code(short_code).map(IntervalType::interval)
}

/// One row of the catalog, for display by external callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalDefinition {
    pub kind: IntervalType,
    pub short_code: &'static str,
    pub display_name: &'static str,
    pub details: &'static str,
    pub ratio_string: String,
    pub ratio: f64,
    pub semitones: i32,
}

/// The whole catalog as display rows.
pub fn interval_definitions() -> Vec<IntervalDefinition> {
    IntervalType::all()
        .iter()
        .map(|&kind| {
            let interval = kind.interval();
            IntervalDefinition {
                kind,
                short_code: interval.short_code(),
                display_name: interval.display_name(),
                details: interval.details(),
                ratio_string: interval.ratio_string(),
                ratio: interval.ratio,
                semitones: interval.semitones(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_variants() {
        for (i, kind) in IntervalType::all().iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
        assert_eq!(IntervalType::MajorThird.interval().short_code(), "Tg1");
        assert_eq!(IntervalType::Octave.interval().short_code(), "Ok");
        assert_eq!(IntervalType::AugmentedFourthHuygens.interval().short_code(), "Qua2");
    }

    #[test]
    fn test_ratios_are_positive_and_cached() {
        for kind in IntervalType::all() {
            let interval = kind.interval();
            assert!(interval.ratio() > 0.0, "{} has non-positive ratio", interval.short_code());
            assert_eq!(
                interval.ratio(),
                interval.numerator() as f64 / interval.denominator() as f64
            );
        }
    }

    #[test]
    fn test_short_codes_are_unique() {
        for (i, a) in IntervalType::all().iter().enumerate() {
            for b in &IntervalType::all()[i + 1..] {
                assert_ne!(a.interval().short_code(), b.interval().short_code());
            }
        }
    }

    #[test]
    fn test_mapped_semitones() {
        let expected = [
            (IntervalType::Unison, 0),
            (IntervalType::MinorSecondPythagorean, 1),
            (IntervalType::MinorSecond, 1),
            (IntervalType::MajorSecondSmall, 2),
            (IntervalType::MajorSecond, 2),
            (IntervalType::MinorThirdPythagorean, 3),
            (IntervalType::MinorThird, 3),
            (IntervalType::MajorThird, 4),
            (IntervalType::MajorThirdPythagorean, 4),
            (IntervalType::PerfectFourth, 5),
            (IntervalType::AugmentedFourthHuygens, 6),
            (IntervalType::AugmentedFourth, 6),
            (IntervalType::AugmentedFourthPythagorean, 6),
            (IntervalType::DiminishedFifthPythagorean, 6),
            (IntervalType::DiminishedFifth, 6),
            (IntervalType::DiminishedFifthEuler, 6),
            (IntervalType::PerfectFifth, 7),
            (IntervalType::AugmentedFifth, 8),
            (IntervalType::MinorSixth, 8),
            (IntervalType::MajorSixth, 9),
            (IntervalType::MinorSeventhPythagorean, 10),
            (IntervalType::MinorSeventh, 10),
            (IntervalType::MinorSeventhNatural, 10),
            (IntervalType::DiminishedSeventh, 9),
            (IntervalType::MajorSeventh, 11),
            (IntervalType::Octave, 12),
        ];
        for (kind, semitones) in expected {
            assert_eq!(kind.interval().semitones(), semitones, "{:?}", kind);
        }
    }

    #[test]
    fn test_unmapped_semitones_use_log_estimate() {
        // Augmented unisons have no fixed entry
        assert_eq!(IntervalType::AugmentedUnisonSmall.interval().semitones(), 1);
        assert_eq!(IntervalType::AugmentedUnisonLarge.interval().semitones(), 1);

        let eleventh_harmonic = Interval::new("H11", "11. Teilton", "", 11, 8).unwrap();
        let expected = (12.0 * (11.0f64 / 8.0).log2()).round() as i32;
        assert_eq!(eleventh_harmonic.semitones(), expected);
        assert_eq!(eleventh_harmonic.semitones(), 6);

        let twelfth = Interval::new("Duo", "Duodezime", "", 3, 1).unwrap();
        assert_eq!(twelfth.semitones(), 19);
    }

    #[test]
    fn test_lookup() {
        let fifth = lookup("Qui").unwrap();
        assert_eq!(fifth.ratio(), 1.5);
        assert_eq!(fifth.display_name(), "Quinte");
        assert!(lookup("Qui4").is_none());
        assert_eq!(IntervalType::from_short_code("Sep--"), Some(IntervalType::DiminishedSeventh));
    }

    #[test]
    fn test_ratio_string() {
        assert_eq!(IntervalType::MajorThird.interval().ratio_string(), "5:4");
        assert_eq!(IntervalType::AugmentedFourthPythagorean.interval().ratio_string(), "729:512");
    }

    #[test]
    fn test_zero_terms_are_rejected() {
        assert_eq!(
            Interval::new("Z", "Zero", "", 0, 5),
            Err(TheoryError::InvalidRatio {
                numerator: 0,
                denominator: 5
            })
        );
        assert_eq!(
            Interval::new("X", "X", "", 3, 0),
            Err(TheoryError::InvalidRatio {
                numerator: 3,
                denominator: 0
            })
        );
    }

    #[test]
    fn test_interval_from_runtime_names() {
        let harmonic = 7;
        let interval = Interval::new(
            format!("H{}", harmonic),
            format!("{}. Teilton", harmonic),
            String::new(),
            harmonic,
            4,
        )
        .unwrap();
        assert_eq!(interval.short_code(), "H7");
        assert_eq!(interval.display_name(), "7. Teilton");
        assert_eq!(interval.ratio_string(), "7:4");
        assert_eq!(interval.semitones(), 10);
    }

    #[test]
    fn test_interval_definitions() {
        let rows = interval_definitions();
        assert_eq!(rows.len(), 28);
        assert_eq!(rows[0].short_code, "P");
        assert_eq!(rows[9].kind, IntervalType::MajorThird);
        assert_eq!(rows[9].ratio_string, "5:4");
        assert_eq!(rows[9].semitones, 4);
    }
}
