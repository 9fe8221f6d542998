//! Frequency utilities: equal-tempered offsets and ratio application.

use crate::interval::Interval;
use crate::note::ConcertPitch;

/// Equal-tempered frequency `offset` semitones from concert A (440 Hz).
///
/// ```
/// use scalemaker::pitch::frequency_from_semitone_offset;
///
/// assert_eq!(frequency_from_semitone_offset(0), 440.0);
/// assert_eq!(frequency_from_semitone_offset(12), 880.0);
/// ```
pub fn frequency_from_semitone_offset(offset: i32) -> f64 {
    frequency_from_reference(ConcertPitch::Default.frequency(), offset)
}

/// Equal-tempered frequency `offset` semitones from `reference` Hz.
pub fn frequency_from_reference(reference: f64, offset: i32) -> f64 {
    reference * 2f64.powf(offset as f64 / 12.0)
}

/// `base` Hz raised by the interval's ratio.
pub fn apply_ratio(base: f64, interval: &Interval) -> f64 {
    base * interval.ratio()
}
