//! # Tuning Configuration
//!
//! Optional YAML configuration for note creation.
//!
//! ## Format
//! ```yaml
//! concert-pitch: de        # default | de | at | ch, or a frequency in Hz such as 415
//! default-octave: 1
//! note-frequencies:        # absolute frequencies, override or extend the default table
//!   Es: 313.5
//!   Ges: 371.25
//! ```
//! Every key is optional; an empty document gives the built-in defaults.
//!
//! ## Concert pitch
//! The built-in frequency table assumes A' = 440 Hz. With another concert pitch the
//! table is scaled by `reference / 440`, so `concert-pitch: de` puts C' at
//! `264 * 443 / 440` Hz. Entries from `note-frequencies` are used as written.
//!
//! ## Example
//! ```rust
//! use scalemaker::config::TuningConfig;
//!
//! let config = TuningConfig::from_yaml("concert-pitch: 442\nnote-frequencies:\n  Es: 316.0\n")?;
//! assert_eq!(config.reference_frequency(), 442.0);
//! assert_eq!(config.make_note("Es", None, None)?.frequency(), 316.0);
//! # Ok::<(), scalemaker::TheoryError>(())
//! ```

use crate::error::TheoryError;
use crate::note::{self, ConcertPitch, Pitch, DEFAULT_OCTAVE};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawTuningConfig {
    concert_pitch: Option<String>, // Region name or a frequency in Hz
    default_octave: Option<i32>,
    note_frequencies: Option<BTreeMap<String, f64>>,
}

/// Validated tuning configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningConfig {
    reference_frequency: f64,
    default_octave: i32,
    note_frequencies: BTreeMap<String, f64>,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            reference_frequency: ConcertPitch::Default.frequency(),
            default_octave: DEFAULT_OCTAVE,
            note_frequencies: BTreeMap::new(),
        }
    }
}

fn check_frequency(what: &str, value: f64) -> Result<f64, TheoryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TheoryError::ConfigError(format!(
            "{} must be a positive frequency, got {}",
            what, value
        )))
    }
}

fn parse_concert_pitch(s: &str) -> Result<f64, TheoryError> {
    if let Ok(hz) = s.trim().parse::<f64>() {
        return check_frequency("concert-pitch", hz);
    }
    s.parse::<ConcertPitch>()
        .map(ConcertPitch::frequency)
        .map_err(|_| {
            TheoryError::ConfigError(format!(
                "concert-pitch must be default, de, at, ch or a frequency, got '{}'",
                s
            ))
        })
}

impl TuningConfig {
    /// Parse and validate a YAML configuration.
    pub fn from_yaml(content: &str) -> Result<Self, TheoryError> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawTuningConfig =
            serde_yaml::from_str(content).map_err(|e| TheoryError::ConfigError(e.to_string()))?;

        let reference_frequency = match &raw.concert_pitch {
            Some(cp) => parse_concert_pitch(cp)?,
            None => ConcertPitch::Default.frequency(),
        };

        let mut note_frequencies = BTreeMap::new();
        for (name, freq) in raw.note_frequencies.unwrap_or_default() {
            let freq = check_frequency(&format!("note-frequencies.{}", name), freq)?;
            note_frequencies.insert(name, freq);
        }

        let config = Self {
            reference_frequency,
            default_octave: raw.default_octave.unwrap_or(DEFAULT_OCTAVE),
            note_frequencies,
        };
        debug!(
            reference_frequency = config.reference_frequency,
            overrides = config.note_frequencies.len(),
            "loaded tuning configuration"
        );
        Ok(config)
    }

    /// Read and parse a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TheoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TheoryError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Frequency of A' in Hz.
    pub fn reference_frequency(&self) -> f64 {
        self.reference_frequency
    }

    pub fn default_octave(&self) -> i32 {
        self.default_octave
    }

    pub fn note_frequencies(&self) -> &BTreeMap<String, f64> {
        &self.note_frequencies
    }

    /// Frequency for a note name: configured override first, then the scaled default table.
    pub fn default_frequency(&self, letter: &str) -> Option<f64> {
        if let Some(freq) = self.note_frequencies.get(letter) {
            return Some(*freq);
        }
        let scale = self.reference_frequency / ConcertPitch::Default.frequency();
        note::default_frequency(letter).map(|freq| freq * scale)
    }

    /// Create a note, filling in the frequency and octave from this configuration.
    ///
    /// Fails with [`TheoryError::UnknownNoteName`] when no frequency is given and the name
    /// has no configured or default frequency.
    pub fn make_note(
        &self,
        letter: &str,
        frequency: Option<f64>,
        octave: Option<i32>,
    ) -> Result<Pitch, TheoryError> {
        let frequency = match frequency {
            Some(freq) => freq,
            None => self
                .default_frequency(letter)
                .ok_or_else(|| TheoryError::UnknownNoteName(letter.to_string()))?,
        };
        Ok(Pitch::new(
            letter,
            frequency,
            octave.unwrap_or(self.default_octave),
        ))
    }

    /// Concert A at the configured reference frequency.
    pub fn concert_note(&self) -> Pitch {
        Pitch::new("A", self.reference_frequency, DEFAULT_OCTAVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(TuningConfig::from_yaml("").unwrap(), TuningConfig::default());
        assert_eq!(TuningConfig::from_yaml("{}").unwrap(), TuningConfig::default());
    }

    #[test]
    fn test_region_concert_pitch() {
        let config = TuningConfig::from_yaml("concert-pitch: de").unwrap();
        assert_eq!(config.reference_frequency(), 443.0);
        assert_eq!(config.concert_note().frequency(), 443.0);
        assert_relative_eq!(
            config.default_frequency("C").unwrap(),
            264.0 * 443.0 / 440.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_numeric_concert_pitch() {
        let config = TuningConfig::from_yaml("concert-pitch: 415").unwrap();
        assert_eq!(config.reference_frequency(), 415.0);
        assert_eq!(config.default_frequency("A"), Some(415.0));
    }

    #[test]
    fn test_overrides_are_absolute() {
        let yaml = "concert-pitch: ch\nnote-frequencies:\n  Es: 313.5\n  C: 260\n";
        let config = TuningConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_frequency("Es"), Some(313.5));
        assert_eq!(config.default_frequency("C"), Some(260.0));
        assert!(config.default_frequency("Ces").is_none());
    }

    #[test]
    fn test_make_note_with_config() {
        let config = TuningConfig::from_yaml("default-octave: 2\nnote-frequencies:\n  Es: 627").unwrap();
        let es = config.make_note("Es", None, None).unwrap();
        assert_eq!(es.frequency(), 627.0);
        assert_eq!(es.octave(), 2);

        let explicit = config.make_note("X", Some(100.0), Some(0)).unwrap();
        assert_eq!(explicit.frequency(), 100.0);
        assert_eq!(explicit.octave(), 0);

        assert_eq!(
            config.make_note("Ces", None, None),
            Err(TheoryError::UnknownNoteName("Ces".to_string()))
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            TuningConfig::from_yaml("concert-pitch: mars"),
            Err(TheoryError::ConfigError(_))
        ));
        assert!(matches!(
            TuningConfig::from_yaml("concert-pitch: -440"),
            Err(TheoryError::ConfigError(_))
        ));
        assert!(matches!(
            TuningConfig::from_yaml("note-frequencies:\n  C: 0"),
            Err(TheoryError::ConfigError(_))
        ));
        assert!(matches!(
            TuningConfig::from_yaml("tempo: 120"),
            Err(TheoryError::ConfigError(_))
        ));
        assert!(matches!(
            TuningConfig::from_yaml("default-octave: [1, 2]"),
            Err(TheoryError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TuningConfig::load("/nonexistent/tuning.yaml").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
