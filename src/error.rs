//! # Error Types
//!
//! This module defines all error types for the scalemaker library.
//!
//! Every failure is a local validation failure: the engine does no I/O apart from
//! reading a configuration file, so nothing here is transient or worth retrying.
//!
//! ## Error Types
//! - `UnknownNoteName` - No default frequency for a note name and none was supplied
//! - `InvalidDegree` - Scale degree outside the range usable for triad derivation
//! - `UnrecognizedChromaticLetter` - Note name is not one of the twelve chromatic spellings
//! - `InvalidRatio` - Interval with a zero numerator or denominator
//! - `EmptyPattern` - Scale or chord pattern without a single interval
//! - `UnknownScaleKind` / `UnknownChordKind` - Name does not match any pattern
//! - `UnknownConcertPitch` - Unknown concert pitch region
//! - `ConfigError` - Invalid tuning configuration
//!
//! ## Usage
//! ```rust
//! use scalemaker::{make_note, TheoryError};
//!
//! match make_note("Xyz", None, None) {
//!     Ok(note) => println!("{} Hz", note.frequency()),
//!     Err(TheoryError::UnknownNoteName(name)) => eprintln!("No frequency for {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TheoryError {
    /// No default frequency is known for the note name and none was supplied.
    ///
    /// # Example
    /// ```
    /// # use scalemaker::TheoryError;
    /// let err = TheoryError::UnknownNoteName("Xyz".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: 'Xyz'");
    /// ```
    #[error("Unknown note name: '{0}'")]
    UnknownNoteName(String),

    /// Scale degree outside `1..=max`.
    ///
    /// `max` is the number of scale tones without the closing octave.
    ///
    /// # Example
    /// ```
    /// # use scalemaker::TheoryError;
    /// let err = TheoryError::InvalidDegree { degree: 8, max: 7 };
    /// assert_eq!(err.to_string(), "Invalid degree 8: must be between 1 and 7");
    /// ```
    #[error("Invalid degree {degree}: must be between 1 and {max}")]
    InvalidDegree { degree: usize, max: usize },

    /// The note name does not map to a chromatic index, so derived notes cannot be spelled.
    ///
    /// # Example
    /// ```
    /// # use scalemaker::TheoryError;
    /// let err = TheoryError::UnrecognizedChromaticLetter("Eis".to_string());
    /// assert_eq!(err.to_string(), "Unrecognized chromatic letter: 'Eis'");
    /// ```
    #[error("Unrecognized chromatic letter: '{0}'")]
    UnrecognizedChromaticLetter(String),

    /// Interval ratios must be positive, so neither term may be zero.
    ///
    /// # Example
    /// ```
    /// # use scalemaker::TheoryError;
    /// let err = TheoryError::InvalidRatio { numerator: 0, denominator: 5 };
    /// assert_eq!(err.to_string(), "Invalid interval ratio 0:5: both terms must be positive");
    /// ```
    #[error("Invalid interval ratio {numerator}:{denominator}: both terms must be positive")]
    InvalidRatio { numerator: u32, denominator: u32 },

    #[error("Pattern has no intervals")]
    EmptyPattern,

    #[error("Unknown scale kind: '{0}'")]
    UnknownScaleKind(String),

    #[error("Unknown chord kind: '{0}'")]
    UnknownChordKind(String),

    #[error("Unknown concert pitch: '{0}'")]
    UnknownConcertPitch(String),

    /// Invalid tuning configuration.
    ///
    /// Occurs when the YAML is malformed, the file cannot be read, or a frequency is not
    /// a positive finite number.
    ///
    /// # Example
    /// ```
    /// # use scalemaker::TheoryError;
    /// let err = TheoryError::ConfigError("note-frequencies.C must be positive".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: note-frequencies.C must be positive");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
