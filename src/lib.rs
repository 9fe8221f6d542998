pub mod api;
pub mod chord;
pub mod config;
pub mod error;
pub mod interval;
pub mod note;
pub mod patterns;
pub mod pitch;
pub mod scale;
pub mod speller;

pub use api::*;
pub use chord::{build_chord, Chord};
pub use config::TuningConfig;
pub use error::*;
pub use interval::{lookup, Interval, IntervalDefinition, IntervalType};
pub use note::{ConcertPitch, Pitch};
pub use patterns::{ChordCategory, ChordKind, ScaleCategory, ScaleKind};
pub use pitch::{apply_ratio, frequency_from_reference, frequency_from_semitone_offset};
pub use scale::{build_scale, Scale};
