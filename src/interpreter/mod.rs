//! Note interpretation of decoded MIDI tracks
//!
//! Turns per-track event lists into completed notes plus score-wide
//! metadata (tempo, resolution, track count, end tick).
//!
//! # Usage
//! ```rust,ignore
//! use crate::converters::smf::decode_smf;
//! use crate::interpreter::aggregate;
//!
//! let file = decode_smf(&bytes)?;
//! let summary = aggregate(&file)?;
//! ```

pub mod aggregate;
pub mod defaults;
pub mod instruments;
pub mod tempo;
pub mod track;

pub use aggregate::{aggregate, fold_outcomes};
pub use instruments::{instrument_name, program_instrument, GM_INSTRUMENTS};
pub use tempo::tempo_to_bpm;
pub use track::{interpret_track, TrackOutcome};
