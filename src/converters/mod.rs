//! Format converters
//!
//! This module contains the Standard MIDI File decoding boundary.

pub mod smf;

// Re-export for convenience
pub use smf::{decode_smf, DecodeError, DecodedFile};
