//! MIDI note reader WASM API
//!
//! JavaScript-facing functions. Core logic lives in `reader`, `interpreter`
//! and `renderers::outlets`; this layer only converts arguments and results.
//!
//! # Module Structure
//!
//! - `helpers`: console logging, serialization and error conversion
//! - `sink`: outlet sink that forwards messages to a JS callback
//! - `read`: the exported read/decode functions

pub mod helpers;
pub mod sink;
pub mod read;

pub use read::{read_midi, decode_midi, decode_midi_json, instrument_name, tempo_to_bpm};
