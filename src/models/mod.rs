//! Models module for the MIDI note reader
//!
//! Plain data types shared by the decoder, the interpreter and the
//! outlet renderer.

pub mod events;
pub mod notes;
pub mod score;

// Re-export commonly used types
pub use events::*;
pub use notes::*;
pub use score::ScoreSummary;
