mod model;
mod parse;

pub use model::*;
pub use parse::{decode_smf, map_track};

use thiserror::Error;

/// Fatal decode failures. Anything reported here aborts the whole read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("malformed MIDI data: {0}")]
    MalformedInput(String),
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("cannot read '{path}': {reason}")]
    Unreadable { path: String, reason: String },
    #[error("invalid tempo: {0} microseconds per beat")]
    InvalidTempo(f64),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
