//! Lean view of a decoded Standard MIDI File
//!
//! Holds just what the interpreter needs: resolution, track count and the
//! per-track event lists in file order.

use crate::models::RawTrackEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFile {
    pub ppq: u16,
    pub num_tracks: usize,
    pub tracks: Vec<Vec<RawTrackEvent>>,
}

impl DecodedFile {
    /// Build from in-memory tracks; the track count follows `tracks`
    pub fn new(ppq: u16, tracks: Vec<Vec<RawTrackEvent>>) -> Self {
        Self {
            ppq,
            num_tracks: tracks.len(),
            tracks,
        }
    }
}
