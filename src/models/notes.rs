//! Note records produced by the track interpreter

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies an in-flight note: (track index, channel, note number)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActiveNoteKey {
    pub track: usize,
    pub channel: u8,
    pub note: u8,
}

/// A sounding note waiting for its release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveNote {
    pub pitch: u8,
    pub velocity: u8,
    pub start_time: u64,
    pub channel: u8,
}

/// A complete note: a NoteOn paired with its release
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    pub track: usize,
    pub pitch: u8,
    /// Velocity of the NoteOn
    pub velocity: u8,
    pub start_time: u64,
    pub duration: u64,
    pub channel: u8,
}

impl NoteEvent {
    pub fn end_time(&self) -> u64 {
        self.start_time + self.duration
    }
}

/// Last program number seen per channel on one track
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ProgramMap {
    programs: BTreeMap<u8, u8>,
}

impl ProgramMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a program to a channel, replacing any earlier assignment
    pub fn set(&mut self, channel: u8, program: u8) {
        self.programs.insert(channel, program);
    }

    pub fn get(&self, channel: u8) -> Option<u8> {
        self.programs.get(&channel).copied()
    }
}
