//! Track events as handed over by the SMF decoder
//!
//! Only the event kinds the interpreter reacts to are modelled; everything
//! else collapses into [`EventKind::Other`] but still carries its delta time.

use serde::{Deserialize, Serialize};

/// One event of a track, timed relative to the previous event
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawTrackEvent {
    /// Ticks elapsed since the previous event in the same track
    pub delta_time: u32,
    pub kind: EventKind,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    NoteOn { channel: u8, note: u8, velocity: u8 },
    NoteOff { channel: u8, note: u8, velocity: u8 },
    ProgramChange { channel: u8, program: u8 },
    SetTempo { microseconds_per_beat: u32 },
    Other,
}

impl RawTrackEvent {
    pub fn new(delta_time: u32, kind: EventKind) -> Self {
        Self { delta_time, kind }
    }

    pub fn note_on(delta_time: u32, channel: u8, note: u8, velocity: u8) -> Self {
        Self::new(delta_time, EventKind::NoteOn { channel, note, velocity })
    }

    pub fn note_off(delta_time: u32, channel: u8, note: u8) -> Self {
        Self::new(delta_time, EventKind::NoteOff { channel, note, velocity: 0 })
    }

    pub fn program_change(delta_time: u32, channel: u8, program: u8) -> Self {
        Self::new(delta_time, EventKind::ProgramChange { channel, program })
    }

    pub fn set_tempo(delta_time: u32, microseconds_per_beat: u32) -> Self {
        Self::new(delta_time, EventKind::SetTempo { microseconds_per_beat })
    }

    pub fn other(delta_time: u32) -> Self {
        Self::new(delta_time, EventKind::Other)
    }
}

impl EventKind {
    /// True for a NoteOff, or a NoteOn with velocity 0 (running-status note off)
    pub fn is_note_release(&self) -> bool {
        matches!(
            self,
            EventKind::NoteOff { .. } | EventKind::NoteOn { velocity: 0, .. }
        )
    }
}
