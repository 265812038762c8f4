//! Per-track event interpreter
//!
//! Walks one track's delta-timed events and pairs each NoteOn with its
//! release. The walk is a fold over [`TrackState`]; nothing outlives a call.
//!
//! ## Pairing rules
//! - A NoteOn with velocity > 0 opens (or reopens) the note for its key;
//!   a second NoteOn on an open key replaces the first
//! - A NoteOff, or a NoteOn with velocity 0, closes the open note for its key
//!   and emits it; a release with no open note is ignored
//! - Notes still open when the track ends are dropped

use std::collections::HashMap;

use crate::models::{ActiveNote, ActiveNoteKey, EventKind, NoteEvent, ProgramMap, RawTrackEvent};

/// Everything one track contributes to the score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackOutcome {
    pub notes: Vec<NoteEvent>,
    pub programs: ProgramMap,
    /// Absolute tick of the last event
    pub end_tick: u64,
    /// First SetTempo value on this track, in microseconds per beat
    pub first_tempo: Option<u32>,
}

/// Running state of a track walk
#[derive(Debug, Clone)]
struct TrackState {
    track: usize,
    current_time: u64,
    active: HashMap<ActiveNoteKey, ActiveNote>,
    outcome: TrackOutcome,
}

impl TrackState {
    fn new(track: usize) -> Self {
        Self {
            track,
            current_time: 0,
            active: HashMap::new(),
            outcome: TrackOutcome::default(),
        }
    }

    fn key(&self, channel: u8, note: u8) -> ActiveNoteKey {
        ActiveNoteKey {
            track: self.track,
            channel,
            note,
        }
    }

    fn step(mut self, event: &RawTrackEvent) -> Self {
        self.current_time += u64::from(event.delta_time);

        match event.kind {
            EventKind::ProgramChange { channel, program } => {
                self.outcome.programs.set(channel, program);
            }
            EventKind::SetTempo { microseconds_per_beat } => {
                if self.outcome.first_tempo.is_none() {
                    self.outcome.first_tempo = Some(microseconds_per_beat);
                }
            }
            EventKind::NoteOn { channel, note, velocity }
            | EventKind::NoteOff { channel, note, velocity } => {
                if event.kind.is_note_release() {
                    self.release(channel, note);
                } else {
                    self.press(channel, note, velocity);
                }
            }
            EventKind::Other => {}
        }

        self
    }

    fn press(&mut self, channel: u8, note: u8, velocity: u8) {
        let key = self.key(channel, note);
        let replaced = self.active.insert(
            key,
            ActiveNote {
                pitch: note,
                velocity,
                start_time: self.current_time,
                channel,
            },
        );
        if let Some(previous) = replaced {
            log::trace!(
                "track {}: note {} on channel {} restarted at tick {} (was open since {})",
                self.track,
                note,
                channel,
                self.current_time,
                previous.start_time
            );
        }
    }

    fn release(&mut self, channel: u8, note: u8) {
        let key = self.key(channel, note);
        match self.active.remove(&key) {
            Some(on) => self.outcome.notes.push(NoteEvent {
                track: self.track,
                pitch: on.pitch,
                velocity: on.velocity,
                start_time: on.start_time,
                duration: self.current_time - on.start_time,
                channel: on.channel,
            }),
            None => log::trace!(
                "track {}: release of note {} on channel {} at tick {} has no open note",
                self.track,
                note,
                channel,
                self.current_time
            ),
        }
    }

    fn finish(mut self) -> TrackOutcome {
        if !self.active.is_empty() {
            log::trace!(
                "track {}: dropping {} unterminated notes",
                self.track,
                self.active.len()
            );
        }
        self.outcome.end_tick = self.current_time;
        self.outcome
    }
}

/// Interpret one track's events
pub fn interpret_track(track: usize, events: &[RawTrackEvent]) -> TrackOutcome {
    let outcome = events
        .iter()
        .fold(TrackState::new(track), TrackState::step)
        .finish();

    log::debug!(
        "track {}: {} events, {} notes, ends at tick {}",
        track,
        events.len(),
        outcome.notes.len(),
        outcome.end_tick
    );

    outcome
}
