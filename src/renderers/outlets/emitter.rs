//! Reports a [`ScoreSummary`] (or a fatal error) over named outlets
//!
//! Order on success: bpm, endTick, ppq, Tracks, then one note message per
//! NoteEvent in track order. On failure only the error outlet is used.

use super::{OutletSink, OutletValue, ReadSettings};
use crate::converters::smf::DecodeError;
use crate::interpreter::defaults::{NOTE_EVENT_LABEL, NO_BPM_MESSAGE};
use crate::models::{NoteEvent, ScoreSummary};

pub struct ResultEmitter<'a> {
    settings: &'a ReadSettings,
}

impl<'a> ResultEmitter<'a> {
    pub fn new(settings: &'a ReadSettings) -> Self {
        Self { settings }
    }

    pub fn emit_summary<S: OutletSink + ?Sized>(&self, summary: &ScoreSummary, sink: &mut S) {
        let names = &self.settings.outlets;

        let bpm = match summary.bpm {
            Some(bpm) => OutletValue::Float(bpm),
            None => OutletValue::from(NO_BPM_MESSAGE),
        };
        sink.send(&names.bpm, vec![bpm]);
        sink.send(&names.end_tick, vec![summary.final_tick.into()]);
        sink.send(&names.ppq, vec![summary.ppq.into()]);
        sink.send(&names.tracks, vec![summary.num_tracks.into()]);

        for note in &summary.notes {
            sink.send(&names.note, self.note_args(summary, note));
        }
    }

    pub fn emit_failure<S: OutletSink + ?Sized>(&self, error: &DecodeError, sink: &mut S) {
        let message = format!("{}{}", self.settings.error_prefix, error);
        sink.send(&self.settings.outlets.error, vec![message.into()]);
    }

    /// `(track, instrument, "noteEvent", pitch, velocity, start, duration, channel)`
    fn note_args(&self, summary: &ScoreSummary, note: &NoteEvent) -> Vec<OutletValue> {
        vec![
            note.track.into(),
            summary.instrument_for(note).into(),
            NOTE_EVENT_LABEL.into(),
            note.pitch.into(),
            note.velocity.into(),
            note.start_time.into(),
            note.duration.into(),
            note.channel.into(),
        ]
    }
}
