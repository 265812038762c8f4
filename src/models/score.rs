//! Score-level result of decoding a MIDI file

use serde::{Deserialize, Serialize};

use super::notes::{NoteEvent, ProgramMap};
use crate::interpreter::instruments::program_instrument;

/// Global metadata plus every completed note of the file
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    /// Pulses (ticks) per quarter note
    pub ppq: u16,
    pub num_tracks: usize,
    /// Tempo of the first SetTempo event, if the file has one
    pub bpm: Option<f64>,
    /// Largest absolute tick reached by any track
    pub final_tick: u64,
    /// Track order, then release order within a track
    pub notes: Vec<NoteEvent>,
    /// One map per track, indexed by track
    pub program_maps: Vec<ProgramMap>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedNote<'a> {
    #[serde(flatten)]
    note: &'a NoteEvent,
    instrument: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryJson<'a> {
    ppq: u16,
    num_tracks: usize,
    bpm: Option<f64>,
    final_tick: u64,
    notes: Vec<ResolvedNote<'a>>,
}

impl ScoreSummary {
    /// Program assigned to `channel` on `track`, if any
    pub fn program_for(&self, track: usize, channel: u8) -> Option<u8> {
        self.program_maps.get(track).and_then(|map| map.get(channel))
    }

    /// Instrument name for a note's (track, channel) pair
    pub fn instrument_for(&self, note: &NoteEvent) -> &'static str {
        program_instrument(self.program_for(note.track, note.channel))
    }

    /// Notes belonging to one track, in emission order
    pub fn track_notes(&self, track: usize) -> impl Iterator<Item = &NoteEvent> + '_ {
        self.notes.iter().filter(move |note| note.track == track)
    }

    /// Serialize with instrument names resolved per note
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let view = SummaryJson {
            ppq: self.ppq,
            num_tracks: self.num_tracks,
            bpm: self.bpm,
            final_tick: self.final_tick,
            notes: self
                .notes
                .iter()
                .map(|note| ResolvedNote {
                    note,
                    instrument: self.instrument_for(note),
                })
                .collect(),
        };
        serde_json::to_string(&view)
    }
}
