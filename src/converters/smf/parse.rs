use crate::converters::smf::{model::DecodedFile, DecodeError, Result};
use crate::models::{EventKind, RawTrackEvent};
use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

/// Decode SMF bytes into per-track event lists
///
/// midly parses strictly: truncated chunks and a track count that disagrees
/// with the header are errors. Only metrical timing is accepted: the
/// interpreter works in ticks per quarter note, so SMPTE timecode files and a
/// resolution of 0 are rejected.
pub fn decode_smf(bytes: &[u8]) -> Result<DecodedFile> {
    let smf = Smf::parse(bytes).map_err(|e| DecodeError::MalformedInput(e.to_string()))?;

    let ppq = match smf.header.timing {
        Timing::Metrical(tpq) => tpq.as_int(),
        Timing::Timecode(fps, subframes) => {
            return Err(DecodeError::MalformedInput(format!(
                "timecode timing ({} fps, {} ticks per frame) has no ticks per beat",
                fps.as_int(),
                subframes
            )));
        }
    };
    if ppq == 0 {
        return Err(DecodeError::MalformedInput(
            "header declares 0 ticks per beat".to_string(),
        ));
    }

    let tracks: Vec<Vec<RawTrackEvent>> = smf.tracks.iter().map(|track| map_track(track)).collect();

    log::info!(
        "MIDI file parsed successfully: ppq={}, {} tracks",
        ppq,
        tracks.len()
    );

    Ok(DecodedFile::new(ppq, tracks))
}

/// Map one midly track onto the interpreter's event model
pub fn map_track(track: &[TrackEvent]) -> Vec<RawTrackEvent> {
    track
        .iter()
        .map(|event| RawTrackEvent::new(event.delta.as_int(), map_kind(&event.kind)))
        .collect()
}

fn map_kind(kind: &TrackEventKind) -> EventKind {
    match *kind {
        TrackEventKind::Midi { channel, message } => {
            let channel = channel.as_int();
            match message {
                MidiMessage::NoteOn { key, vel } => EventKind::NoteOn {
                    channel,
                    note: key.as_int(),
                    velocity: vel.as_int(),
                },
                MidiMessage::NoteOff { key, vel } => EventKind::NoteOff {
                    channel,
                    note: key.as_int(),
                    velocity: vel.as_int(),
                },
                MidiMessage::ProgramChange { program } => EventKind::ProgramChange {
                    channel,
                    program: program.as_int(),
                },
                _ => EventKind::Other,
            }
        }
        TrackEventKind::Meta(MetaMessage::Tempo(tempo)) => EventKind::SetTempo {
            microseconds_per_beat: tempo.as_int(),
        },
        _ => EventKind::Other,
    }
}
