// Shared SMF fixtures for integration tests
//
// Builds Standard MIDI File bytes with midly's writer so tests can exercise
// the full bytes -> outlets pipeline.

#![allow(dead_code)]

use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};

pub fn note_on(delta: u32, channel: u8, key: u8, vel: u8) -> TrackEvent<'static> {
    midi(delta, channel, MidiMessage::NoteOn { key: key.into(), vel: vel.into() })
}

pub fn note_off(delta: u32, channel: u8, key: u8) -> TrackEvent<'static> {
    midi(delta, channel, MidiMessage::NoteOff { key: key.into(), vel: 64.into() })
}

pub fn program(delta: u32, channel: u8, program: u8) -> TrackEvent<'static> {
    midi(delta, channel, MidiMessage::ProgramChange { program: program.into() })
}

pub fn tempo(delta: u32, microseconds_per_beat: u32) -> TrackEvent<'static> {
    TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(microseconds_per_beat.into())),
    }
}

pub fn track_name(delta: u32, name: &'static [u8]) -> TrackEvent<'static> {
    TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(name)),
    }
}

pub fn controller(delta: u32, channel: u8, controller: u8, value: u8) -> TrackEvent<'static> {
    midi(delta, channel, MidiMessage::Controller { controller: controller.into(), value: value.into() })
}

fn midi(delta: u32, channel: u8, message: MidiMessage) -> TrackEvent<'static> {
    TrackEvent {
        delta: delta.into(),
        kind: TrackEventKind::Midi {
            channel: channel.into(),
            message,
        },
    }
}

/// Encode tracks as a format 1 SMF; each track gets an EndOfTrack appended
pub fn smf_bytes(ppq: u16, tracks: Vec<Vec<TrackEvent<'static>>>) -> Vec<u8> {
    let tracks = tracks
        .into_iter()
        .map(|mut track| {
            track.push(TrackEvent {
                delta: 0.into(),
                kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
            });
            track
        })
        .collect();

    let smf = Smf {
        header: Header {
            format: Format::Parallel,
            timing: Timing::Metrical(ppq.into()),
        },
        tracks,
    };

    let mut out = Vec::new();
    smf.write(&mut out).expect("Failed to write SMF");
    out
}

/// Two-track file: a conductor track with tempo, and a piano melody
pub fn simple_song() -> Vec<u8> {
    smf_bytes(
        480,
        vec![
            vec![track_name(0, b"Conductor"), tempo(0, 500_000)],
            vec![
                program(0, 0, 0),
                note_on(0, 0, 60, 100),
                note_off(480, 0, 60),
                note_on(0, 0, 62, 90),
                note_off(480, 0, 62),
                note_on(0, 0, 64, 80),
                note_off(960, 0, 64),
            ],
        ],
    )
}
