// End-to-end tests: SMF bytes -> score summary -> outlet messages

mod common;

use common::*;
use midi_notes_wasm::converters::smf::DecodeError;
use midi_notes_wasm::models::NoteEvent;
use midi_notes_wasm::reader::{decode_midi, read_midi, read_midi_file};
use midi_notes_wasm::renderers::outlets::{OutletValue, ReadSettings, RecordingSink};

fn note(track: usize, pitch: u8, velocity: u8, start_time: u64, duration: u64, channel: u8) -> NoteEvent {
    NoteEvent {
        track,
        pitch,
        velocity,
        start_time,
        duration,
        channel,
    }
}

#[test]
fn test_single_note_example() {
    let bytes = smf_bytes(480, vec![vec![note_on(0, 0, 60, 100), note_off(480, 0, 60)]]);

    let summary = decode_midi(&bytes).expect("decode should succeed");
    assert_eq!(summary.ppq, 480);
    assert_eq!(summary.notes, vec![note(0, 60, 100, 0, 480, 0)]);
}

#[test]
fn test_simple_song_outlets() {
    let mut sink = RecordingSink::new();
    read_midi(&simple_song(), &ReadSettings::default(), &mut sink).expect("read should succeed");

    let rendered: Vec<String> = sink.messages.iter().map(|m| m.to_string()).collect();
    assert_eq!(
        rendered,
        vec![
            "bpm 120",
            "endTick 1920",
            "ppq 480",
            "Tracks 2",
            "note 1 acoustic grand piano noteEvent 60 100 0 480 0",
            "note 1 acoustic grand piano noteEvent 62 90 480 480 0",
            "note 1 acoustic grand piano noteEvent 64 80 960 960 0",
        ]
    );
    assert_eq!(sink.messages[0].args, vec![OutletValue::Float(120.0)]);
}

#[test]
fn test_missing_tempo_reports_fallback_text() {
    let bytes = smf_bytes(96, vec![vec![note_on(0, 0, 60, 100), note_off(96, 0, 60)]]);
    let mut sink = RecordingSink::new();
    read_midi(&bytes, &ReadSettings::default(), &mut sink).unwrap();

    let bpm = sink.on("bpm").next().expect("bpm outlet");
    assert_eq!(
        bpm.args,
        vec![OutletValue::Text("No BPM found, defaulting to 120".to_string())]
    );
}

#[test]
fn test_first_tempo_across_tracks_wins() {
    let bytes = smf_bytes(
        480,
        vec![
            vec![note_on(0, 0, 60, 100), note_off(480, 0, 60)],
            vec![tempo(960, 400_000), tempo(0, 600_000)],
            vec![tempo(0, 1_000_000)],
        ],
    );

    assert_eq!(decode_midi(&bytes).unwrap().bpm, Some(150.0));
}

#[test]
fn test_end_tick_is_longest_track() {
    let bytes = smf_bytes(
        480,
        vec![
            vec![controller(100, 0, 7, 100), controller(200, 0, 7, 90)],
            vec![note_on(50, 1, 40, 100), note_off(2000, 1, 40)],
            vec![],
        ],
    );

    let summary = decode_midi(&bytes).unwrap();
    assert_eq!(summary.final_tick, 2050);
    assert_eq!(summary.num_tracks, 3);
}

#[test]
fn test_instruments_resolved_per_track_and_channel() {
    let bytes = smf_bytes(
        480,
        vec![
            vec![
                program(0, 0, 40),
                program(0, 1, 42),
                note_on(0, 0, 67, 100),
                note_on(0, 1, 48, 100),
                note_off(480, 0, 67),
                note_off(0, 1, 48),
            ],
            vec![note_on(0, 0, 72, 100), note_off(240, 0, 72)],
            vec![program(0, 2, 200 & 0x7f), note_on(0, 2, 50, 10), note_off(10, 2, 50)],
        ],
    );

    let mut sink = RecordingSink::new();
    read_midi(&bytes, &ReadSettings::default(), &mut sink).unwrap();

    let instruments: Vec<String> = sink
        .on("note")
        .map(|m| m.args[1].to_string())
        .collect();
    // track 2 assigns program 72 (200 masked to 7 bits) on channel 2
    assert_eq!(instruments, vec!["violin", "cello", "unknown instrument", "piccolo"]);
}

#[test]
fn test_program_change_after_note_still_applies() {
    let bytes = smf_bytes(
        480,
        vec![vec![
            note_on(0, 0, 60, 100),
            note_off(480, 0, 60),
            program(0, 0, 73),
        ]],
    );

    let mut sink = RecordingSink::new();
    read_midi(&bytes, &ReadSettings::default(), &mut sink).unwrap();
    let note = sink.on("note").next().unwrap();
    assert_eq!(note.args[1], OutletValue::Text("flute".to_string()));
}

#[test]
fn test_running_status_note_off() {
    let bytes = smf_bytes(
        480,
        vec![vec![
            note_on(0, 3, 60, 100),
            note_on(240, 3, 60, 0),
            note_on(0, 3, 60, 70),
            note_on(240, 3, 60, 0),
        ]],
    );

    let summary = decode_midi(&bytes).unwrap();
    assert_eq!(
        summary.notes,
        vec![note(0, 60, 100, 0, 240, 3), note(0, 60, 70, 240, 240, 3)]
    );
}

#[test]
fn test_duplicate_note_on_emits_once() {
    let bytes = smf_bytes(
        480,
        vec![vec![
            note_on(0, 0, 60, 100),
            note_on(120, 0, 60, 40),
            note_off(360, 0, 60),
        ]],
    );

    let summary = decode_midi(&bytes).unwrap();
    assert_eq!(summary.notes, vec![note(0, 60, 40, 120, 360, 0)]);
}

#[test]
fn test_unterminated_and_unmatched_events_are_tolerated() {
    let bytes = smf_bytes(
        480,
        vec![vec![
            note_off(0, 0, 50),
            note_on(10, 0, 60, 100),
            note_on(10, 0, 62, 100),
            note_off(10, 0, 62),
        ]],
    );

    let mut sink = RecordingSink::new();
    let summary = read_midi(&bytes, &ReadSettings::default(), &mut sink).unwrap();
    assert_eq!(summary.notes, vec![note(0, 62, 100, 20, 10, 0)]);
    assert_eq!(sink.on("error").count(), 0);
    assert_eq!(sink.on("note").count(), 1);
}

#[test]
fn test_balanced_tracks_emit_one_note_per_release() {
    let mut events = Vec::new();
    for i in 0..16u8 {
        events.push(note_on(0, i % 4, 40 + i, 64 + i));
        events.push(note_off(30, i % 4, 40 + i));
    }
    let bytes = smf_bytes(480, vec![events.clone(), events]);

    let summary = decode_midi(&bytes).unwrap();
    assert_eq!(summary.notes.len(), 32);
    assert_eq!(summary.track_notes(0).count(), 16);
    assert!(summary.notes.iter().all(|n| n.duration == 30));
}

#[test]
fn test_zero_tempo_is_single_fatal_error() {
    let bytes = smf_bytes(
        480,
        vec![vec![tempo(0, 0), note_on(0, 0, 60, 100), note_off(480, 0, 60)]],
    );

    let mut sink = RecordingSink::new();
    let result = read_midi(&bytes, &ReadSettings::default(), &mut sink);

    assert_eq!(result, Err(DecodeError::InvalidTempo(0.0)));
    assert_eq!(sink.messages.len(), 1);
    assert_eq!(sink.messages[0].outlet, "error");
}

#[test]
fn test_truncated_file_is_single_fatal_error() {
    let bytes = simple_song();
    let truncated = &bytes[..10];

    let mut sink = RecordingSink::new();
    let result = read_midi(truncated, &ReadSettings::default(), &mut sink);

    assert!(matches!(result, Err(DecodeError::MalformedInput(_))));
    assert_eq!(sink.messages.len(), 1);
    match &sink.messages[0].args[0] {
        OutletValue::Text(text) => assert!(text.starts_with("Error reading MIDI file: ")),
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn test_file_cut_inside_last_track_is_single_fatal_error() {
    let bytes = simple_song();
    let truncated = &bytes[..bytes.len() - 6];

    let mut sink = RecordingSink::new();
    let result = read_midi(truncated, &ReadSettings::default(), &mut sink);

    assert!(matches!(result, Err(DecodeError::MalformedInput(_))));
    assert_eq!(sink.messages.len(), 1);
    assert_eq!(sink.messages[0].outlet, "error");
}

#[test]
fn test_header_declaring_missing_tracks_is_single_fatal_error() {
    let mut bytes = simple_song();
    // ntrks field of the MThd chunk
    bytes[10..12].copy_from_slice(&5u16.to_be_bytes());

    let mut sink = RecordingSink::new();
    let result = read_midi(&bytes, &ReadSettings::default(), &mut sink);

    assert!(matches!(result, Err(DecodeError::MalformedInput(_))));
    assert_eq!(sink.messages.len(), 1);
    assert_eq!(sink.messages[0].outlet, "error");
}

#[test]
fn test_error_outlet_can_be_renamed() {
    let settings = ReadSettings::from_json(r#"{"outlets": {"error": "note"}}"#).unwrap();
    let mut sink = RecordingSink::new();
    let _ = read_midi(b"nope", &settings, &mut sink);

    assert_eq!(sink.messages.len(), 1);
    assert_eq!(sink.messages[0].outlet, "note");
}

#[test]
fn test_read_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("song.mid");
    std::fs::write(&path, simple_song()).unwrap();

    let mut sink = RecordingSink::new();
    let summary = read_midi_file(&path, &ReadSettings::default(), &mut sink).unwrap();

    assert_eq!(summary.notes.len(), 3);
    assert_eq!(sink.messages.len(), 7);
}

#[test]
fn test_read_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = RecordingSink::new();
    let result = read_midi_file(dir.path().join("nothing.mid"), &ReadSettings::default(), &mut sink);

    assert!(matches!(result, Err(DecodeError::FileNotFound(_))));
    assert_eq!(sink.on("error").count(), 1);
}

#[test]
fn test_summary_json() {
    let summary = decode_midi(&simple_song()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

    assert_eq!(value["bpm"], 120.0);
    assert_eq!(value["numTracks"], 2);
    assert_eq!(value["notes"].as_array().unwrap().len(), 3);
    assert_eq!(value["notes"][2]["duration"], 960);
    assert_eq!(value["notes"][2]["instrument"], "acoustic grand piano");
}
