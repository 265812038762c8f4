//! MIDI reading operations exposed to JavaScript

use wasm_bindgen::prelude::*;

use super::helpers::{decode_error, deserialize_or_default, serialize};
use super::sink::JsOutletSink;
use crate::interpreter;
use crate::renderers::outlets::{ReadSettings, RecordingSink};
use crate::{wasm_log, wasm_info, wasm_error};

/// Read a MIDI file and stream the results to an outlet callback
///
/// # Parameters
/// - `bytes`: Standard MIDI File contents
/// - `outlet`: called as `outlet(name, ...args)` once per message
/// - `settings`: optional `ReadSettings` object (outlet names, error prefix)
///
/// A malformed file is reported as a single message on the error outlet,
/// not thrown. Only an exception raised by `outlet` itself is rethrown.
#[wasm_bindgen(js_name = readMidi)]
pub fn read_midi(bytes: &[u8], outlet: &js_sys::Function, settings: JsValue) -> Result<(), JsValue> {
    wasm_info!("readMidi called with {} bytes", bytes.len());

    let settings: ReadSettings = deserialize_or_default(settings, "Invalid read settings")?;
    let mut sink = JsOutletSink::new(outlet);

    match crate::reader::read_midi(bytes, &settings, &mut sink) {
        Ok(summary) => wasm_info!(
            "readMidi completed: {} tracks, {} notes",
            summary.num_tracks,
            summary.notes.len()
        ),
        Err(e) => wasm_error!("readMidi failed: {}", e),
    }

    sink.finish()
}

/// Read a MIDI file and return the outlet messages as an array
///
/// Each entry is `{ outlet, args }`, in the order `readMidi` would send them.
#[wasm_bindgen(js_name = decodeMidi)]
pub fn decode_midi(bytes: &[u8], settings: JsValue) -> Result<JsValue, JsValue> {
    wasm_info!("decodeMidi called with {} bytes", bytes.len());

    let settings: ReadSettings = deserialize_or_default(settings, "Invalid read settings")?;
    let mut sink = RecordingSink::new();
    if let Err(e) = crate::reader::read_midi(bytes, &settings, &mut sink) {
        wasm_error!("decodeMidi failed: {}", e);
    }

    wasm_log!("  {} outlet messages", sink.messages.len());
    serialize(&sink, "Failed to serialize outlet messages")
}

/// Decode a MIDI file to its score summary as JSON, with instrument names
#[wasm_bindgen(js_name = decodeMidiJson)]
pub fn decode_midi_json(bytes: &[u8]) -> Result<String, JsValue> {
    wasm_info!("decodeMidiJson called with {} bytes", bytes.len());

    let summary = crate::reader::decode_midi(bytes)
        .map_err(|e| decode_error("MIDI decode error", &e))?;

    summary.to_json().map_err(|e| {
        wasm_error!("JSON serialization error: {}", e);
        JsValue::from_str(&format!("JSON serialization error: {}", e))
    })
}

/// General MIDI instrument name for a program number
#[wasm_bindgen(js_name = instrumentName)]
pub fn instrument_name(program: i32) -> String {
    interpreter::instrument_name(i64::from(program)).to_string()
}

/// Convert microseconds per beat to beats per minute
#[wasm_bindgen(js_name = tempoToBpm)]
pub fn tempo_to_bpm(microseconds_per_beat: f64) -> Result<f64, JsValue> {
    interpreter::tempo_to_bpm(microseconds_per_beat).map_err(|e| decode_error("Tempo error", &e))
}
