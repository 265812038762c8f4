//! Read pipeline: bytes (or a file path) to outlet messages
//!
//! Decoding and aggregation finish before anything is sent, so a fatal error
//! produces exactly one error message and no partial results.

use std::io::ErrorKind;
use std::path::Path;

use crate::converters::smf::{decode_smf, DecodeError, Result};
use crate::interpreter::aggregate;
use crate::models::ScoreSummary;
use crate::renderers::outlets::{OutletSink, ReadSettings, ResultEmitter};

/// Decode SMF bytes into a score summary
pub fn decode_midi(bytes: &[u8]) -> Result<ScoreSummary> {
    let file = decode_smf(bytes)?;
    aggregate(&file)
}

/// Decode SMF bytes and report the outcome on `sink`
pub fn read_midi<S: OutletSink + ?Sized>(
    bytes: &[u8],
    settings: &ReadSettings,
    sink: &mut S,
) -> Result<ScoreSummary> {
    report(decode_midi(bytes), settings, sink)
}

/// Read an SMF from disk and report the outcome on `sink`
pub fn read_midi_file<S: OutletSink + ?Sized>(
    path: impl AsRef<Path>,
    settings: &ReadSettings,
    sink: &mut S,
) -> Result<ScoreSummary> {
    let outcome = load_file(path.as_ref()).and_then(|bytes| decode_midi(&bytes));
    report(outcome, settings, sink)
}

fn load_file(path: &Path) -> Result<Vec<u8>> {
    log::info!("Attempting to read MIDI file: {}", path.display());

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecodeError::FileNotFound(path.display().to_string()),
        _ => DecodeError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    log::info!("MIDI file read successfully: {} bytes", bytes.len());
    Ok(bytes)
}

fn report<S: OutletSink + ?Sized>(
    outcome: Result<ScoreSummary>,
    settings: &ReadSettings,
    sink: &mut S,
) -> Result<ScoreSummary> {
    let emitter = ResultEmitter::new(settings);
    match &outcome {
        Ok(summary) => emitter.emit_summary(summary, sink),
        Err(e) => {
            log::error!("Error reading MIDI file: {}", e);
            emitter.emit_failure(e, sink);
        }
    }
    outcome
}
