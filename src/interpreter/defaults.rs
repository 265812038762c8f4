//! Default values for note reading output
//!
//! Outlet names and fixed message texts used when reporting a decoded score.

/// Microseconds in one minute, numerator of the tempo conversion
pub const MICROSECONDS_PER_MINUTE: f64 = 60_000_000.0;

/// Reported on the bpm outlet when the file has no tempo event
pub const NO_BPM_MESSAGE: &str = "No BPM found, defaulting to 120";

/// Instrument name for channels with no (or an out-of-range) program
pub const UNKNOWN_INSTRUMENT: &str = "unknown instrument";

/// Event label carried by every note message
pub const NOTE_EVENT_LABEL: &str = "noteEvent";

/// Prefix of the single message sent on a fatal failure
pub const DEFAULT_ERROR_PREFIX: &str = "Error reading MIDI file: ";

pub const DEFAULT_BPM_OUTLET: &str = "bpm";
pub const DEFAULT_END_TICK_OUTLET: &str = "endTick";
pub const DEFAULT_PPQ_OUTLET: &str = "ppq";
pub const DEFAULT_TRACKS_OUTLET: &str = "Tracks";
pub const DEFAULT_NOTE_OUTLET: &str = "note";
pub const DEFAULT_ERROR_OUTLET: &str = "error";
