//! Settings for reporting a decoded score

use serde::{Deserialize, Serialize};

use crate::interpreter::defaults::{
    DEFAULT_BPM_OUTLET, DEFAULT_END_TICK_OUTLET, DEFAULT_ERROR_OUTLET, DEFAULT_ERROR_PREFIX,
    DEFAULT_NOTE_OUTLET, DEFAULT_PPQ_OUTLET, DEFAULT_TRACKS_OUTLET,
};

/// Names of the outlets results are reported on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutletNames {
    pub bpm: String,
    pub end_tick: String,
    pub ppq: String,
    pub tracks: String,
    pub note: String,
    /// Receives the single message of a fatal failure
    pub error: String,
}

impl Default for OutletNames {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM_OUTLET.to_string(),
            end_tick: DEFAULT_END_TICK_OUTLET.to_string(),
            ppq: DEFAULT_PPQ_OUTLET.to_string(),
            tracks: DEFAULT_TRACKS_OUTLET.to_string(),
            note: DEFAULT_NOTE_OUTLET.to_string(),
            error: DEFAULT_ERROR_OUTLET.to_string(),
        }
    }
}

/// Options for a read; every field falls back to its default when omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReadSettings {
    pub outlets: OutletNames,

    /// Text placed before the error description on a fatal failure
    pub error_prefix: String,
}

impl Default for ReadSettings {
    fn default() -> Self {
        Self {
            outlets: OutletNames::default(),
            error_prefix: DEFAULT_ERROR_PREFIX.to_string(),
        }
    }
}

impl ReadSettings {
    /// Parse settings from a JSON object, e.g. `{"outlets": {"error": "note"}}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
