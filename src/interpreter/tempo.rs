use super::defaults::MICROSECONDS_PER_MINUTE;
use crate::converters::smf::{DecodeError, Result};

/// Convert a SetTempo value (microseconds per quarter note) to beats per minute
///
/// Zero, negative and non-finite tempos are rejected instead of producing
/// an infinite or NaN bpm.
pub fn tempo_to_bpm(microseconds_per_beat: f64) -> Result<f64> {
    if !microseconds_per_beat.is_finite() || microseconds_per_beat <= 0.0 {
        return Err(DecodeError::InvalidTempo(microseconds_per_beat));
    }
    Ok(MICROSECONDS_PER_MINUTE / microseconds_per_beat)
}
