//! Score aggregation across tracks
//!
//! Folds every track's [`TrackOutcome`] into one [`ScoreSummary`] in track
//! order: end ticks reduce to their maximum, note lists concatenate, and the
//! first tempo found in track-then-event order becomes the score tempo.

use super::tempo::tempo_to_bpm;
use super::track::{interpret_track, TrackOutcome};
use crate::converters::smf::{DecodedFile, Result};
use crate::models::ScoreSummary;

/// Interpret every track of a decoded file
pub fn aggregate(file: &DecodedFile) -> Result<ScoreSummary> {
    let outcomes = file
        .tracks
        .iter()
        .enumerate()
        .map(|(index, events)| interpret_track(index, events));

    let mut summary = fold_outcomes(outcomes)?;
    summary.ppq = file.ppq;
    summary.num_tracks = file.num_tracks;

    log::info!(
        "Aggregated {} tracks: {} notes, final tick {}, bpm {:?}",
        summary.num_tracks,
        summary.notes.len(),
        summary.final_tick,
        summary.bpm
    );

    Ok(summary)
}

/// Reduce per-track outcomes, given in track order, into a summary
///
/// `ppq` and `num_tracks` are left at their defaults for the caller to fill.
pub fn fold_outcomes<I>(outcomes: I) -> Result<ScoreSummary>
where
    I: IntoIterator<Item = TrackOutcome>,
{
    outcomes
        .into_iter()
        .try_fold(ScoreSummary::default(), |mut summary, outcome| -> Result<ScoreSummary> {
            if summary.bpm.is_none() {
                if let Some(tempo) = outcome.first_tempo {
                    summary.bpm = Some(tempo_to_bpm(f64::from(tempo))?);
                }
            } else if outcome.first_tempo.is_some() {
                log::trace!("ignoring later tempo on track {}", summary.program_maps.len());
            }

            summary.final_tick = summary.final_tick.max(outcome.end_tick);
            summary.notes.extend(outcome.notes);
            summary.program_maps.push(outcome.programs);
            Ok(summary)
        })
}
