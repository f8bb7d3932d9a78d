//! Mapping from the external predictor's answer to a `PredictionResult`.

use crate::types::{Outcome, PredictionResult, RemoteVerdict};
use data_loader::MovieRecord;

/// Convert a well-formed remote verdict.
///
/// The projection uses the probability of a hit, so a confident FLOP
/// projects low and a confident HIT projects high.
pub fn from_verdict(movie: &MovieRecord, verdict: &RemoteVerdict) -> PredictionResult {
    let probability = verdict.probability.clamp(0.0, 1.0);
    let hit_probability = match verdict.outcome {
        Outcome::Hit => probability,
        Outcome::Flop => 1.0 - probability,
    };

    PredictionResult {
        is_successful: verdict.outcome == Outcome::Hit,
        confidence_percent: verdict.confidence.clamp(0.0, 100.0).round() as u8,
        factors: vec![
            format!("Model verdict: {}", verdict.outcome.as_str()),
            format!("{} model features evaluated", verdict.features_used.len()),
        ],
        box_office_projection: (movie.budget as f64 * (1.5 + hit_probability * 2.0)).round() as u64,
    }
}
