//! The ScoringEngine dispatches a movie to the rule for its entry mode.

use crate::remote;
use crate::rules::{HeuristicRule, HistoricalRule};
use crate::traits::ScoringRule;
use crate::types::{EntryMode, PredictionResult, RemoteVerdict};
use data_loader::{MovieRecord, RandomSource, ThreadRandom};
use std::sync::Arc;
use tracing::debug;

/// Local scoring for all entry modes.
///
/// `RemoteScored` has no local rule of its own: its local stand-in is the
/// heuristic, which is what the caller falls back to when the external
/// predictor fails.
#[derive(Clone)]
pub struct ScoringEngine {
    heuristic: HeuristicRule,
    historical: HistoricalRule,
}

impl ScoringEngine {
    /// Engine with jitter drawn from the thread RNG
    pub fn new() -> Self {
        Self::with_random(Arc::new(ThreadRandom))
    }

    /// Engine with an explicit randomness source (fixed or seeded in tests)
    pub fn with_random(random: Arc<dyn RandomSource>) -> Self {
        Self {
            heuristic: HeuristicRule::new(random),
            historical: HistoricalRule,
        }
    }

    /// The rule that scores `mode` locally
    pub fn rule_for(&self, mode: EntryMode) -> &dyn ScoringRule {
        match mode {
            EntryMode::UserSubmitted | EntryMode::RemoteScored => &self.heuristic,
            EntryMode::HistoricalSelection => &self.historical,
        }
    }

    /// Score without leaving the process
    pub fn score_local(&self, mode: EntryMode, movie: &MovieRecord) -> PredictionResult {
        let rule = self.rule_for(mode);
        let result = rule.score(movie);
        debug!(
            "{} scored '{}' as {} ({}%)",
            rule.name(),
            movie.title,
            result.verdict(),
            result.confidence_percent
        );
        result
    }

    /// Heuristic path (hand-entered movies, and the remote fallback)
    pub fn heuristic(&self, movie: &MovieRecord) -> PredictionResult {
        self.score_local(EntryMode::UserSubmitted, movie)
    }

    /// Rating-based path for dataset records
    pub fn historical(&self, movie: &MovieRecord) -> PredictionResult {
        self.score_local(EntryMode::HistoricalSelection, movie)
    }

    /// Map an answer from the external predictor
    pub fn map_remote(&self, movie: &MovieRecord, verdict: &RemoteVerdict) -> PredictionResult {
        remote::from_verdict(movie, verdict)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
