//! Output and dispatch types for scoring.

use serde::{Deserialize, Serialize};

/// Verdict for one movie.
///
/// Built fresh per query and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub is_successful: bool,
    /// 0-100
    pub confidence_percent: u8,
    /// Human-readable reasons, never empty
    pub factors: Vec<String>,
    pub box_office_projection: u64,
}

impl PredictionResult {
    /// "HIT" or "FLOP"
    pub fn verdict(&self) -> &'static str {
        if self.is_successful { "HIT" } else { "FLOP" }
    }
}

/// How a movie reached the scorer; each mode has its own rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryMode {
    /// Entered by hand: additive heuristic with jitter
    UserSubmitted,
    /// Picked from the dataset: rating-based rule
    HistoricalSelection,
    /// Sent to the external predictor, heuristic on failure
    RemoteScored,
}

/// Categorical outcome reported by the external predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Flop,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Hit => "HIT",
            Outcome::Flop => "FLOP",
        }
    }
}

/// Well-formed answer from the external predictor
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteVerdict {
    pub outcome: Outcome,
    /// Probability of `outcome`, in [0, 1]
    pub probability: f64,
    /// Confidence in percent
    pub confidence: f64,
    pub features_used: Vec<String>,
}
