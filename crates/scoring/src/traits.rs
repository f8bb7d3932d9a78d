//! Core trait for scoring rules.
//!
//! Each entry mode maps to one rule. Rules are pure apart from whatever
//! randomness they were handed at construction.

use crate::types::PredictionResult;
use data_loader::MovieRecord;

/// A self-contained way of turning a movie into a prediction.
///
/// ## Design Note
/// - `Send + Sync` allows rules to be shared across async tasks
/// - Rules borrow the movie; the result is always a fresh value
pub trait ScoringRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Score a single movie.
    ///
    /// Infallible: every input yields a usable result.
    fn score(&self, movie: &MovieRecord) -> PredictionResult;
}
