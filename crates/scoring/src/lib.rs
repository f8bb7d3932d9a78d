//! Success scoring for movies.
//!
//! This crate provides:
//! - ScoringRule trait and the two local rules (heuristic, historical)
//! - ScoringEngine for dispatching by entry mode
//! - Mapping of external predictor verdicts into the same result shape
//!
//! ## Architecture
//! Every path ends in a `PredictionResult`:
//! 1. `UserSubmitted` movies go through the additive heuristic (with jitter)
//! 2. `HistoricalSelection` movies are judged on their audience rating
//! 3. `RemoteScored` movies are sent to the external predictor by the
//!    caller; on failure the caller uses the heuristic instead
//!
//! ## Example Usage
//! ```ignore
//! use scoring::{EntryMode, ScoringEngine};
//!
//! let engine = ScoringEngine::new();
//! let result = engine.score_local(EntryMode::HistoricalSelection, &movie);
//! println!("{} at {}%", result.verdict(), result.confidence_percent);
//! ```

pub mod traits;
pub mod types;
pub mod rules;
pub mod remote;
pub mod format;
pub mod engine;

// Re-export main types
pub use traits::ScoringRule;
pub use types::{EntryMode, Outcome, PredictionResult, RemoteVerdict};
pub use rules::{HeuristicRule, HistoricalRule};
pub use format::format_budget;
pub use engine::ScoringEngine;
