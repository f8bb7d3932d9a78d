//! Scoring rule implementations.
//!
//! One rule per local entry mode; the remote mode maps the predictor's
//! answer with `remote::from_verdict` and falls back to the heuristic.

pub mod heuristic;
pub mod historical;

// Re-export for convenience
pub use heuristic::HeuristicRule;
pub use historical::HistoricalRule;
