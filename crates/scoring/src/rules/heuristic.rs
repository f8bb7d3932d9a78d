//! Additive heuristic for hand-entered movies.
//!
//! Starts at 0.5 and adds or subtracts fixed amounts for genre, budget,
//! sequel status and runtime, then adds a small random jitter.

use crate::traits::ScoringRule;
use crate::types::PredictionResult;
use data_loader::{MovieRecord, RandomSource};
use std::sync::Arc;

const BASE_SCORE: f64 = 0.5;
const POPULAR_GENRES: [&str; 3] = ["Action", "Adventure", "Comedy"];
const HIGH_BUDGET: u64 = 100_000_000;
const LOW_BUDGET: u64 = 10_000_000;
const OPTIMAL_RUNTIME: std::ops::RangeInclusive<u32> = 90..=150;
/// Jitter spans [-JITTER_SPAN / 2, +JITTER_SPAN / 2]
const JITTER_SPAN: f64 = 0.3;
const MIN_CONFIDENCE: f64 = 0.1;
const MAX_CONFIDENCE: f64 = 0.95;
const SUCCESS_THRESHOLD: f64 = 0.6;

pub const NO_FACTORS: &str = "Standard market conditions";

/// Explainable rule-based estimate with one random term.
///
/// ## Algorithm
/// 1. Popular genre (Action/Adventure/Comedy): +0.2
/// 2. Budget over 100M: +0.15, under 10M: -0.1
/// 3. Sequel: +0.2
/// 4. Runtime 90-150 minutes: +0.1
/// 5. Jitter `(u - 0.5) * 0.3` with `u` from the random source
/// 6. Clamp to [0.1, 0.95]; success above 0.6
#[derive(Clone)]
pub struct HeuristicRule {
    random: Arc<dyn RandomSource>,
}

impl HeuristicRule {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Score with an explicit jitter sample instead of drawing one.
    ///
    /// `unit` is the uniform sample in [0, 1]; 0.5 means no jitter.
    pub fn score_with_sample(&self, movie: &MovieRecord, unit: f64) -> PredictionResult {
        let mut factors = Vec::new();
        let mut score = BASE_SCORE;

        if POPULAR_GENRES.contains(&movie.genre.as_str()) {
            score += 0.2;
            factors.push("Popular genre".to_string());
        }

        if movie.budget > HIGH_BUDGET {
            score += 0.15;
            factors.push("High production budget".to_string());
        } else if movie.budget < LOW_BUDGET {
            score -= 0.1;
            factors.push("Low budget risk".to_string());
        }

        if movie.sequel {
            score += 0.2;
            factors.push("Sequel advantage".to_string());
        }

        if OPTIMAL_RUNTIME.contains(&movie.runtime) {
            score += 0.1;
            factors.push("Optimal runtime".to_string());
        }

        score += (unit - 0.5) * JITTER_SPAN;

        let confidence = score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        if factors.is_empty() {
            factors.push(NO_FACTORS.to_string());
        }

        PredictionResult {
            is_successful: confidence > SUCCESS_THRESHOLD,
            confidence_percent: (confidence * 100.0).round() as u8,
            factors,
            box_office_projection: (movie.budget as f64 * (1.5 + confidence * 2.0)).round() as u64,
        }
    }
}

impl ScoringRule for HeuristicRule {
    fn name(&self) -> &str {
        "HeuristicRule"
    }

    fn score(&self, movie: &MovieRecord) -> PredictionResult {
        self.score_with_sample(movie, self.random.next_unit())
    }
}
