//! Rating-based rule for movies picked from the dataset.
//!
//! Historical records already carry an audience rating, so the verdict comes
//! straight from it. Deterministic.

use crate::format::format_budget;
use crate::traits::ScoringRule;
use crate::types::PredictionResult;
use data_loader::MovieRecord;

const SUCCESS_RATING: f64 = 6.5;
const MIN_CONFIDENCE_PERCENT: f64 = 30.0;
const MAX_CONFIDENCE_PERCENT: f64 = 95.0;
const BOX_OFFICE_MULTIPLIER: u64 = 2;

/// Success when the average rating is above 6.5.
///
/// Confidence is the rating scaled to percent and held within 30-95;
/// the projection is twice the budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct HistoricalRule;

impl ScoringRule for HistoricalRule {
    fn name(&self) -> &str {
        "HistoricalRule"
    }

    fn score(&self, movie: &MovieRecord) -> PredictionResult {
        let confidence = (movie.average_rating * 10.0)
            .clamp(MIN_CONFIDENCE_PERCENT, MAX_CONFIDENCE_PERCENT)
            .round();

        let director = if movie.director.is_empty() {
            "Unknown"
        } else {
            movie.director.as_str()
        };

        PredictionResult {
            is_successful: movie.average_rating > SUCCESS_RATING,
            confidence_percent: confidence as u8,
            factors: vec![
                format!("Average rating: {:.1}/10", movie.average_rating),
                format!("Budget: {}", format_budget(movie.budget)),
                format!("Genre: {}", movie.genre),
                format!("Director: {}", director),
                format!("Release year: {}", movie.release_year),
            ],
            box_office_projection: movie.budget.saturating_mul(BOX_OFFICE_MULTIPLIER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(rating: f64, budget: u64) -> MovieRecord {
        MovieRecord {
            title: "Heat".to_string(),
            genre: "Crime".to_string(),
            director: "Michael Mann".to_string(),
            cast: vec!["Al Pacino".to_string()],
            budget,
            runtime: 170,
            release_month: "December".to_string(),
            release_year: 1995,
            sequel: false,
            average_rating: rating,
            ratings_count: 5000,
            production_companies: "Major Studio".to_string(),
            original_language: "en".to_string(),
        }
    }

    #[test]
    fn test_good_rating_is_a_hit() {
        let result = HistoricalRule.score(&movie(7.5, 20_000_000));

        assert!(result.is_successful);
        assert_eq!(result.confidence_percent, 75);
        assert_eq!(result.box_office_projection, 40_000_000);
        assert_eq!(
            result.factors,
            vec![
                "Average rating: 7.5/10",
                "Budget: $20.0M",
                "Genre: Crime",
                "Director: Michael Mann",
                "Release year: 1995",
            ]
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let result = HistoricalRule.score(&movie(6.5, 1_000_000));
        assert!(!result.is_successful);
        assert_eq!(result.confidence_percent, 65);
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(HistoricalRule.score(&movie(1.0, 0)).confidence_percent, 30);
        assert_eq!(HistoricalRule.score(&movie(0.0, 0)).confidence_percent, 30);
        assert_eq!(HistoricalRule.score(&movie(9.9, 0)).confidence_percent, 95);
    }

    #[test]
    fn test_missing_director_is_labelled() {
        let mut m = movie(5.0, 500_000);
        m.director.clear();
        let result = HistoricalRule.score(&m);
        assert!(result.factors.contains(&"Director: Unknown".to_string()));
        assert!(result.factors.contains(&"Budget: $500K".to_string()));
    }
}
