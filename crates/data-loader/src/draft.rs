//! Builder for records entered by hand rather than ingested.
//!
//! Mirrors the entry form: title, genre and director are required, budget
//! must be positive, cast members are trimmed and de-duplicated.

use crate::types::{month_number, MovieRecord, MONTHS};
use thiserror::Error;

/// Why a draft could not become a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Budget must be greater than zero")]
    NonPositiveBudget,

    #[error("Unknown release month: {0}")]
    UnknownMonth(String),

    #[error("Average rating {0} is outside 0-10")]
    RatingOutOfRange(f64),
}

/// Mutable form state for a new movie
#[derive(Debug, Clone)]
pub struct MovieDraft {
    title: String,
    genre: String,
    director: String,
    cast: Vec<String>,
    budget: u64,
    runtime: u32,
    release_month: String,
    release_year: i32,
    sequel: bool,
    average_rating: f64,
    ratings_count: u64,
    production_companies: String,
    original_language: String,
}

impl MovieDraft {
    /// Empty draft with the form's defaults
    pub fn new(release_year: i32) -> Self {
        Self {
            title: String::new(),
            genre: String::new(),
            director: String::new(),
            cast: Vec::new(),
            budget: 0,
            runtime: 0,
            release_month: String::new(),
            release_year,
            sequel: false,
            average_rating: 7.0,
            ratings_count: 1000,
            production_companies: "Independent".to_string(),
            original_language: "en".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    /// Add a cast member; blank names and repeats are ignored
    pub fn cast_member(mut self, name: impl AsRef<str>) -> Self {
        self.add_cast_member(name);
        self
    }

    /// In-place variant of `cast_member`; returns whether the name was added
    pub fn add_cast_member(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref().trim();
        if name.is_empty() || self.cast.iter().any(|c| c == name) {
            return false;
        }
        self.cast.push(name.to_string());
        true
    }

    /// Remove the cast member at `index`, if there is one
    pub fn remove_cast_member(&mut self, index: usize) -> Option<String> {
        (index < self.cast.len()).then(|| self.cast.remove(index))
    }

    pub fn budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    pub fn runtime(mut self, runtime: u32) -> Self {
        self.runtime = runtime;
        self
    }

    pub fn release_month(mut self, month: impl Into<String>) -> Self {
        self.release_month = month.into();
        self
    }

    pub fn release_year(mut self, year: i32) -> Self {
        self.release_year = year;
        self
    }

    pub fn sequel(mut self, sequel: bool) -> Self {
        self.sequel = sequel;
        self
    }

    pub fn average_rating(mut self, rating: f64) -> Self {
        self.average_rating = rating;
        self
    }

    pub fn ratings_count(mut self, count: u64) -> Self {
        self.ratings_count = count;
        self
    }

    pub fn production_companies(mut self, companies: impl Into<String>) -> Self {
        self.production_companies = companies.into();
        self
    }

    pub fn original_language(mut self, language: impl Into<String>) -> Self {
        self.original_language = language.into();
        self
    }

    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    /// Validate and produce the record
    pub fn build(self) -> Result<MovieRecord, DraftError> {
        let title = required("title", &self.title)?;
        let genre = required("genre", &self.genre)?;
        let director = required("director", &self.director)?;

        if self.budget == 0 {
            return Err(DraftError::NonPositiveBudget);
        }

        let release_month = match self.release_month.trim() {
            "" => String::new(),
            month => {
                let number = month_number(month)
                    .ok_or_else(|| DraftError::UnknownMonth(month.to_string()))?;
                MONTHS[number as usize - 1].to_string()
            }
        };

        if !(0.0..=10.0).contains(&self.average_rating) {
            return Err(DraftError::RatingOutOfRange(self.average_rating));
        }

        Ok(MovieRecord {
            title,
            genre,
            director,
            cast: self.cast,
            budget: self.budget,
            runtime: self.runtime,
            release_month,
            release_year: self.release_year,
            sequel: self.sequel,
            average_rating: self.average_rating,
            ratings_count: self.ratings_count,
            production_companies: self.production_companies.trim().to_string(),
            original_language: self.original_language.trim().to_string(),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        Err(DraftError::MissingField(field))
    } else {
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> MovieDraft {
        MovieDraft::new(2024)
            .title("Heat 2")
            .genre("Crime")
            .director("Michael Mann")
            .budget(120_000_000)
    }

    #[test]
    fn test_build_applies_form_defaults() {
        let record = valid_draft().build().unwrap();

        assert_eq!(record.title, "Heat 2");
        assert_eq!(record.production_companies, "Independent");
        assert_eq!(record.original_language, "en");
        assert_eq!(record.average_rating, 7.0);
        assert_eq!(record.ratings_count, 1000);
        assert_eq!(record.release_year, 2024);
        assert_eq!(record.release_month, "");
        assert!(!record.sequel);
    }

    #[test]
    fn test_cast_is_trimmed_and_deduplicated() {
        let mut draft = valid_draft()
            .cast_member(" Adam Driver ")
            .cast_member("Adam Driver")
            .cast_member("   ")
            .cast_member("Austin Butler");

        assert_eq!(draft.cast(), ["Adam Driver", "Austin Butler"]);
        assert!(!draft.add_cast_member("Austin Butler"));
        assert_eq!(draft.remove_cast_member(0).as_deref(), Some("Adam Driver"));
        assert_eq!(draft.remove_cast_member(5), None);

        let record = draft.build().unwrap();
        assert_eq!(record.cast, vec!["Austin Butler"]);
    }

    #[test]
    fn test_required_fields() {
        let err = valid_draft().title("  ").build().unwrap_err();
        assert_eq!(err, DraftError::MissingField("title"));

        let err = valid_draft().genre("").build().unwrap_err();
        assert_eq!(err, DraftError::MissingField("genre"));

        let err = valid_draft().director("").build().unwrap_err();
        assert_eq!(err, DraftError::MissingField("director"));

        let err = valid_draft().budget(0).build().unwrap_err();
        assert_eq!(err, DraftError::NonPositiveBudget);
    }

    #[test]
    fn test_release_month_is_normalized() {
        let record = valid_draft().release_month("july").build().unwrap();
        assert_eq!(record.release_month, "July");

        let err = valid_draft().release_month("Juvember").build().unwrap_err();
        assert_eq!(err, DraftError::UnknownMonth("Juvember".to_string()));
    }

    #[test]
    fn test_rating_range() {
        assert!(valid_draft().average_rating(10.0).build().is_ok());
        assert_eq!(
            valid_draft().average_rating(10.5).build().unwrap_err(),
            DraftError::RatingOutOfRange(10.5)
        );
    }
}
