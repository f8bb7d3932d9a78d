//! Core domain types for the movie dataset.
//!
//! `RawRow` is the untyped view of one CSV line; `MovieRecord` is the
//! validated record everything downstream works with.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Fixed vocabularies
// =============================================================================

/// The twenty one-hot genre indicator columns, in scan order.
///
/// Order matters: when two columns carry the same weight, the one listed
/// first wins.
pub const GENRE_COLUMNS: [&str; 20] = [
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Foreign",
    "History",
    "Horror",
    "Music",
    "Mystery",
    "Romance",
    "Science Fiction",
    "TV Movie",
    "Thriller",
    "War",
    "Western",
];

/// Genre assigned when no indicator column carries a positive weight
pub const DEFAULT_GENRE: &str = "Drama";

/// Month names accepted for `MovieRecord::release_month`
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Map a month name to its 1-based number.
///
/// Example: "March" -> Some(3), "" -> None
pub fn month_number(name: &str) -> Option<u8> {
    MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name.trim()))
        .map(|idx| idx as u8 + 1)
}

// =============================================================================
// MovieRecord
// =============================================================================

/// A single movie, either ingested from the dataset or entered by a user.
///
/// Records are immutable once built. The parser and `MovieDraft` are the
/// only two constructors that uphold the invariants:
/// - `title` and `genre` are non-empty
/// - `average_rating` lies in [0, 10]
/// - `cast` entries are non-empty and trimmed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    /// Single primary genre derived from the indicator columns
    pub genre: String,
    pub director: String,
    pub cast: Vec<String>,
    /// Production budget in currency units
    pub budget: u64,
    /// Runtime in minutes
    pub runtime: u32,
    /// One of `MONTHS`, or empty when unknown
    pub release_month: String,
    pub release_year: i32,
    pub sequel: bool,
    pub average_rating: f64,
    pub ratings_count: u64,
    pub production_companies: String,
    pub original_language: String,
}

impl MovieRecord {
    /// Release month as 1-12, if the record has one
    pub fn release_month_number(&self) -> Option<u8> {
        month_number(&self.release_month)
    }
}

// =============================================================================
// RawRow
// =============================================================================

/// One data line zipped against the header row.
///
/// Values are kept as the raw (trimmed) tokens; all coercion happens in the
/// parser so that every fallback rule lives in one place.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Zip header names with positional tokens.
    ///
    /// Extra tokens beyond the header count are dropped; missing tokens leave
    /// the column absent.
    pub fn from_tokens<'a>(
        headers: &[String],
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let fields = headers
            .iter()
            .zip(tokens)
            .map(|(header, token)| (header.clone(), token.trim().to_string()))
            .collect();
        Self { fields }
    }

    /// Raw token for a column, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Raw token for a column, or "" when absent
    pub fn text(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
