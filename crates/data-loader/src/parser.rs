//! Parser for the comma-delimited movie dataset.
//!
//! Format: first line is the header row, every following non-blank line is
//! one movie. Fields are split positionally on ','. There is no quoting or
//! escaping: a title or name containing a comma shifts every later column on
//! that row (known limitation, covered in DESIGN.md).
//!
//! Numeric columns never fail. A token that does not parse falls back to a
//! per-field default and the row is still emitted. Only a row that cannot
//! produce a usable record at all (no title) is skipped.

use crate::error::{DataLoadError, Result};
use crate::random::RandomSource;
use crate::types::*;
use rayon::prelude::*;
use tracing::{debug, warn};

const DELIMITER: char = ',';

const FALLBACK_RELEASE_YEAR: i32 = 2000;
const INGESTED_PRODUCTION_COMPANIES: &str = "Major Studio";
const INGESTED_LANGUAGE: &str = "en";

/// Parse the full text of a dataset into records.
///
/// Lines are converted in parallel; the output keeps input order. Malformed
/// lines are logged and dropped, so the result length is the number of data
/// lines minus the number of malformed ones.
///
/// Placeholder months are drawn from `random` sequentially, one per data
/// line in line order, before the parallel pass. A seeded source therefore
/// yields the same records regardless of the thread count.
pub fn parse_dataset(text: &str, random: &dyn RandomSource) -> Vec<MovieRecord> {
    let mut lines = text.lines().enumerate();

    let headers = match lines.next() {
        Some((_, header_line)) => parse_headers(header_line),
        None => return Vec::new(),
    };

    let data_lines: Vec<(usize, &str, &'static str)> = lines
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| (line_no, line, placeholder_month(random)))
        .collect();

    let records: Vec<MovieRecord> = data_lines
        .par_iter()
        .filter_map(|&(line_no, line, month)| match parse_line(&headers, line, line_no, month) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping line: {}", e);
                None
            }
        })
        .collect();

    debug!(
        "Parsed {} records from {} data lines",
        records.len(),
        data_lines.len()
    );
    records
}

/// The dataset has no release-date column; each row gets a drawn month.
pub fn placeholder_month(random: &dyn RandomSource) -> &'static str {
    MONTHS[random.next_index(MONTHS.len())]
}

/// Split the header line into trimmed column names
pub fn parse_headers(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(|h| h.trim().to_string()).collect()
}

/// Parse a single data line against the header row.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(
    headers: &[String],
    line: &str,
    line_no: usize,
    release_month: &str,
) -> Result<MovieRecord> {
    let row = RawRow::from_tokens(headers, line.split(DELIMITER));
    convert_row(&row, release_month).map_err(|reason| DataLoadError::RowMalformed {
        line: line_no,
        reason,
    })
}

/// Turn a `RawRow` into a `MovieRecord`.
///
/// Fails only when the row has no title; every other field degrades to its
/// fallback. `release_month` is the placeholder month for this row.
pub fn convert_row(
    row: &RawRow,
    release_month: &str,
) -> std::result::Result<MovieRecord, String> {
    let title = row.text("title");
    if title.is_empty() {
        return Err("missing title".to_string());
    }

    let cast = ["actor_1", "actor_2", "actor_3"]
        .iter()
        .map(|column| row.text(column))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    Ok(MovieRecord {
        title: title.to_string(),
        genre: derive_genre(row).to_string(),
        director: row.text("director").to_string(),
        cast,
        budget: coerce_count(row.get("budget")).unwrap_or(0),
        runtime: coerce_count(row.get("runtime"))
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0),
        release_month: release_month.to_string(),
        release_year: coerce_year(row.get("release_year")),
        sequel: false,
        average_rating: coerce_rating(row.get("avg_rating")),
        ratings_count: coerce_count(row.get("ratings")).unwrap_or(0),
        production_companies: INGESTED_PRODUCTION_COMPANIES.to_string(),
        original_language: INGESTED_LANGUAGE.to_string(),
    })
}

/// Pick the primary genre from the indicator columns.
///
/// The column with the strictly largest weight wins, scanning `GENRE_COLUMNS`
/// left to right so ties go to the earlier column. A row with no positive
/// weight gets `DEFAULT_GENRE`.
pub fn derive_genre(row: &RawRow) -> &'static str {
    let mut best = DEFAULT_GENRE;
    let mut best_weight = 0.0;

    for column in GENRE_COLUMNS {
        let weight = coerce_number(row.get(column)).unwrap_or(0.0);
        if weight > best_weight {
            best_weight = weight;
            best = column;
        }
    }
    best
}

/// Parse a finite float, accepting surrounding whitespace
fn coerce_number(token: Option<&str>) -> Option<f64> {
    token
        .and_then(|t| t.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Non-negative whole number; decimals truncate toward zero ("120.7" -> 120)
fn coerce_count(token: Option<&str>) -> Option<u64> {
    coerce_number(token)
        .filter(|v| *v >= 0.0)
        .map(|v| v.trunc() as u64)
}

/// Release year; unparsable or zero falls back to 2000
fn coerce_year(token: Option<&str>) -> i32 {
    coerce_number(token)
        .map(|v| v.trunc())
        .filter(|v| *v != 0.0 && *v >= i32::MIN as f64 && *v <= i32::MAX as f64)
        .map(|v| v as i32)
        .unwrap_or(FALLBACK_RELEASE_YEAR)
}

/// Average rating clamped into [0, 10]; unparsable falls back to 0
fn coerce_rating(token: Option<&str>) -> f64 {
    coerce_number(token).map(|v| v.clamp(0.0, 10.0)).unwrap_or(0.0)
}
