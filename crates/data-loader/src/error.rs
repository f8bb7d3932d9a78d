//! Error types for the data-loader crate.
//!
//! Row-level problems are recovered inside the parser; everything that
//! reaches a caller of `RecordCache::load` is a `SourceUnavailable`.

use thiserror::Error;

/// Errors that can occur while fetching and parsing the movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The dataset document could not be fetched (missing file, bad status, transport error)
    #[error("Dataset source unavailable ({source_desc}): {reason}")]
    SourceUnavailable { source_desc: String, reason: String },

    /// A single data line could not be turned into a record
    ///
    /// The parser logs and skips these; they never abort ingestion.
    #[error("Malformed row at line {line}: {reason}")]
    RowMalformed { line: usize, reason: String },
}

impl DataLoadError {
    pub(crate) fn unavailable(source_desc: impl Into<String>, reason: impl ToString) -> Self {
        DataLoadError::SourceUnavailable {
            source_desc: source_desc.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
