//! Where the dataset text comes from.
//!
//! A dataset is either a local file or an `http(s)://` document. Both are
//! fetched whole; nothing is streamed or retried.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::random::RandomSource;
use crate::types::MovieRecord;
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info};

/// Location of the dataset document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// Interpret a user-supplied location.
    ///
    /// Example: "https://host/movies.csv" -> Url, "data/movies.csv" -> File
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            DatasetSource::Url(location.to_string())
        } else {
            DatasetSource::File(PathBuf::from(location))
        }
    }

    /// Fetch the raw document text.
    ///
    /// Missing files, transport errors and non-success statuses all come back
    /// as `SourceUnavailable`.
    pub async fn fetch(&self) -> Result<String> {
        info!("Fetching dataset from {}", self);
        let bytes = match self {
            DatasetSource::File(path) => tokio::fs::read(path)
                .await
                .map_err(|e| DataLoadError::unavailable(self.to_string(), e))?,
            DatasetSource::Url(url) => fetch_url(url).await?,
        };
        // The dataset is expected to be UTF-8; stray bytes are replaced rather than fatal
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

async fn fetch_url(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| DataLoadError::unavailable(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DataLoadError::unavailable(url, format!("HTTP status {}", status)));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| DataLoadError::unavailable(url, e))?;
    Ok(body.to_vec())
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Fetch and parse a dataset, surfacing fetch failures
pub async fn ingest(source: &DatasetSource, random: &dyn RandomSource) -> Result<Vec<MovieRecord>> {
    let text = source.fetch().await?;
    let records = parser::parse_dataset(&text, random);
    info!("Ingested {} records from {}", records.len(), source);
    Ok(records)
}

/// Fetch and parse a dataset; an unreachable source yields no records.
///
/// Use `RecordCache::load` instead when the caller needs to tell "failed"
/// apart from "empty".
pub async fn ingest_or_empty(source: &DatasetSource, random: &dyn RandomSource) -> Vec<MovieRecord> {
    match ingest(source, random).await {
        Ok(records) => records,
        Err(e) => {
            error!("Error loading movie data: {}", e);
            Vec::new()
        }
    }
}
