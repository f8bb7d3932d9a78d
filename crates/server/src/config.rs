//! Settings for composing a `PredictionService`.

use data_loader::DatasetSource;
use std::time::Duration;

pub const DEFAULT_DATASET: &str = "data/final_tmdb_cleaned.csv";
pub const DEFAULT_PREDICTOR_URL: &str = "http://localhost:5000";
pub const DEFAULT_PREDICTOR_TIMEOUT_SECS: u64 = 10;

/// Where the data lives and how to reach the external predictor
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub dataset: DatasetSource,
    pub predictor_url: String,
    pub predictor_timeout: Duration,
}

impl ServiceConfig {
    pub fn new(dataset: &str, predictor_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            dataset: DatasetSource::parse(dataset),
            predictor_url: predictor_url.into(),
            predictor_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET, DEFAULT_PREDICTOR_URL, DEFAULT_PREDICTOR_TIMEOUT_SECS)
    }
}
