use data_loader::DataLoadError;
use thiserror::Error;

/// Failures the service reports to its caller.
///
/// Row problems and predictor outages never show up here; they are
/// recovered inside the service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The dataset could not be loaded; nothing was cached, so asking again may succeed
    #[error("Failed to load movie data: {0}")]
    QueryFailed(#[source] DataLoadError),
}

impl ServiceError {
    /// Whether the caller should offer a retry
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceError::QueryFailed(_) => true,
        }
    }
}
