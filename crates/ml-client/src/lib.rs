//! Client for the external movie success predictor.
//!
//! The predictor is a separate HTTP service holding a trained model. This
//! crate handles:
//! - Building the JSON request body from movie attributes
//! - Posting to `/predict` and validating the answer
//! - Probing `/health`
//!
//! Any non-success status, transport error or malformed body is reported as
//! an `MLClientError`. Callers decide what to fall back to; nothing here
//! retries.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur when interacting with the predictor
#[derive(Error, Debug)]
pub enum MLClientError {
    #[error("Failed to reach prediction service: {0}")]
    ConnectionError(String),

    #[error("Prediction service returned {status}: {body}")]
    PredictionError { status: u16, body: String },

    #[error("Invalid response from prediction service: {0}")]
    InvalidResponse(String),
}

/// Movie attributes in the shape the predictor expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub movie_title: String,
    pub director: String,
    pub actor1: String,
    pub actor2: String,
    pub actor3: String,
    pub budget: u64,
    pub runtime: u32,
    /// Genre label(s), comma separated
    pub genres: String,
    pub production_companies: String,
    pub original_language: String,
    pub release_year: i32,
    /// 1-12
    pub release_month: u8,
    pub avg_rating: f64,
    pub ratings_count: u64,
}

/// Body of a successful `/predict` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub movie_title: Option<String>,
    /// "HIT" or "FLOP"
    pub prediction: String,
    /// Probability of the predicted class, 0-1
    pub probability: f64,
    /// Same probability in percent
    pub confidence: f64,
    #[serde(default)]
    pub features_used: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl PredictResponse {
    pub fn is_hit(&self) -> bool {
        self.prediction == "HIT"
    }

    /// Reject bodies that parsed but make no sense
    fn validate(&self) -> Result<(), MLClientError> {
        if self.prediction != "HIT" && self.prediction != "FLOP" {
            return Err(MLClientError::InvalidResponse(format!(
                "unknown prediction '{}'",
                self.prediction
            )));
        }
        if !self.probability.is_finite() || !(0.0..=1.0).contains(&self.probability) {
            return Err(MLClientError::InvalidResponse(format!(
                "probability {} outside 0-1",
                self.probability
            )));
        }
        if !self.confidence.is_finite() {
            return Err(MLClientError::InvalidResponse("confidence is not a number".into()));
        }
        Ok(())
    }
}

/// Body of `/health`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Client for the prediction service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MLPredictorClient {
    client: reqwest::Client,
    service_addr: String,
}

impl MLPredictorClient {
    /// Create a client for the service at `addr` (e.g. "http://localhost:5000").
    ///
    /// No connection is made until the first request.
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Result<Self, MLClientError> {
        let addr = addr.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MLClientError::ConnectionError(e.to_string()))?;

        info!("Prediction service configured at {}", addr);
        Ok(Self {
            client,
            service_addr: addr.trim_end_matches('/').to_string(),
        })
    }

    /// Ask the service for a verdict on one movie.
    ///
    /// # Returns
    /// The validated response body
    ///
    /// Error handling:
    /// - transport errors -> `ConnectionError`
    /// - non-2xx status -> `PredictionError`
    /// - unparsable or out-of-range body -> `InvalidResponse`
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, MLClientError> {
        let url = format!("{}/predict", self.service_addr);
        debug!("Requesting prediction for '{}' from {}", request.movie_title, url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!("Transport error while requesting prediction: {}", e);
                MLClientError::ConnectionError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Prediction service returned {}: {}", status, body);
            return Err(MLClientError::PredictionError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MLClientError::ConnectionError(e.to_string()))?;
        let prediction: PredictResponse = serde_json::from_str(&body)
            .map_err(|e| MLClientError::InvalidResponse(e.to_string()))?;
        prediction.validate()?;

        debug!(
            "Prediction for '{}': {} (probability {:.3})",
            request.movie_title, prediction.prediction, prediction.probability
        );
        Ok(prediction)
    }

    /// Check whether the service is up and has a model loaded
    pub async fn health(&self) -> Result<HealthStatus, MLClientError> {
        let url = format!("{}/health", self.service_addr);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MLClientError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MLClientError::PredictionError {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| MLClientError::InvalidResponse(e.to_string()))
    }

    /// Get the address of the service this client talks to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }
}
