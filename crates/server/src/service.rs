//! # Prediction Service
//!
//! This module composes the subsystem behind the presentation layer:
//! 1. Load the dataset once (record cache)
//! 2. Build the search index over that snapshot
//! 3. Answer search, genre and popular queries
//! 4. Score a movie according to how it was entered
//! 5. For remote scoring, call the external predictor and fall back to the
//!    local heuristic on any failure
//!
//! The service owns the cache; there is no module-level state.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use data_loader::{MovieRecord, RandomSource, RecordCache, SearchIndex, ThreadRandom};
use ml_client::{HealthStatus, MLClientError, MLPredictorClient, PredictRequest, PredictResponse};
use scoring::{EntryMode, Outcome, PredictionResult, RemoteVerdict, ScoringEngine};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Month sent to the predictor when a movie has none
const FALLBACK_RELEASE_MONTH: u8 = 1;

/// Entry point for everything the presentation layer needs
pub struct PredictionService {
    cache: RecordCache,
    index: OnceLock<Arc<SearchIndex>>,
    engine: ScoringEngine,
    predictor: MLPredictorClient,
}

impl PredictionService {
    /// Create a service from configuration, using the thread RNG
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        Self::with_random(config, Arc::new(ThreadRandom))
    }

    /// Create a service whose placeholder months and scoring jitter come from `random`
    pub fn with_random(config: &ServiceConfig, random: Arc<dyn RandomSource>) -> Result<Self> {
        let predictor = MLPredictorClient::new(config.predictor_url.clone(), config.predictor_timeout)
            .context("Failed to configure prediction service client")?;

        Ok(Self::from_parts(
            RecordCache::with_random(config.dataset.clone(), Arc::clone(&random)),
            ScoringEngine::with_random(random),
            predictor,
        ))
    }

    /// Assemble a service from already-built components
    pub fn from_parts(cache: RecordCache, engine: ScoringEngine, predictor: MLPredictorClient) -> Self {
        Self {
            cache,
            index: OnceLock::new(),
            engine,
            predictor,
        }
    }

    /// Load (or return the already loaded) dataset snapshot
    pub async fn load(&self) -> Result<Arc<Vec<MovieRecord>>, ServiceError> {
        let start = Instant::now();
        let was_loaded = self.cache.is_loaded();

        let records = self.cache.load().await.map_err(|e| {
            warn!("Loading movie data from {} failed: {}", self.cache.source(), e);
            ServiceError::QueryFailed(e)
        })?;

        if !was_loaded {
            info!("Loaded {} movies in {:.2?}", records.len(), start.elapsed());
        }
        Ok(records)
    }

    async fn index(&self) -> Result<Arc<SearchIndex>, ServiceError> {
        if let Some(index) = self.index.get() {
            return Ok(Arc::clone(index));
        }
        let records = self.load().await?;
        let index = self.index.get_or_init(|| {
            let index = SearchIndex::build(records);
            debug!("Built search index over {} genres", index.genre_count());
            Arc::new(index)
        });
        Ok(Arc::clone(index))
    }

    /// Case-insensitive substring search over title, genre and director
    pub async fn search(&self, term: &str) -> Result<Vec<MovieRecord>, ServiceError> {
        let results = self.index().await?.search(term);
        debug!("Search '{}' matched {} movies", term, results.len());
        Ok(results)
    }

    /// Movies of one genre
    pub async fn by_genre(&self, genre: &str) -> Result<Vec<MovieRecord>, ServiceError> {
        Ok(self.index().await?.by_genre(genre))
    }

    /// Best-rated high-budget movies
    pub async fn popular(&self) -> Result<Vec<MovieRecord>, ServiceError> {
        Ok(self.index().await?.popular())
    }

    /// Score a movie according to how it was entered.
    ///
    /// Never fails: a remote failure resolves to the heuristic result.
    pub async fn score(&self, mode: EntryMode, movie: &MovieRecord) -> PredictionResult {
        match mode {
            EntryMode::UserSubmitted | EntryMode::HistoricalSelection => {
                self.engine.score_local(mode, movie)
            }
            EntryMode::RemoteScored => self.score_remote(movie).await,
        }
    }

    async fn score_remote(&self, movie: &MovieRecord) -> PredictionResult {
        let request = build_predict_request(movie);
        match self.predictor.predict(&request).await {
            Ok(response) => {
                info!(
                    "Remote prediction for '{}': {} ({:.1}%)",
                    movie.title, response.prediction, response.confidence
                );
                self.engine.map_remote(movie, &to_verdict(response))
            }
            Err(e) => {
                warn!(
                    "Prediction service unavailable for '{}', using heuristic: {}",
                    movie.title, e
                );
                self.engine.heuristic(movie)
            }
        }
    }

    /// Probe the external predictor
    pub async fn predictor_health(&self) -> Result<HealthStatus, MLClientError> {
        self.predictor.health().await
    }

    pub fn predictor_address(&self) -> &str {
        self.predictor.service_address()
    }
}

/// Convert a record into the predictor's request body
fn build_predict_request(movie: &MovieRecord) -> PredictRequest {
    let actor = |slot: usize| movie.cast.get(slot).cloned().unwrap_or_default();

    PredictRequest {
        movie_title: movie.title.clone(),
        director: movie.director.clone(),
        actor1: actor(0),
        actor2: actor(1),
        actor3: actor(2),
        budget: movie.budget,
        runtime: movie.runtime,
        genres: movie.genre.clone(),
        production_companies: movie.production_companies.clone(),
        original_language: movie.original_language.clone(),
        release_year: movie.release_year,
        release_month: movie.release_month_number().unwrap_or(FALLBACK_RELEASE_MONTH),
        avg_rating: movie.average_rating,
        ratings_count: movie.ratings_count,
    }
}

fn to_verdict(response: PredictResponse) -> RemoteVerdict {
    RemoteVerdict {
        outcome: if response.is_hit() { Outcome::Hit } else { Outcome::Flop },
        probability: response.probability,
        confidence: response.confidence,
        features_used: response.features_used,
    }
}
