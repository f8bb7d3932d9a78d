//! Server crate for the movie success predictor.
//!
//! This crate contains the service that composes dataset loading, search,
//! local scoring and the external predictor behind one interface.

pub mod config;
pub mod error;
pub mod service;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use service::PredictionService;
