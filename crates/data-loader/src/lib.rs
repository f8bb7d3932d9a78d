//! # Data Loader Crate
//!
//! This crate turns the flat movie dataset into validated records and answers
//! bounded queries over them.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord`, `RawRow` and the fixed genre/month vocabularies
//! - **parser**: Parse the comma-delimited dataset into records
//! - **source**: Fetch the dataset from a file or URL
//! - **cache**: Load-once, process-lifetime snapshot of the records
//! - **index**: Substring search, genre listing and popular listing
//! - **draft**: Builder for hand-entered records
//! - **random**: Injectable randomness for placeholder months and jitter
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DatasetSource, RecordCache, SearchIndex};
//!
//! let cache = RecordCache::new(DatasetSource::parse("data/final_tmdb_cleaned.csv"));
//! let records = cache.load().await?;
//!
//! let index = SearchIndex::build(records);
//! for movie in index.search("nolan") {
//!     println!("{} ({})", movie.title, movie.release_year);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod source;
pub mod cache;
pub mod index;
pub mod draft;
pub mod random;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{month_number, MovieRecord, RawRow, DEFAULT_GENRE, GENRE_COLUMNS, MONTHS};
pub use source::{ingest, ingest_or_empty, DatasetSource};
pub use cache::RecordCache;
pub use index::{SearchIndex, GENRE_LIMIT, POPULAR_LIMIT, SEARCH_LIMIT};
pub use draft::{DraftError, MovieDraft};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
