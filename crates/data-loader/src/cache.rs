//! Process-lifetime record cache.
//!
//! The first successful `load` fetches and parses the dataset and memoizes
//! the result; later calls return the same snapshot. A failed fetch is
//! returned to the caller and nothing is cached, so the next call fetches
//! again. There is no invalidation or refresh.
//!
//! Concurrent first callers are not coordinated: each may fetch, and the
//! first one to finish fills the slot. The others get that snapshot back.

use crate::error::Result;
use crate::random::{RandomSource, ThreadRandom};
use crate::source::{self, DatasetSource};
use crate::types::MovieRecord;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Memoized, read-only snapshot of the dataset
pub struct RecordCache {
    source: DatasetSource,
    random: Arc<dyn RandomSource>,
    records: OnceLock<Arc<Vec<MovieRecord>>>,
}

impl RecordCache {
    /// Cache over `source`, drawing placeholder months from the thread RNG
    pub fn new(source: DatasetSource) -> Self {
        Self::with_random(source, Arc::new(ThreadRandom))
    }

    pub fn with_random(source: DatasetSource, random: Arc<dyn RandomSource>) -> Self {
        Self {
            source,
            random,
            records: OnceLock::new(),
        }
    }

    /// Cache that is already populated; no fetch will ever happen
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        let cache = Self::new(DatasetSource::File(Default::default()));
        let _ = cache.records.set(Arc::new(records));
        cache
    }

    /// Return the snapshot, fetching and parsing on first use.
    ///
    /// # Returns
    /// * `Ok(records)` - the memoized snapshot (possibly empty)
    /// * `Err(SourceUnavailable)` - the fetch failed; nothing was cached
    pub async fn load(&self) -> Result<Arc<Vec<MovieRecord>>> {
        if let Some(records) = self.records.get() {
            return Ok(Arc::clone(records));
        }

        let records = source::ingest(&self.source, self.random.as_ref()).await?;
        let records = self.records.get_or_init(|| Arc::new(records));
        debug!("Record cache populated with {} records", records.len());
        Ok(Arc::clone(records))
    }

    /// The snapshot if a previous `load` succeeded
    pub fn get(&self) -> Option<Arc<Vec<MovieRecord>>> {
        self.records.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.records.get().is_some()
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataLoadError;
    use crate::random::FixedRandom;
    use std::io::Write;

    fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_is_memoized() {
        let file = write_dataset("title,budget\nHeat,60000000\nAlien,11000000\n");
        let cache = RecordCache::with_random(
            DatasetSource::File(file.path().to_path_buf()),
            Arc::new(FixedRandom(0.0)),
        );

        assert!(!cache.is_loaded());
        let first = cache.load().await.unwrap();
        assert_eq!(first.len(), 2);

        // Removing the file proves the second load does not re-read it
        drop(file);
        let second = cache.load().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let cache = RecordCache::new(DatasetSource::File("/no/such/movies.csv".into()));

        let err = cache.load().await.unwrap_err();
        assert!(matches!(err, DataLoadError::SourceUnavailable { .. }));
        assert!(cache.get().is_none());
        assert!(!cache.is_loaded());
    }

    #[tokio::test]
    async fn test_empty_dataset_is_a_successful_load() {
        let file = write_dataset("title,budget\n");
        let cache = RecordCache::new(DatasetSource::File(file.path().to_path_buf()));

        let records = cache.load().await.unwrap();
        assert!(records.is_empty());
        assert!(cache.is_loaded());
    }

    #[test]
    fn test_from_records_is_preloaded() {
        let cache = RecordCache::from_records(Vec::new());
        assert!(cache.is_loaded());
        assert_eq!(cache.get().map(|r| r.len()), Some(0));
    }
}
