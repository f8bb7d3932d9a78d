//! Search index over a record snapshot.
//!
//! Built once per snapshot: lowercased search keys for substring queries and
//! a genre index for exact genre listings. All queries return records in
//! snapshot order unless stated otherwise, and all are bounded.

use crate::types::MovieRecord;
use std::collections::HashMap;
use std::sync::Arc;

/// Maximum records returned by `search`
pub const SEARCH_LIMIT: usize = 50;
/// Maximum records returned by `by_genre`
pub const GENRE_LIMIT: usize = 20;
/// Maximum records returned by `popular`
pub const POPULAR_LIMIT: usize = 20;
/// Budget a movie must exceed to show up in `popular`
pub const POPULAR_MIN_BUDGET: u64 = 100_000_000;

/// Lowercased copies of the searchable fields of one record
#[derive(Debug)]
struct SearchKey {
    title: String,
    genre: String,
    director: String,
}

impl SearchKey {
    fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle) || self.genre.contains(needle) || self.director.contains(needle)
    }
}

/// Read-only query structure over one cache snapshot
#[derive(Debug)]
pub struct SearchIndex {
    records: Arc<Vec<MovieRecord>>,
    keys: Vec<SearchKey>,
    /// Lowercased genre -> positions in `records`, in snapshot order
    genre_index: HashMap<String, Vec<usize>>,
}

impl SearchIndex {
    /// Build the index for a snapshot
    pub fn build(records: Arc<Vec<MovieRecord>>) -> Self {
        let mut genre_index: HashMap<String, Vec<usize>> = HashMap::new();
        let keys = records
            .iter()
            .enumerate()
            .map(|(pos, record)| {
                let key = SearchKey {
                    title: record.title.to_lowercase(),
                    genre: record.genre.to_lowercase(),
                    director: record.director.to_lowercase(),
                };
                genre_index.entry(key.genre.clone()).or_default().push(pos);
                key
            })
            .collect();

        Self {
            records,
            keys,
            genre_index,
        }
    }

    /// Case-insensitive substring search over title, genre and director.
    ///
    /// A blank term returns the first `SEARCH_LIMIT` records. Otherwise the
    /// first `SEARCH_LIMIT` matches, in snapshot order. Non-blank terms are
    /// matched as given, surrounding whitespace included.
    pub fn search(&self, term: &str) -> Vec<MovieRecord> {
        if term.trim().is_empty() {
            return self.records.iter().take(SEARCH_LIMIT).cloned().collect();
        }

        let needle = term.to_lowercase();
        self.keys
            .iter()
            .zip(self.records.iter())
            .filter(|(key, _)| key.matches(&needle))
            .map(|(_, record)| record.clone())
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// Records whose genre equals `genre` (case-insensitive), first `GENRE_LIMIT`
    pub fn by_genre(&self, genre: &str) -> Vec<MovieRecord> {
        self.genre_index
            .get(&genre.trim().to_lowercase())
            .map(|positions| {
                positions
                    .iter()
                    .take(GENRE_LIMIT)
                    .map(|&pos| self.records[pos].clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// High-budget records, best rated first.
    ///
    /// Equal ratings keep snapshot order.
    pub fn popular(&self) -> Vec<MovieRecord> {
        let mut popular: Vec<&MovieRecord> = self
            .records
            .iter()
            .filter(|r| r.budget > POPULAR_MIN_BUDGET)
            .collect();

        popular.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        popular.into_iter().take(POPULAR_LIMIT).cloned().collect()
    }

    /// Number of genres that have at least one record
    pub fn genre_count(&self) -> usize {
        self.genre_index.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genre: &str, director: &str, budget: u64, rating: f64) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            director: director.to_string(),
            cast: vec![],
            budget,
            runtime: 120,
            release_month: "May".to_string(),
            release_year: 2000,
            sequel: false,
            average_rating: rating,
            ratings_count: 100,
            production_companies: "Major Studio".to_string(),
            original_language: "en".to_string(),
        }
    }

    fn create_test_index() -> SearchIndex {
        SearchIndex::build(Arc::new(vec![
            movie("Heat", "Crime", "Michael Mann", 60_000_000, 7.9),
            movie("Avatar", "Action", "James Cameron", 237_000_000, 7.2),
            movie("Titanic", "Drama", "James Cameron", 200_000_000, 7.5),
            movie("Collateral", "Crime", "Michael Mann", 65_000_000, 7.5),
            movie("Dune", "Science Fiction", "Denis Villeneuve", 165_000_000, 7.5),
        ]))
    }

    fn titles(records: &[MovieRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_blank_search_returns_prefix() {
        let index = create_test_index();
        assert_eq!(index.search("").len(), 5);
        assert_eq!(titles(&index.search("   ")), titles(&index.search("")));
    }

    #[test]
    fn test_search_matches_any_field_case_insensitive() {
        let index = create_test_index();

        assert_eq!(titles(&index.search("CAMERON")), vec!["Avatar", "Titanic"]);
        assert_eq!(titles(&index.search("crime")), vec!["Heat", "Collateral"]);
        assert_eq!(titles(&index.search("tan")), vec!["Titanic"]);
        assert!(index.search("zzz").is_empty());
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let index = create_test_index();

        // "heat " appears in no title, genre or director
        assert!(index.search("Heat ").is_empty());
        assert_eq!(titles(&index.search("Heat")), vec!["Heat"]);
        assert_eq!(titles(&index.search("l mann")), vec!["Heat", "Collateral"]);
        for hit in index.search("james ") {
            assert!(hit.director.to_lowercase().contains("james "));
        }
    }

    #[test]
    fn test_search_caps_results() {
        let records = (0..120)
            .map(|i| movie(&format!("Movie {}", i), "Drama", "Someone", 1, 5.0))
            .collect();
        let index = SearchIndex::build(Arc::new(records));

        let blank = index.search("");
        assert_eq!(blank.len(), SEARCH_LIMIT);
        assert_eq!(blank[0].title, "Movie 0");
        assert_eq!(blank[49].title, "Movie 49");

        let hits = index.search("movie 1");
        // "Movie 1", "Movie 10".."Movie 19", "Movie 100".."Movie 119"
        assert_eq!(hits.len(), 31);
        assert!(hits.iter().all(|r| r.title.starts_with("Movie 1")));
    }

    #[test]
    fn test_by_genre() {
        let index = create_test_index();
        assert_eq!(titles(&index.by_genre("crime")), vec!["Heat", "Collateral"]);
        assert_eq!(titles(&index.by_genre("Science Fiction")), vec!["Dune"]);
        assert!(index.by_genre("Western").is_empty());
        assert_eq!(index.genre_count(), 4);
    }

    #[test]
    fn test_popular_sorted_by_rating_stable() {
        let index = create_test_index();
        // Heat and Collateral are under the budget bar; Titanic and Dune tie at 7.5
        assert_eq!(titles(&index.popular()), vec!["Titanic", "Dune", "Avatar"]);
    }
}
