//! Integration tests for dataset ingestion.
//!
//! These run the parser, cache and index together over a dataset laid out
//! like the real export.

use data_loader::{
    parser::parse_dataset, DatasetSource, FixedRandom, RecordCache, SearchIndex, SeededRandom,
    DEFAULT_GENRE, GENRE_COLUMNS, MONTHS,
};
use std::io::Write;
use std::sync::Arc;

fn header() -> String {
    let mut columns = vec!["budget", "popularity", "revenue", "runtime", "title", "avg_rating", "ratings"];
    columns.extend(GENRE_COLUMNS);
    columns.extend([
        "release_year",
        "director",
        "actor_1",
        "actor_2",
        "actor_3",
        "success",
        "director_success_rate",
        "actor_1_success_rate",
        "actor_2_success_rate",
        "actor_3_success_rate",
    ]);
    columns.join(",")
}

/// Build one data line; `genres` lists the indicator columns set to 1
fn line(title: &str, budget: &str, runtime: &str, rating: &str, year: &str, director: &str, genres: &[&str]) -> String {
    let mut values = vec![
        budget.to_string(),
        "12.5".to_string(),
        "0".to_string(),
        runtime.to_string(),
        title.to_string(),
        rating.to_string(),
        "1500".to_string(),
    ];
    values.extend(
        GENRE_COLUMNS
            .iter()
            .map(|g| if genres.contains(g) { "1" } else { "0" }.to_string()),
    );
    values.extend(
        [year, director, "Actor One", "Actor Two", "", "1", "0.6", "0.5", "0.4", "0.5"]
            .iter()
            .map(|s| s.to_string()),
    );
    values.join(",")
}

fn sample_dataset() -> String {
    [
        header(),
        line("Avatar", "237000000", "162", "7.2", "2009", "James Cameron", &["Action", "Adventure"]),
        line("Heat", "60000000", "170", "7.9", "1995", "Michael Mann", &["Crime", "Thriller"]),
        String::new(),
        line("Quiet Film", "abc", "n/a", "bad", "", "Someone", &[]),
        line("Dune", "165000000", "155.0", "7.5", "2021", "Denis Villeneuve", &["Science Fiction"]),
    ]
    .join("\n")
}

#[test]
fn test_parse_full_layout() {
    let records = parse_dataset(&sample_dataset(), &FixedRandom(0.0));
    assert_eq!(records.len(), 4);

    let avatar = &records[0];
    assert_eq!(avatar.title, "Avatar");
    assert_eq!(avatar.genre, "Action");
    assert_eq!(avatar.budget, 237_000_000);
    assert_eq!(avatar.runtime, 162);
    assert_eq!(avatar.average_rating, 7.2);
    assert_eq!(avatar.ratings_count, 1500);
    assert_eq!(avatar.release_year, 2009);
    assert_eq!(avatar.director, "James Cameron");
    assert_eq!(avatar.cast, vec!["Actor One", "Actor Two"]);

    assert_eq!(records[1].genre, "Crime");
    assert_eq!(records[3].genre, "Science Fiction");
    assert_eq!(records[3].runtime, 155);
}

#[test]
fn test_unparsable_fields_fall_back_without_dropping_row() {
    let records = parse_dataset(&sample_dataset(), &FixedRandom(0.0));
    let quiet = records.iter().find(|r| r.title == "Quiet Film").unwrap();

    assert_eq!(quiet.genre, DEFAULT_GENRE);
    assert_eq!(quiet.budget, 0);
    assert_eq!(quiet.runtime, 0);
    assert_eq!(quiet.average_rating, 0.0);
    assert_eq!(quiet.release_year, 2000);
}

#[test]
fn test_malformed_rows_are_skipped_one_for_one() {
    let mut text = sample_dataset();
    // Two rows without a title
    text.push('\n');
    text.push_str(&line("", "1", "90", "5", "2001", "Nobody", &["Drama"]));
    text.push('\n');
    text.push_str(&line("  ", "1", "90", "5", "2001", "Nobody", &["Drama"]));

    let records = parse_dataset(&text, &FixedRandom(0.0));
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| !r.title.is_empty()));
}

#[test]
fn test_output_keeps_input_order() {
    let mut lines = vec![header()];
    for i in 0..500 {
        lines.push(line(&format!("Movie {}", i), "1000", "100", "6", "2000", "D", &["Comedy"]));
    }
    let records = parse_dataset(&lines.join("\n"), &SeededRandom::new(7));

    assert_eq!(records.len(), 500);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.title, format!("Movie {}", i));
        assert!(MONTHS.contains(&record.release_month.as_str()));
    }
}

#[test]
fn test_comma_in_title_misaligns_row() {
    // Known limitation: no quoting support, so everything after the title shifts
    let text = format!(
        "{}\n{}",
        header(),
        line("Crouching Tiger, Hidden Dragon", "17000000", "120", "7.1", "2000", "Ang Lee", &["Action"])
    );
    let records = parse_dataset(&text, &FixedRandom(0.0));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Crouching Tiger");
    // avg_rating now reads the title's tail, ratings reads the real avg_rating
    assert_eq!(records[0].average_rating, 0.0);
    assert_eq!(records[0].ratings_count, 7);
}

#[tokio::test]
async fn test_cache_and_index_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample_dataset().as_bytes()).unwrap();

    let cache = RecordCache::new(DatasetSource::File(file.path().to_path_buf()));
    let records = cache.load().await.unwrap();
    let index = SearchIndex::build(Arc::clone(&records));

    let hits = index.search("CAMERON");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Avatar");

    let popular = index.popular();
    let titles: Vec<_> = popular.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Dune", "Avatar"]);
}
