use anyhow::{anyhow, Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{MovieDraft, MovieRecord};
use scoring::{format_budget, EntryMode, PredictionResult};
use server::{PredictionService, ServiceConfig, ServiceError};
use std::time::Instant;

/// Every dataset load failure is retryable; nothing is cached on failure
const RETRY_HINT: &str = "Check the dataset location and try again";

/// Movie Success Predictor - search historical movies and predict box office success
#[derive(Parser)]
#[command(name = "movie-predict")]
#[command(about = "Predict movie success from historical data or new movie details", long_about = None)]
struct Cli {
    /// Path or http(s) URL of the movie dataset CSV
    #[arg(short, long, env = "MOVIE_DATASET", default_value = server::config::DEFAULT_DATASET)]
    dataset: String,

    /// Base URL of the external prediction service
    #[arg(long, env = "MOVIE_PREDICTOR_URL", default_value = server::config::DEFAULT_PREDICTOR_URL)]
    predictor_url: String,

    /// Timeout for prediction service requests, in seconds
    #[arg(long, default_value_t = server::config::DEFAULT_PREDICTOR_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search movies by title, genre or director
    Search {
        /// Case-insensitive substring; omit to list the first movies
        #[arg(long, default_value = "")]
        term: String,
    },

    /// Predict success for a movie from the dataset
    Predict {
        /// Title (or part of it) of the movie to score; the first match is used
        #[arg(long)]
        title: String,

        /// Ask the external prediction service instead of using the rating rule
        #[arg(long)]
        remote: bool,
    },

    /// Predict success for a new movie
    New {
        #[arg(long)]
        title: String,

        #[arg(long)]
        genre: String,

        #[arg(long)]
        director: String,

        /// Production budget in dollars
        #[arg(long)]
        budget: u64,

        /// Runtime in minutes
        #[arg(long, default_value_t = 0)]
        runtime: u32,

        /// Release month name, e.g. "July"
        #[arg(long, default_value = "")]
        month: String,

        /// Release year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        sequel: bool,

        /// Cast member; repeat for more
        #[arg(long = "cast")]
        cast: Vec<String>,

        #[arg(long, default_value = "Independent")]
        companies: String,

        /// ISO-639-1 language code
        #[arg(long, default_value = "en")]
        language: String,

        #[arg(long, default_value_t = 7.0)]
        rating: f64,

        #[arg(long, default_value_t = 1000)]
        ratings_count: u64,

        /// Ask the external prediction service, falling back to the heuristic
        #[arg(long)]
        remote: bool,
    },

    /// List movies of one genre
    Genre {
        #[arg(long)]
        name: String,
    },

    /// List the best-rated high-budget movies
    Popular,

    /// Check the external prediction service
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServiceConfig::new(&cli.dataset, cli.predictor_url, cli.timeout_secs);
    let service = PredictionService::new(&config).context("Failed to start prediction service")?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search { term } => handle_search(&service, &term).await?,
        Commands::Predict { title, remote } => handle_predict(&service, &title, remote).await?,
        Commands::New {
            title,
            genre,
            director,
            budget,
            runtime,
            month,
            year,
            sequel,
            cast,
            companies,
            language,
            rating,
            ratings_count,
            remote,
        } => {
            let mut draft = MovieDraft::new(year.unwrap_or_else(|| chrono::Local::now().year()))
                .title(title)
                .genre(genre)
                .director(director)
                .budget(budget)
                .runtime(runtime)
                .release_month(month)
                .sequel(sequel)
                .production_companies(companies)
                .original_language(language)
                .average_rating(rating)
                .ratings_count(ratings_count);
            for name in &cast {
                draft.add_cast_member(name);
            }
            let movie = draft.build().context("Invalid movie details")?;
            handle_new(&service, movie, remote).await;
        }
        Commands::Genre { name } => {
            let movies = with_retry_hint(service.by_genre(&name).await)?;
            print_movies(&format!("{} movies", name), &movies);
        }
        Commands::Popular => {
            let movies = with_retry_hint(service.popular().await)?;
            print_movies("Popular movies", &movies);
        }
        Commands::Health => handle_health(&service).await?,
    }

    Ok(())
}

/// Handle the 'search' command
async fn handle_search(service: &PredictionService, term: &str) -> Result<()> {
    let start = Instant::now();
    let movies = with_retry_hint(service.search(term).await)?;

    let heading = if term.trim().is_empty() {
        "Movies".to_string()
    } else {
        format!("Search results for '{}'", term)
    };
    print_movies(&heading, &movies);
    println!("{}", format!("({} results in {:.2?})", movies.len(), start.elapsed()).dimmed());
    Ok(())
}

/// Handle the 'predict' command
async fn handle_predict(service: &PredictionService, title: &str, remote: bool) -> Result<()> {
    let movie = with_retry_hint(service.search(title).await)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No movies found matching '{}'", title))?;

    let mode = if remote {
        EntryMode::RemoteScored
    } else {
        EntryMode::HistoricalSelection
    };
    let prediction = service.score(mode, &movie).await;
    print_prediction(&movie, &prediction);
    Ok(())
}

/// Handle the 'new' command
async fn handle_new(service: &PredictionService, movie: MovieRecord, remote: bool) {
    let mode = if remote {
        EntryMode::RemoteScored
    } else {
        EntryMode::UserSubmitted
    };
    let prediction = service.score(mode, &movie).await;
    print_prediction(&movie, &prediction);
}

/// Handle the 'health' command
async fn handle_health(service: &PredictionService) -> Result<()> {
    let health = service
        .predictor_health()
        .await
        .with_context(|| format!("Prediction service at {} is unreachable", service.predictor_address()))?;

    let model = if health.model_loaded {
        "model loaded".green()
    } else {
        "model not loaded".red()
    };
    println!("{} {} ({})", "•".cyan(), health.status, model);
    Ok(())
}

/// Attach a retry hint to dataset load failures
fn with_retry_hint<T>(result: std::result::Result<T, ServiceError>) -> Result<T> {
    result.map_err(|e| anyhow!(e).context(RETRY_HINT))
}

/// Print a numbered list of movies
fn print_movies(heading: &str, movies: &[MovieRecord]) {
    println!("{}", format!("{}:", heading).bold().blue());
    if movies.is_empty() {
        println!("  No movies found matching your search.");
        return;
    }

    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} [{}] - Directed by {}",
            (i + 1).to_string().green(),
            movie.title.bold(),
            movie.genre,
            movie.director
        );

        let mut details = vec![
            format!("Budget: {}", format_budget(movie.budget)),
            format!("{} min", movie.runtime),
        ];
        if !movie.release_month.is_empty() {
            details.push(movie.release_month.clone());
        }
        if movie.sequel {
            details.push("Sequel".to_string());
        }
        println!("   {}", details.join(" • "));

        if !movie.cast.is_empty() {
            let mut cast = movie.cast.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
            if movie.cast.len() > 3 {
                cast.push_str(&format!(" +{} more", movie.cast.len() - 3));
            }
            println!("   Cast: {}", cast);
        }
    }
}

/// Print the full prediction card for one movie
fn print_prediction(movie: &MovieRecord, prediction: &PredictionResult) {
    let verdict = if prediction.is_successful {
        prediction.verdict().green().bold()
    } else {
        prediction.verdict().red().bold()
    };
    println!("{} Prediction for \"{}\"", verdict, movie.title);
    println!(
        "{}Confidence: {}% ({})",
        "• ".cyan(),
        prediction.confidence_percent,
        confidence_tier(prediction.confidence_percent)
    );
    println!(
        "{}Projected box office: {}",
        "• ".cyan(),
        format_budget(prediction.box_office_projection)
    );

    println!("{}", "Key factors:".bold());
    for factor in &prediction.factors {
        println!("  - {}", factor);
    }

    println!("{}", "Movie details:".bold());
    println!("  Genre: {}", movie.genre);
    println!("  Director: {}", movie.director);
    println!("  Budget: {}", format_budget(movie.budget));
    println!("  Runtime: {} min", movie.runtime);
    if !movie.release_month.is_empty() {
        println!("  Release: {} {}", movie.release_month, movie.release_year);
    }
    if !movie.cast.is_empty() {
        println!("  Cast: {}", movie.cast.join(", "));
    }

    println!();
    println!("{}", recommendation(prediction));
}

fn confidence_tier(percent: u8) -> &'static str {
    match percent {
        80.. => "high",
        60..=79 => "moderate",
        _ => "low",
    }
}

fn recommendation(prediction: &PredictionResult) -> String {
    if prediction.is_successful {
        format!(
            "This movie shows strong potential for success with a {}% confidence rating. \
             Consider expanding marketing efforts and securing premium release dates.",
            prediction.confidence_percent
        )
    } else {
        format!(
            "This movie faces significant challenges with a {}% confidence in underperformance. \
             Consider budget adjustments or release strategy changes.",
            prediction.confidence_percent
        )
    }
}
