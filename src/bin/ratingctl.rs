//! Operator CLI for imdb-rating-api.
//!
//! Runs lookups and configuration checks from a terminal, through the same
//! service code the HTTP server uses, without starting the server.
//!
//! # Usage
//!
//! ```bash
//! # Rating of a title
//! cargo run --bin ratingctl -- lookup tt0434665
//!
//! # Rating of an episode, as JSON
//! cargo run --bin ratingctl -- lookup tt0434665 --season 1 --episode 5 --json
//!
//! # Validate configuration
//! cargo run --bin ratingctl -- config
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see the `config` module. `IMDB_BASE_URL` is required.

use imdb_rating_api::api::dto::rating::RatingResponse;
use imdb_rating_api::config::{self, Config, mask_credentials};
use imdb_rating_api::prelude::*;
use imdb_rating_api::server::build_state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for imdb-rating-api.
#[derive(Parser)]
#[command(name = "ratingctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Look up a title or episode rating
    Lookup {
        /// IMDb id, e.g. tt0434665
        imdb_id: String,

        /// Season number (requires --episode)
        #[arg(short, long, requires = "episode")]
        season: Option<String>,

        /// Episode number (requires --season)
        #[arg(short, long, requires = "season")]
        episode: Option<String>,

        /// Print the HTTP response body instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration and print a summary
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup {
            imdb_id,
            season,
            episode,
            json,
        } => {
            let config = config::load_from_env().context("Invalid configuration")?;
            let episode = season.as_deref().zip(episode.as_deref());
            lookup(&config, &imdb_id, episode, json).await?;
        }
        Commands::Config => check_config()?,
    }

    Ok(())
}

/// Runs one lookup and prints the outcome.
async fn lookup(
    config: &Config,
    imdb_id: &str,
    episode: Option<(&str, &str)>,
    as_json: bool,
) -> Result<()> {
    let query = RatingQuery::from_path(imdb_id, episode).map_err(report)?;
    let state = build_state(config)?;

    let result = state
        .rating_service
        .fetch_rating(&query)
        .await
        .map_err(report)?;

    if as_json {
        let body = RatingResponse::from(result);
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}", "Rating found".green().bold());
    println!("  IMDb id: {}", result.imdb_id.to_string().cyan());
    if let Some(ep) = result.episode {
        println!("  Episode: S{}.E{}", ep.season, ep.episode);
    }
    println!(
        "  Title:   {}",
        result.title.as_deref().unwrap_or("-").bright_white()
    );
    println!(
        "  Rating:  {}",
        result.rating.to_string().bright_yellow().bold()
    );
    println!(
        "  Votes:   {}",
        result
            .vote_count
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    Ok(())
}

/// Loads and validates configuration, printing a masked summary.
fn check_config() -> Result<()> {
    match config::load_from_env() {
        Ok(config) => {
            println!("{}", "Configuration is valid".green().bold());
            println!("  Listen:         {}", config.listen_addr.cyan());
            println!(
                "  Rating source:  {}",
                mask_credentials(&config.imdb_base_url).cyan()
            );
            println!("  Timeout:        {}s", config.lookup_timeout_secs);
            println!("  Platform:       {}", config.platform);
            println!("  Log format:     {}", config.log_format);
            Ok(())
        }
        Err(e) => {
            println!("{}", "Configuration is invalid".red().bold());
            Err(e)
        }
    }
}

/// Prints an application error and turns it into a process error.
fn report(err: AppError) -> anyhow::Error {
    eprintln!(
        "{} {} ({})",
        "Lookup failed:".red().bold(),
        err.message(),
        err.status_code()
    );
    anyhow::Error::new(err)
}
