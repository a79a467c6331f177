//! # IMDb Rating API
//!
//! A small HTTP facade that answers IMDb rating lookups for titles and
//! single episodes with a uniform JSON payload. Built for one automation
//! workflow: one request in, one outbound lookup, one JSON answer out.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Identifier, query and result types and the rating source trait
//! - **Application Layer** ([`application`]) - The rating lookup service
//! - **Infrastructure Layer** ([`infrastructure`]) - IMDb page client and HTML extraction
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! Nothing is stored between requests: no cache, no database, no retries.
//!
//! ## Quick Start
//!
//! ```bash
//! export IMDB_BASE_URL="https://www.imdb.com"
//! cargo run
//!
//! curl http://localhost:3000/imdb/tt0434665/rating
//! curl http://localhost:3000/imdb/tt0434665/season/1/episode/5/rating
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RatingService;
    pub use crate::domain::entities::{
        EpisodeRef, ImdbId, RatingQuery, RatingResult, ServiceInfo, SourceRating,
    };
    pub use crate::domain::sources::RatingSource;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
