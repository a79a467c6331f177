//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`        - Basic service metadata
//! - `GET /health`  - Liveness check, no dependency probing
//! - `GET /info`    - Extended service metadata
//! - `GET /imdb/*`  - Rating lookups (see [`crate::api::routes`])
//!
//! Unknown paths answer 404 and known paths with another method answer 405,
//! both with the standard error envelope.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler answers 500 instead of dropping the connection
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{
    health_handler, info_handler, method_not_allowed_handler, not_found_handler, root_handler,
};
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path
/// normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/info", get(info_handler))
        .merge(api::routes::imdb_routes())
        .fallback(not_found_handler)
        // Applies to the routes registered above, so it must come last.
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
}

/// Constructs the application service: [`router`] behind trailing-slash
/// trimming, so `/imdb/tt0434665/rating/` routes like `/imdb/tt0434665/rating`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
