//! Rating API route configuration.

use crate::api::handlers::{episode_rating_handler, series_rating_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// IMDb rating routes.
///
/// # Endpoints
///
/// - `GET /imdb/{imdb_id}/rating`                                    - Title rating
/// - `GET /imdb/{imdb_id}/season/{season}/episode/{episode}/rating`  - Episode rating
///
/// A path carrying only a season or only an episode matches neither route.
pub fn imdb_routes() -> Router<AppState> {
    Router::new()
        .route("/imdb/{imdb_id}/rating", get(series_rating_handler))
        .route(
            "/imdb/{imdb_id}/season/{season}/episode/{episode}/rating",
            get(episode_rating_handler),
        )
}
