//! Handlers for series and episode rating lookups.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::json;

use crate::api::dto::rating::RatingResponse;
use crate::domain::entities::RatingQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Rating of a whole title.
///
/// # Endpoint
///
/// `GET /imdb/{imdb_id}/rating`
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "imdbId": "tt0434665",
///   "title": "Bleach (TV Series 2004–2012)",
///   "rating": 8.2,
///   "voteCount": 78412
/// }
/// ```
///
/// # Errors
///
/// - **400** if the id is not `tt` followed by at least 5 digits
/// - **404** if the source has no rating for the title
/// - **502** if the source failed or timed out
pub async fn series_rating_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<RatingResponse>, AppError> {
    let Path(imdb_id) = path.map_err(map_path_rejection)?;

    let query = RatingQuery::from_path(&imdb_id, None)?;
    let result = state.rating_service.fetch_rating(&query).await?;

    Ok(Json(result.into()))
}

/// Rating of a single episode.
///
/// # Endpoint
///
/// `GET /imdb/{imdb_id}/season/{season}/episode/{episode}/rating`
///
/// Season and episode are taken as raw strings and validated here, so
/// `0`, `-1` or `abc` produce the same 400 envelope as a bad id.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "imdbId": "tt0434665",
///   "season": 1,
///   "episode": 5,
///   "title": "Win Against the Invisible Enemy!",
///   "rating": 7.4,
///   "voteCount": 1600
/// }
/// ```
///
/// # Errors
///
/// - **400** for a malformed id, season or episode
/// - **404** if the season page does not list the episode
/// - **502** if the source failed or timed out
pub async fn episode_rating_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, String, String)>, PathRejection>,
) -> Result<Json<RatingResponse>, AppError> {
    let Path((imdb_id, season, episode)) = path.map_err(map_path_rejection)?;

    let query = RatingQuery::from_path(&imdb_id, Some((&season, &episode)))?;
    let result = state.rating_service.fetch_rating(&query).await?;

    Ok(Json(result.into()))
}

fn map_path_rejection(rejection: PathRejection) -> AppError {
    AppError::bad_request(
        "Invalid path parameters",
        json!({ "reason": rejection.body_text() }),
    )
}
