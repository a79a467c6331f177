//! DTOs for rating endpoints.

use super::STATUS_OK;
use crate::domain::entities::RatingResult;
use serde::Serialize;

/// Rating of a series or of a single episode.
///
/// `season` and `episode` are only present on episode lookups. `title` and
/// `voteCount` are `null` when the source did not provide them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub status: String,
    pub imdb_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
    pub title: Option<String>,
    pub rating: f64,
    pub vote_count: Option<u64>,
}

impl From<RatingResult> for RatingResponse {
    fn from(result: RatingResult) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            imdb_id: result.imdb_id.to_string(),
            season: result.episode.map(|e| e.season),
            episode: result.episode.map(|e| e.episode),
            title: result.title,
            rating: result.rating,
            vote_count: result.vote_count,
        }
    }
}
