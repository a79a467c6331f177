//! Rating lookup service.

use crate::domain::entities::{RatingQuery, RatingResult, SourceRating};
use crate::domain::sources::RatingSource;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Lowest and highest rating a source may report.
const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

/// Service answering rating queries through a [`RatingSource`].
///
/// Stateless: every call is one outbound request, no caching and no retry.
/// Safe to share between requests behind an `Arc`.
pub struct RatingService<S: RatingSource + ?Sized> {
    source: Arc<S>,
}

impl<S: RatingSource + ?Sized> RatingService<S> {
    /// Creates a new rating service.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Looks up the rating for a series or a single episode.
    ///
    /// Dispatches to an episode lookup when the query carries a
    /// season/episode pair, otherwise to a series lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the source has no rating data.
    /// Returns [`AppError::Upstream`] if the source failed or answered with a
    /// rating outside `0..=10`.
    pub async fn fetch_rating(&self, query: &RatingQuery) -> Result<RatingResult, AppError> {
        tracing::debug!(imdb_id = %query.imdb_id, episode = ?query.episode, "Fetching rating");

        let found = match query.episode {
            None => self.source.title_rating(&query.imdb_id).await,
            Some(episode) => self.source.episode_rating(&query.imdb_id, episode).await,
        };

        let found = match found {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(imdb_id = %query.imdb_id, error = %e, "Rating source failed");
                return Err(e);
            }
        };

        let Some(source) = found else {
            tracing::info!(imdb_id = %query.imdb_id, episode = ?query.episode, "No rating found");
            return Err(not_found(query));
        };

        check_rating(query, &source)?;

        let result = RatingResult::new(query, source);
        tracing::info!(
            imdb_id = %result.imdb_id,
            episode = ?result.episode,
            rating = result.rating,
            "Rating found"
        );

        Ok(result)
    }
}

fn not_found(query: &RatingQuery) -> AppError {
    match query.episode {
        None => AppError::not_found(
            "No rating found",
            json!({ "imdb_id": query.imdb_id }),
        ),
        Some(ep) => AppError::not_found(
            format!("Episode S{}.E{} not found", ep.season, ep.episode),
            json!({
                "imdb_id": query.imdb_id,
                "season": ep.season,
                "episode": ep.episode,
            }),
        ),
    }
}

fn check_rating(query: &RatingQuery, source: &SourceRating) -> Result<(), AppError> {
    if RATING_RANGE.contains(&source.rating) {
        return Ok(());
    }

    tracing::warn!(
        imdb_id = %query.imdb_id,
        rating = source.rating,
        "Rating source returned an out-of-range rating"
    );
    Err(AppError::upstream(
        "Rating source returned a malformed rating",
        json!({ "imdb_id": query.imdb_id, "rating": source.rating }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{EpisodeRef, ImdbId};
    use crate::domain::sources::MockRatingSource;

    fn source_rating(rating: f64) -> SourceRating {
        SourceRating {
            title: Some("Bleach".to_string()),
            rating,
            vote_count: Some(78_000),
        }
    }

    fn series_query() -> RatingQuery {
        RatingQuery::series(ImdbId::parse("tt0434665").unwrap())
    }

    fn episode_query(season: u32, episode: u32) -> RatingQuery {
        RatingQuery::episode(
            ImdbId::parse("tt0434665").unwrap(),
            EpisodeRef::new(season, episode).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_fetch_series_rating_success() {
        let mut mock_source = MockRatingSource::new();
        mock_source
            .expect_title_rating()
            .withf(|id| id.as_str() == "tt0434665")
            .times(1)
            .returning(|_| Ok(Some(source_rating(8.2))));
        mock_source.expect_episode_rating().never();

        let service = RatingService::new(Arc::new(mock_source));
        let result = service.fetch_rating(&series_query()).await.unwrap();

        assert_eq!(result.imdb_id.as_str(), "tt0434665");
        assert_eq!(result.title.as_deref(), Some("Bleach"));
        assert_eq!(result.rating, 8.2);
        assert_eq!(result.vote_count, Some(78_000));
        assert_eq!(result.episode, None);
    }

    #[tokio::test]
    async fn test_fetch_episode_rating_dispatches_to_episode_lookup() {
        let mut mock_source = MockRatingSource::new();
        mock_source.expect_title_rating().never();
        mock_source
            .expect_episode_rating()
            .withf(|id, ep| id.as_str() == "tt0434665" && ep.season == 1 && ep.episode == 5)
            .times(1)
            .returning(|_, _| Ok(Some(source_rating(7.6))));

        let service = RatingService::new(Arc::new(mock_source));
        let result = service.fetch_rating(&episode_query(1, 5)).await.unwrap();

        assert_eq!(result.episode, Some(EpisodeRef { season: 1, episode: 5 }));
        assert_eq!(result.rating, 7.6);
    }

    #[tokio::test]
    async fn test_absent_rating_is_not_found() {
        let mut mock_source = MockRatingSource::new();
        mock_source
            .expect_title_rating()
            .times(1)
            .returning(|_| Ok(None));

        let service = RatingService::new(Arc::new(mock_source));
        let err = service.fetch_rating(&series_query()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_absent_episode_names_episode() {
        let mut mock_source = MockRatingSource::new();
        mock_source
            .expect_episode_rating()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = RatingService::new(Arc::new(mock_source));
        let err = service.fetch_rating(&episode_query(3, 12)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.message(), "Episode S3.E12 not found");
    }

    #[tokio::test]
    async fn test_upstream_error_is_propagated() {
        let mut mock_source = MockRatingSource::new();
        mock_source
            .expect_title_rating()
            .times(1)
            .returning(|_| Err(AppError::upstream("timeout", json!({}))));

        let service = RatingService::new(Arc::new(mock_source));
        let err = service.fetch_rating(&series_query()).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[tokio::test]
    async fn test_out_of_range_rating_is_upstream_error() {
        for bad in [-0.1, 10.5, f64::NAN] {
            let mut mock_source = MockRatingSource::new();
            mock_source
                .expect_title_rating()
                .times(1)
                .returning(move |_| Ok(Some(source_rating(bad))));

            let service = RatingService::new(Arc::new(mock_source));
            let err = service.fetch_rating(&series_query()).await.unwrap_err();

            assert!(matches!(err, AppError::Upstream { .. }), "{bad}");
        }
    }

    #[tokio::test]
    async fn test_boundary_ratings_pass_through_unmodified() {
        for edge in [0.0, 10.0, 6.95] {
            let mut mock_source = MockRatingSource::new();
            mock_source
                .expect_title_rating()
                .times(1)
                .returning(move |_| Ok(Some(source_rating(edge))));

            let service = RatingService::new(Arc::new(mock_source));
            let result = service.fetch_rating(&series_query()).await.unwrap();

            assert_eq!(result.rating, edge);
        }
    }
}
