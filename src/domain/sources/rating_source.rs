//! Contract for the external rating provider.

use crate::domain::entities::{EpisodeRef, ImdbId, SourceRating};
use crate::error::AppError;
use async_trait::async_trait;

/// Interface to the external rating data provider.
///
/// Each call performs at most one outbound request. `Ok(None)` means the
/// provider explicitly reported that the title or episode has no rating
/// data; transport failures and malformed answers are errors.
///
/// # Implementations
///
/// - [`crate::infrastructure::imdb::ImdbClient`] - IMDb web pages
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingSource: Send + Sync {
    /// Fetches the aggregate rating of a title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on network failure, timeout, a non-2xx
    /// answer other than 404, or an unreadable body.
    async fn title_rating(&self, imdb_id: &ImdbId) -> Result<Option<SourceRating>, AppError>;

    /// Fetches the rating of a single episode of a series.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] under the same conditions as
    /// [`RatingSource::title_rating`].
    async fn episode_rating(
        &self,
        imdb_id: &ImdbId,
        episode: EpisodeRef,
    ) -> Result<Option<SourceRating>, AppError>;
}
