//! Rating query and result values.

use super::ImdbId;
use crate::error::AppError;
use serde_json::json;

/// A season/episode pair. Both numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EpisodeRef {
    pub season: u32,
    pub episode: u32,
}

impl EpisodeRef {
    /// Creates an episode reference, rejecting zero for either number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `season` or `episode` is 0.
    pub fn new(season: u32, episode: u32) -> Result<Self, AppError> {
        if season == 0 || episode == 0 {
            return Err(AppError::bad_request(
                "Season and episode must be positive integers",
                json!({ "season": season, "episode": episode }),
            ));
        }
        Ok(Self { season, episode })
    }

    /// Parses raw path segments.
    ///
    /// Only plain ASCII digits are accepted, so `+1`, ` 1` and `1.0` are
    /// rejected rather than coerced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either segment is not a positive
    /// integer that fits in `u32`.
    pub fn parse(season: &str, episode: &str) -> Result<Self, AppError> {
        let season_num = parse_positive("season", season)?;
        let episode_num = parse_positive("episode", episode)?;
        Self::new(season_num, episode_num)
    }
}

fn parse_positive(field: &'static str, raw: &str) -> Result<u32, AppError> {
    let invalid = || {
        AppError::bad_request(
            format!("Invalid {field}: expected a positive integer"),
            json!({ "field": field, "value": raw }),
        )
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(n) => Ok(n),
    }
}

/// A single rating lookup.
///
/// Season and episode are either both present (episode lookup) or both
/// absent (series lookup); `Option<EpisodeRef>` makes a half-specified
/// query unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingQuery {
    pub imdb_id: ImdbId,
    pub episode: Option<EpisodeRef>,
}

impl RatingQuery {
    pub fn series(imdb_id: ImdbId) -> Self {
        Self {
            imdb_id,
            episode: None,
        }
    }

    pub fn episode(imdb_id: ImdbId, episode: EpisodeRef) -> Self {
        Self {
            imdb_id,
            episode: Some(episode),
        }
    }

    /// Builds a query from raw path segments.
    ///
    /// The identifier is validated before the season/episode pair, so a bad
    /// id is reported even when the numbers are also malformed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed id, season or episode.
    pub fn from_path(imdb_id: &str, episode: Option<(&str, &str)>) -> Result<Self, AppError> {
        let imdb_id = ImdbId::parse(imdb_id)?;
        match episode {
            None => Ok(Self::series(imdb_id)),
            Some((season, episode)) => {
                let episode = EpisodeRef::parse(season, episode)?;
                Ok(Self::episode(imdb_id, episode))
            }
        }
    }

    pub fn is_episode(&self) -> bool {
        self.episode.is_some()
    }
}

/// What the rating source reports for a title or an episode.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRating {
    pub title: Option<String>,
    pub rating: f64,
    pub vote_count: Option<u64>,
}

/// Normalized lookup result handed to the response layer.
///
/// The rating is passed through exactly as the source provided it.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingResult {
    pub imdb_id: ImdbId,
    pub title: Option<String>,
    pub rating: f64,
    pub vote_count: Option<u64>,
    pub episode: Option<EpisodeRef>,
}

impl RatingResult {
    pub fn new(query: &RatingQuery, source: SourceRating) -> Self {
        Self {
            imdb_id: query.imdb_id.clone(),
            title: source.title,
            rating: source.rating,
            vote_count: source.vote_count,
            episode: query.episode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_ref_parse() {
        let ep = EpisodeRef::parse("1", "5").unwrap();
        assert_eq!(ep, EpisodeRef { season: 1, episode: 5 });

        let ep = EpisodeRef::parse("012", "0340").unwrap();
        assert_eq!(ep.season, 12);
        assert_eq!(ep.episode, 340);
    }

    #[test]
    fn test_episode_ref_rejects_non_positive_and_garbage() {
        for (season, episode) in [
            ("0", "1"),
            ("1", "0"),
            ("abc", "1"),
            ("1", "-2"),
            ("+1", "1"),
            ("1", " 2"),
            ("1.0", "2"),
            ("", "2"),
            ("99999999999", "1"),
        ] {
            let err = EpisodeRef::parse(season, episode).unwrap_err();
            assert!(
                matches!(err, AppError::Validation { .. }),
                "{season:?}/{episode:?}"
            );
        }
    }

    #[test]
    fn test_episode_ref_new_rejects_zero() {
        assert!(EpisodeRef::new(0, 3).is_err());
        assert!(EpisodeRef::new(2, 0).is_err());
        assert!(EpisodeRef::new(2, 3).is_ok());
    }

    #[test]
    fn test_from_path_series_and_episode() {
        let q = RatingQuery::from_path("tt0434665", None).unwrap();
        assert_eq!(q.imdb_id.as_str(), "tt0434665");
        assert!(!q.is_episode());

        let q = RatingQuery::from_path("tt0434665", Some(("1", "5"))).unwrap();
        assert_eq!(q.episode, Some(EpisodeRef { season: 1, episode: 5 }));
    }

    #[test]
    fn test_from_path_reports_id_first() {
        let err = RatingQuery::from_path("notanid", Some(("x", "y"))).unwrap_err();
        assert_eq!(err.message(), "Invalid IMDb id");
    }

    #[test]
    fn test_result_echoes_query() {
        let query = RatingQuery::from_path("tt0434665", Some(("2", "7"))).unwrap();
        let result = RatingResult::new(
            &query,
            SourceRating {
                title: Some("The Substitute".to_string()),
                rating: 7.9,
                vote_count: Some(1200),
            },
        );

        assert_eq!(result.imdb_id, query.imdb_id);
        assert_eq!(result.episode, query.episode);
        assert_eq!(result.rating, 7.9);
        assert_eq!(result.vote_count, Some(1200));
    }
}
