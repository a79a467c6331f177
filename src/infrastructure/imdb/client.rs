//! IMDb HTTP client.
//!
//! Fetches title and season pages and hands the HTML to [`super::scrape`].
//! One request per lookup; redirects for merged titles are followed by
//! reqwest.

use super::error::ImdbError;
use super::scrape;
use crate::domain::entities::{EpisodeRef, ImdbId, SourceRating};
use crate::domain::sources::RatingSource;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::Duration;
use url::Url;

/// Default user agent. IMDb serves a stripped page to unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// The episode markers the scraper matches on are English.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`ImdbClient`].
#[derive(Debug, Clone)]
pub struct ImdbClientSettings {
    pub base_url: Url,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout: Duration,
}

impl ImdbClientSettings {
    /// Settings for the given base URL with default headers and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ImdbError::Url`] if `base_url` does not parse and
    /// [`ImdbError::Scheme`] if it is not http or https.
    pub fn new(base_url: &str) -> Result<Self, ImdbError> {
        let mut base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ImdbError::Scheme(base_url.scheme().to_string()));
        }
        // Url::join replaces the last path segment unless the base ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = accept_language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// [`RatingSource`] backed by IMDb title and episode pages.
#[derive(Debug, Clone)]
pub struct ImdbClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl ImdbClient {
    /// Builds a client with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`ImdbError::Header`] if the Accept-Language value is not a
    /// valid header, and [`ImdbError::Request`] if the TLS backend cannot be
    /// initialized or the user agent is not valid.
    pub fn new(settings: ImdbClientSettings) -> Result<Self, ImdbError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml"));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&settings.accept_language)?,
        );

        let http_client = reqwest::Client::builder()
            .user_agent(settings.user_agent)
            .default_headers(headers)
            .timeout(settings.timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: settings.base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/title/{id}/`
    pub fn title_url(&self, imdb_id: &ImdbId) -> Result<Url, ImdbError> {
        Ok(self.base_url.join(&format!("title/{imdb_id}/"))?)
    }

    /// `{base}/title/{id}/episodes/?season={n}&mode=all`
    ///
    /// Without `mode=all` a season page lists only the first 50 episodes.
    pub fn season_url(&self, imdb_id: &ImdbId, season: u32) -> Result<Url, ImdbError> {
        let mut url = self.base_url.join(&format!("title/{imdb_id}/episodes/"))?;
        url.query_pairs_mut()
            .append_pair("season", &season.to_string())
            .append_pair("mode", "all");
        Ok(url)
    }

    /// Fetches a page body. `Ok(None)` when the source answers 404.
    ///
    /// Any status other than 200 and 404 is an error, including 2xx codes such
    /// as the 202 IMDb answers bot challenges with.
    async fn fetch_page(&self, url: &Url) -> Result<Option<String>, ImdbError> {
        tracing::debug!(%url, "Requesting rating source page");

        let response = self.http_client.get(url.clone()).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if status != reqwest::StatusCode::OK {
            return Err(ImdbError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(Some(response.text().await?))
    }
}

#[async_trait]
impl RatingSource for ImdbClient {
    async fn title_rating(&self, imdb_id: &ImdbId) -> Result<Option<SourceRating>, AppError> {
        let url = self.title_url(imdb_id)?;
        let Some(page) = self.fetch_page(&url).await? else {
            return Ok(None);
        };

        scrape::title_rating(&page).map_err(|_| unrecognized(&url))
    }

    async fn episode_rating(
        &self,
        imdb_id: &ImdbId,
        episode: EpisodeRef,
    ) -> Result<Option<SourceRating>, AppError> {
        let url = self.season_url(imdb_id, episode.season)?;
        let Some(page) = self.fetch_page(&url).await? else {
            return Ok(None);
        };

        scrape::episode_rating(&page, episode).map_err(|_| unrecognized(&url))
    }
}

fn unrecognized(url: &Url) -> AppError {
    ImdbError::UnrecognizedPage {
        url: url.to_string(),
    }
    .into()
}
