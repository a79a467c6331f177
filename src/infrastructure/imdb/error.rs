//! Error type for the IMDb client.

use crate::error::{AppError, map_reqwest_error};
use serde_json::json;
use thiserror::Error;

/// Errors raised while talking to the IMDb web pages.
#[derive(Debug, Error)]
pub enum ImdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Rating source returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Rating source returned an unrecognized page for {url}")]
    UnrecognizedPage { url: String },

    #[error("Invalid rating source URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unsupported rating source URL scheme: {0}")]
    Scheme(String),

    #[error("Invalid rating source header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl From<ImdbError> for AppError {
    fn from(e: ImdbError) -> Self {
        match e {
            ImdbError::Request(e) => map_reqwest_error(e),
            ImdbError::Status { status, url } => AppError::upstream(
                format!("Rating source returned HTTP {status}"),
                json!({ "status": status, "url": url }),
            ),
            ImdbError::UnrecognizedPage { url } => AppError::upstream(
                "Rating source returned an unrecognized page",
                json!({ "url": url }),
            ),
            other @ (ImdbError::Url(_) | ImdbError::Scheme(_) | ImdbError::Header(_)) => {
                AppError::internal(
                    "Rating source is misconfigured",
                    json!({ "source": other.to_string() }),
                )
            }
        }
    }
}
