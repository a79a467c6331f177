//! IMDb title identifier.

use crate::error::AppError;
use regex::Regex;
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::sync::LazyLock;

/// `tt` followed by at least five digits, i.e. seven characters or more.
static IMDB_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^tt\d{5,}$").unwrap());

/// A validated IMDb identifier such as `tt0434665`.
///
/// The only way to obtain one is [`ImdbId::parse`], so holding an `ImdbId`
/// means the value already passed validation and is safe to put in an
/// upstream URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImdbId(String);

impl ImdbId {
    /// Parses and validates a raw identifier.
    ///
    /// No normalization is applied: bare digits, an upper-case `TT` prefix,
    /// or surrounding whitespace are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the value does not match `tt\d{5,}`.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if IMDB_ID_REGEX.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(AppError::bad_request(
                "Invalid IMDb id",
                json!({
                    "imdb_id": raw,
                    "expected": "tt followed by at least 5 digits, e.g. tt0434665",
                }),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImdbId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        for raw in ["tt0434665", "tt1234567", "tt10872600", "tt12345"] {
            let id = ImdbId::parse(raw).unwrap();
            assert_eq!(id.as_str(), raw);
            assert_eq!(id.to_string(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in [
            "",
            "notanid",
            "0434665",
            "TT0434665",
            "tt1234",
            "tt0434665x",
            " tt0434665",
            "tt-434665",
            "nm0000123",
        ] {
            let err = ImdbId::parse(raw).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "{raw:?}");
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ImdbId::parse("tt0434665").unwrap();
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("tt0434665"));
    }
}
