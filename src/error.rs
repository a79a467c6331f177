//! Application error type and its JSON rendering.
//!
//! Every failure a client can observe goes through [`AppError`], so the
//! response shape is the same whether the error came from path parsing,
//! the rating source, or the router itself.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
    kind: &'static str,
    code: u16,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    MethodNotAllowed { message: String, details: Value },
    Upstream { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "invalid_input",
            AppError::NotFound { .. } => "not_found",
            AppError::MethodNotAllowed { .. } => "method_not_allowed",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::MethodNotAllowed { message, .. }
            | AppError::Upstream { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let kind = self.kind();

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::MethodNotAllowed { message, details }
            | AppError::Upstream { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            status: "error",
            error: message,
            kind,
            code: status.as_u16(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Maps a failed outbound request to an upstream error.
///
/// Timeouts and connection failures are both the source's problem from the
/// client's point of view, so they share the 502 rendering; the detail tells
/// them apart.
pub fn map_reqwest_error(e: reqwest::Error) -> AppError {
    let reason = if e.is_timeout() {
        "timeout"
    } else if e.is_connect() {
        "connect"
    } else if e.is_body() || e.is_decode() {
        "body"
    } else {
        "request"
    };

    AppError::upstream(
        "Rating source request failed",
        json!({ "reason": reason, "source": e.to_string() }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_error_envelope_shape() {
        let (status, body) = render(AppError::bad_request(
            "Invalid IMDb id",
            json!({ "imdb_id": "nope" }),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"], "Invalid IMDb id");
        assert_eq!(body["kind"], "invalid_input");
        assert_eq!(body["code"], 400);
        assert_eq!(body["details"]["imdb_id"], "nope");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (AppError::not_found("x", json!({})), StatusCode::NOT_FOUND),
            (
                AppError::method_not_allowed("x", json!({})),
                StatusCode::METHOD_NOT_ALLOWED,
            ),
            (AppError::upstream("x", json!({})), StatusCode::BAD_GATEWAY),
            (
                AppError::internal("x", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let (status, body) = render(err).await;
            assert_eq!(status, expected);
            assert_eq!(body["code"], expected.as_u16());
        }
    }

    #[test]
    fn test_display_includes_kind() {
        let err = AppError::upstream("Rating source returned HTTP 503", json!({}));
        assert_eq!(
            err.to_string(),
            "upstream_error: Rating source returned HTTP 503"
        );
    }
}
