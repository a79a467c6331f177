//! Handlers for unmatched routes and unsupported methods.

use axum::http::{Method, Uri};
use serde_json::json;

use crate::error::AppError;

/// Any path without a route.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("not found", json!({ "path": uri.path() }))
}

/// A known path requested with a method other than GET.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(
        "method not allowed",
        json!({ "method": method.as_str(), "path": uri.path(), "allowed": ["GET"] }),
    )
}
