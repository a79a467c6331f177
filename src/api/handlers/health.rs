//! Handler for health check endpoint.

use axum::Json;
use chrono::Utc;

use crate::api::dto::STATUS_OK;
use crate::api::dto::health::HealthResponse;

/// Returns process liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always **200 OK** while the process is serving requests. The rating
/// source is deliberately not probed, so an upstream outage never makes the
/// service look dead to the platform's health checker.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "1.0.0",
///   "timestamp": "2026-10-19T12:00:00Z"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: STATUS_OK.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}
