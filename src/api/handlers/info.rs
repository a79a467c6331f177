//! Handlers for service metadata endpoints.

use axum::{Json, extract::State};

use crate::api::dto::info::{InfoResponse, RootResponse};
use crate::state::AppState;

/// Basic service metadata.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::from(state.service_info.as_ref()))
}

/// Extended service metadata: description, endpoint list and examples.
///
/// # Endpoint
///
/// `GET /info`
pub async fn info_handler(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse::from(state.service_info.as_ref()))
}
