//! Shared application state injected into handlers.

use crate::application::services::RatingService;
use crate::domain::entities::ServiceInfo;
use crate::domain::sources::RatingSource;
use std::sync::Arc;

/// Immutable per-process state. Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub rating_service: Arc<RatingService<dyn RatingSource>>,
    pub service_info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(source: Arc<dyn RatingSource>, service_info: ServiceInfo) -> Self {
        Self {
            rating_service: Arc::new(RatingService::new(source)),
            service_info: Arc::new(service_info),
        }
    }
}
