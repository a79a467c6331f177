//! DTOs for the root and service information endpoints.

use super::STATUS_OK;
use crate::domain::entities::ServiceInfo;
use serde::Serialize;

/// Basic metadata returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub platform: String,
    pub endpoints: Vec<String>,
}

impl From<&ServiceInfo> for RootResponse {
    fn from(info: &ServiceInfo) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            service: info.name.clone(),
            version: info.version.clone(),
            platform: info.platform.clone(),
            endpoints: info.endpoints.clone(),
        }
    }
}

/// Extended metadata returned by `GET /info`.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub description: String,
    pub usage: String,
    pub platform: String,
    pub endpoints: Vec<String>,
    pub examples: Vec<String>,
}

impl From<&ServiceInfo> for InfoResponse {
    fn from(info: &ServiceInfo) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            service: info.name.clone(),
            version: info.version.clone(),
            description: info.description.clone(),
            usage: info.usage.clone(),
            platform: info.platform.clone(),
            endpoints: info.endpoints.clone(),
            examples: info.examples.clone(),
        }
    }
}
