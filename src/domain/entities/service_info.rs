//! Static service description served by `/` and `/info`.

/// Human-readable service name.
pub const SERVICE_NAME: &str = "IMDb Rating API";

/// Endpoints advertised to clients.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /info",
    "GET /imdb/{imdb_id}/rating",
    "GET /imdb/{imdb_id}/season/{season}/episode/{episode}/rating",
];

/// Example requests advertised by `/info`.
pub const EXAMPLES: &[&str] = &[
    "GET /imdb/tt0434665/rating",
    "GET /imdb/tt0434665/season/1/episode/5/rating",
];

/// Descriptive metadata, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub usage: String,
    pub platform: String,
    pub endpoints: Vec<String>,
    pub examples: Vec<String>,
}

impl ServiceInfo {
    /// Builds the service description for the given deployment platform label.
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: env!("CARGO_PKG_DESCRIPTION").to_string(),
            usage: "Rating lookups for automation workflows".to_string(),
            platform: platform.into(),
            endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
            examples: EXAMPLES.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_contents() {
        let info = ServiceInfo::new("container");
        assert_eq!(info.name, SERVICE_NAME);
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.platform, "container");
        assert_eq!(info.endpoints.len(), ENDPOINTS.len());
        assert!(
            info.endpoints
                .iter()
                .any(|e| e.ends_with("/season/{season}/episode/{episode}/rating"))
        );
    }
}
