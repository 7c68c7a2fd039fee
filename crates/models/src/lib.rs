//! Response payloads shared by the HTTP API.
//!
//! Every value here is built fresh for each request and serialized straight
//! away, so none of these types carry interior state.

use serde::Serialize;

pub const GREETING: &str = "Hello World";

/// Reported in the root response when the server has it enabled.
pub const API_VERSION: &str = "1.0";

pub const HEALTHY: &str = "healthy";

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootResponse {
    pub message: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

impl RootResponse {
    pub fn new(include_version: bool) -> Self {
        Self {
            message: GREETING,
            version: include_version.then_some(API_VERSION),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: HEALTHY }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_without_version_omits_the_key() {
        let body = serde_json::to_string(&RootResponse::new(false)).unwrap();
        assert_eq!(body, r#"{"message":"Hello World"}"#);
    }

    #[test]
    fn root_with_version_keeps_field_order() {
        let body = serde_json::to_string(&RootResponse::new(true)).unwrap();
        assert_eq!(body, r#"{"message":"Hello World","version":"1.0"}"#);
    }

    #[test]
    fn health_is_healthy() {
        let body = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert_eq!(body, r#"{"status":"healthy"}"#);
    }
}
