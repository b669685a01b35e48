//! DTO for the health check endpoints.

use serde::Serialize;

/// Health check response.
///
/// `environment` reflects the `ENVIRONMENT` variable as read once at startup;
/// `status` and `version` are constant for the process lifetime.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
}
