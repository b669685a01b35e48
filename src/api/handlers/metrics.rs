//! Handlers for the telemetry-style metric endpoints.
//!
//! All three endpoints return canned samples with a fixed timestamp. No
//! measurement happens here; real ping/jitter/system telemetry is out of
//! scope for this gateway.

use axum::Json;

use crate::api::dto::metrics::{MetricSample, SystemMetrics};
use crate::error::AppError;

/// Timestamp embedded in every metric fixture. Literal, not wall-clock.
const FIXTURE_TIMESTAMP: &str = "2025-05-05T12:00:00Z";

/// Returns the canned ping sample.
///
/// # Endpoint
///
/// `GET /api/metrics/ping`
pub async fn metrics_ping_handler() -> Result<Json<MetricSample>, AppError> {
    Ok(Json(MetricSample {
        value: 35,
        unit: "ms",
        timestamp: FIXTURE_TIMESTAMP,
    }))
}

/// Returns the canned jitter sample.
///
/// # Endpoint
///
/// `GET /api/metrics/jitter`
pub async fn metrics_jitter_handler() -> Result<Json<MetricSample>, AppError> {
    Ok(Json(MetricSample {
        value: 5,
        unit: "ms",
        timestamp: FIXTURE_TIMESTAMP,
    }))
}

/// Returns the canned host utilization snapshot.
///
/// # Endpoint
///
/// `GET /api/metrics/system`
pub async fn metrics_system_handler() -> Result<Json<SystemMetrics>, AppError> {
    Ok(Json(SystemMetrics {
        cpu: 45,
        memory: 60,
        gpu: 50,
        timestamp: FIXTURE_TIMESTAMP,
    }))
}
