//! Handler for the health check endpoints.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a constant health status.
///
/// # Endpoints
///
/// `GET /health` and `GET /api/health` (both wired to this handler)
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "1.0.0",
///   "environment": "development"
/// }
/// ```
///
/// `environment` is whatever `ENVIRONMENT` held at process startup. Nothing
/// is actually probed: this gateway has no downstream components to check.
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
    }))
}
