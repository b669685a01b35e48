//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`, `GET /api/health`       - Health status literal
//! - `GET /games`, `GET /api/games`         - Game list literal
//! - `GET /ml/game-detection`               - Detected game list literal
//! - `GET /api/metrics/ping`                - Ping sample literal
//! - `GET /api/metrics/jitter`              - Jitter sample literal
//! - `GET /api/metrics/system`              - System utilization literal
//! - anything else                          - 200 frontend-fallback message (never 404)
//!
//! # Middleware (innermost to outermost)
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic adapter** - Maps escaped panics to the generic 500 JSON body
//! - **CORS** - Permissive cross-origin policy with credentials
//! - **Anti-redirect headers** - Fixed header set on every response

use crate::api::handlers::{
    fallback_handler, game_detection_handler, games_handler, health_handler,
    metrics_jitter_handler, metrics_ping_handler, metrics_system_handler,
};
use crate::api::middleware::{anti_redirect, cors, tracing};
use crate::error::handle_panic;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;

/// Constructs the application router with all routes and middleware.
///
/// The anti-redirect header layer is outermost so that error responses and
/// CORS preflights carry the fixed header set as well.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/health", get(health_handler))
        .route("/games", get(games_handler))
        .route("/api/games", get(games_handler))
        .route("/ml/game-detection", get(game_detection_handler))
        .route("/api/metrics/ping", get(metrics_ping_handler))
        .route("/api/metrics/jitter", get(metrics_jitter_handler))
        .route("/api/metrics/system", get(metrics_system_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(tracing::layer())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors::layer())
        .layer(middleware::from_fn(anti_redirect::anti_redirect_mw))
}
