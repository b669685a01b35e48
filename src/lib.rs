//! # GamePathAI Stub API Gateway
//!
//! A minimal HTTP backend returning static/mocked JSON payloads for the
//! GamePathAI frontend: health checks, game listings, and telemetry-style
//! metric samples. Every handler returns a fixed literal regardless of
//! request content; there is no persistence, no auth enforcement, and no real
//! telemetry collection.
//!
//! ## Architecture
//!
//! - [`config`] - Environment-derived configuration, loaded once at startup
//! - [`state`] - Shared application state (the configuration snapshot)
//! - [`api`] - DTOs, handlers, and middleware
//! - [`routes`] - Route table and middleware stack
//! - [`error`] - Error type and the generic 500 adapter
//! - [`server`] - Listener setup and server lifecycle
//!
//! ## Quick Start
//!
//! ```bash
//! export ENVIRONMENT=development
//! export PORT=8000
//!
//! cargo run
//! ```
//!
//! ## Behavior notes
//!
//! Unmatched paths return 200 with a placeholder body, not 404: the frontend
//! in production is served by a reverse proxy in front of this gateway, and a
//! 404 here causes client-side redirect loops. Every response carries a fixed
//! anti-redirect/anti-cache header set for the same reason.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
