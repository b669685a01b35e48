//! HTTP request handlers for API endpoints.
//!
//! Every handler returns a fixed literal body: there is no persistence and no
//! request inspection behind any of these routes.

pub mod fallback;
pub mod game_detection;
pub mod games;
pub mod health;
pub mod metrics;

pub use fallback::fallback_handler;
pub use game_detection::game_detection_handler;
pub use games::games_handler;
pub use health::health_handler;
pub use metrics::{metrics_jitter_handler, metrics_ping_handler, metrics_system_handler};
