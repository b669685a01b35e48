#![allow(dead_code)]

use axum_test::TestServer;
use gamepathai_api::config::Config;
use gamepathai_api::routes::app_router;
use gamepathai_api::state::AppState;
use std::sync::Arc;

/// Builds a configuration fixture without touching the process environment.
pub fn test_config(environment: &str) -> Config {
    Config {
        environment: environment.to_string(),
        jwt_secret: "test-secret".to_string(),
        api_keys: vec!["test-api-key".to_string()],
        port: 8000,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_test_state(environment: &str) -> AppState {
    AppState::new(Arc::new(test_config(environment)))
}

/// Full application router (all routes and middleware) behind a test server.
pub fn test_server(environment: &str) -> TestServer {
    let app = app_router(create_test_state(environment));
    TestServer::new(app).unwrap()
}
