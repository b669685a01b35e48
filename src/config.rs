//! Application configuration loaded from environment variables.
//!
//! Configuration is read exactly once at startup into an immutable [`Config`]
//! and passed explicitly to the components that need it. Nothing re-reads the
//! process environment after initialization, so changing a variable while the
//! server is running has no effect.
//!
//! ## Variables
//!
//! - `ENVIRONMENT` - Deployment environment name reported by the health
//!   endpoints (default: `development`)
//! - `JWT_SECRET` - Token signing secret (default: a development placeholder).
//!   Declared for parity with the production deployment; no route in this
//!   gateway validates tokens.
//! - `API_KEYS` - Comma-separated list of accepted API keys (default:
//!   `dev-api-key`). Declared but not enforced by any route here.
//! - `PORT` - TCP port to bind on `0.0.0.0` (default: `8000`)
//! - `RUST_LOG` - Log level filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! A `.env` file in the working directory is honored via `dotenvy` before any
//! variable is read (see `main`).

use anyhow::{Context, Result};
use std::env;

/// Default secret used when `JWT_SECRET` is not set. Development only.
const DEFAULT_JWT_SECRET: &str = "dev-secret-key-for-gamepathai";

/// Default API key list used when `API_KEYS` is not set. Development only.
const DEFAULT_API_KEYS: &str = "dev-api-key";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment name echoed in health responses (`ENVIRONMENT`).
    pub environment: String,
    /// Token signing secret (`JWT_SECRET`). Unused by request handling.
    pub jwt_secret: String,
    /// Accepted API keys (`API_KEYS`, comma-separated). Unused by request handling.
    pub api_keys: Vec<String>,
    /// Port to bind on `0.0.0.0` (`PORT`, default: 8000).
    pub port: u16,
    /// Log level filter (`RUST_LOG`, default: `info`).
    pub log_level: String,
    /// Log format, `text` or `json` (`LOG_FORMAT`, default: `text`).
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid TCP port number.
    pub fn from_env() -> Result<Self> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        let api_keys = env::var("API_KEYS")
            .unwrap_or_else(|_| DEFAULT_API_KEYS.to_string())
            .split(',')
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            Err(_) => 8000,
        };

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            environment,
            jwt_secret,
            api_keys,
            port,
            log_level,
            log_format,
        })
    }

    /// Address string for the TCP listener.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        for key in ["ENVIRONMENT", "JWT_SECRET", "API_KEYS", "PORT"] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn defaults_when_unset() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.api_keys, vec!["dev-api-key".to_string()]);
        assert_eq!(config.port, 8000);
        assert_eq!(config.listen_addr(), "0.0.0.0:8000");
    }

    #[test]
    #[serial]
    fn reads_environment_and_port() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("ENVIRONMENT", "production");
            env::set_var("PORT", "9090");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.port, 9090);

        clear_env();
    }

    #[test]
    #[serial]
    fn splits_api_keys_on_commas() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe { env::set_var("API_KEYS", "key-a, key-b,key-c,") };

        let config = Config::from_env().unwrap();

        assert_eq!(config.api_keys, vec!["key-a", "key-b", "key-c"]);

        clear_env();
    }

    #[test]
    #[serial]
    fn rejects_invalid_port() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe { env::set_var("PORT", "not-a-port") };

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
