//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use common::{DatabaseConfig, ServiceConfig};

use super::constants::{
    DEFAULT_DATABASE_CONNECT_TIMEOUT_SECONDS, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_DATABASE_MIN_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_LOG_LEVEL,
    DEFAULT_REQUEST_TIMEOUT_SECONDS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServiceConfig,
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parse_var(
                    "DATABASE_MAX_CONNECTIONS",
                    DEFAULT_DATABASE_MAX_CONNECTIONS,
                ),
                min_connections: parse_var(
                    "DATABASE_MIN_CONNECTIONS",
                    DEFAULT_DATABASE_MIN_CONNECTIONS,
                ),
                connect_timeout_seconds: parse_var(
                    "DATABASE_CONNECT_TIMEOUT_SECONDS",
                    DEFAULT_DATABASE_CONNECT_TIMEOUT_SECONDS,
                ),
            },
            server: ServiceConfig {
                service_name: env!("CARGO_PKG_NAME").to_string(),
                host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
                request_timeout_seconds: parse_var(
                    "REQUEST_TIMEOUT_SECONDS",
                    DEFAULT_REQUEST_TIMEOUT_SECONDS,
                ),
            },
        }
    }
}

/// Parse an environment variable, falling back to `default` when unset or malformed.
fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
