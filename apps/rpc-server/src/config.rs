//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use quill_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Without `DATABASE_URL` the server runs against an in-memory SQLite
    /// database, so posts do not survive a restart.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

        let database = DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS", 10),
            min_connections: parse_var("DB_MIN_CONNECTIONS", 1),
            connect_timeout: Duration::from_secs(parse_var("DB_CONNECT_TIMEOUT_SECS", 10)),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            database,
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

/// Read and parse a variable, falling back to `default` when it is missing
/// or malformed.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
