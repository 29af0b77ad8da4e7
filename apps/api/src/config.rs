//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to bind (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port (default: 8080)
    pub http_port: u16,

    /// SQLite database file
    pub database_path: String,

    /// Upper bound of the SQLite pool
    pub db_max_connections: u32,

    /// OpenStreetMap API base URL
    pub osm_api_url: String,

    /// Timeout for a single OSM request, in seconds
    pub osm_timeout_secs: u64,

    /// Default log level when RUST_LOG is unset
    pub log_level: String,

    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup (tests use a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = ApiConfig {
            bind_addr: get("BIND_ADDR", "0.0.0.0"),

            http_port: get("HTTP_PORT", "8080")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_PORT".to_string()))?,

            database_path: get("DATABASE_PATH", "./campus_coffee.db"),

            db_max_connections: get("DB_MAX_CONNECTIONS", "5")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,

            osm_api_url: get("OSM_API_URL", "https://www.openstreetmap.org"),

            osm_timeout_secs: get("OSM_TIMEOUT_SECS", "10")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("OSM_TIMEOUT_SECS".to_string()))?,

            log_level: get("LOG_LEVEL", "info"),

            log_json: get("LOG_JSON", "false")
                .parse()
                .map_err(|_| ConfigError::InvalidValue("LOG_JSON".to_string()))?,
        };

        if config.database_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("DATABASE_PATH".to_string()));
        }
        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Socket address the HTTP server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.http_port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BIND_ADDR".to_string()))
    }

    pub fn osm_timeout(&self) -> Duration {
        Duration::from_secs(self.osm_timeout_secs)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
