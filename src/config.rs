//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::{AddrParseError, SocketAddr};
use std::time::Duration;

/// Default bind address.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Default database location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/chores.db";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is set but is not a socket address.
    #[error("invalid LISTEN_ADDR: {0}")]
    InvalidListenAddr(#[from] AddrParseError),
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ChoreConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ChoreConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// SQLite connection string (`sqlite://path` or `sqlite::memory:`).
    pub database_url: String,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,
}

impl ChoreConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidListenAddr`] if `LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string())
            .parse()?;

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 5);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_connect_timeout_secs,
        })
    }

    /// Connection acquire timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.database_connect_timeout_secs)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
