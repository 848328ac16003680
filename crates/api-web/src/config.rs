//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use identity::DEFAULT_TOKEN_TTL_MINUTES;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Lifetime of issued bearer tokens, in minutes.
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `API_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:sage.db?mode=rwc` |
    /// | `TOKEN_TTL_MINUTES` | Bearer token lifetime | `60` |
    ///
    /// The responder's own variables are documented on
    /// [`research_agent::ResearchAgentConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url =
            env::var("SQLITE_PATH").unwrap_or_else(|_| "sqlite:sage.db?mode=rwc".to_string());

        let token_ttl_minutes = match env::var("TOKEN_TTL_MINUTES") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidTokenTtl)?,
            Err(_) => DEFAULT_TOKEN_TTL_MINUTES,
        };

        Ok(Self {
            addr,
            database_url,
            token_ttl_minutes,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_ADDR format")]
    InvalidAddr,

    #[error("Invalid TOKEN_TTL_MINUTES value")]
    InvalidTokenTtl,
}
