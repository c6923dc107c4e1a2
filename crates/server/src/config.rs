//! Server configuration from defaults and environment

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

/// Default host address
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port number
pub const DEFAULT_PORT: u16 = 5000;

/// Default location of the vote store
pub const DEFAULT_VOTES_FILE: &str = "votes.json";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Port cannot be zero")]
    ZeroPort,

    #[error("Votes file path cannot be empty")]
    EmptyVotesFile,

    #[error("Invalid address {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// JSON file holding every movie's votes
    pub votes_file: PathBuf,

    /// Log level for tracing
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            votes_file: PathBuf::from(DEFAULT_VOTES_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables with fallback to defaults
    ///
    /// Environment variables:
    /// - `MOVIE_VOTES_HOST` - Server host
    /// - `MOVIE_VOTES_PORT` - Server port
    /// - `MOVIE_VOTES_FILE` - Vote store path
    /// - `MOVIE_VOTES_LOG` - Log level (trace, debug, info, warn, error)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("MOVIE_VOTES_HOST") {
            config.host = host;
        }

        if let Some(port_str) = lookup("MOVIE_VOTES_PORT") {
            match port_str.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => warn!(
                    "Invalid MOVIE_VOTES_PORT value {port_str:?}: {e}, using default {}",
                    config.port
                ),
            }
        }

        if let Some(votes_file) = lookup("MOVIE_VOTES_FILE") {
            config.votes_file = PathBuf::from(votes_file);
        }

        if let Some(log_level) = lookup("MOVIE_VOTES_LOG") {
            config.log_level = log_level;
        }

        config
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        address
            .parse()
            .map_err(|_| ConfigError::InvalidAddress(address))
    }

    /// Get the full server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        if self.votes_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyVotesFile);
        }
        self.socket_addr()?;
        Ok(())
    }
}
