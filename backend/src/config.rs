//! Server configuration.
//!
//! Values come from the environment (optionally via a `.env` file) and can be
//! overridden by CLI flags.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// Season CSV loaded when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "data/epl_2023_2024.csv";

/// HTTP port used when nothing else is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the season CSV path.
pub const DATA_PATH_VAR: &str = "FOOTBALL_HEAD_DATA";

/// Environment variable holding the HTTP port.
pub const PORT_VAR: &str = "FOOTBALL_HEAD_PORT";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Season CSV file.
    pub data_path: PathBuf,
    /// Port to listen on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR) {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyDataPath(DATA_PATH_VAR.to_string()));
            }
            config.data_path = PathBuf::from(path);
        }

        if let Some(port) = lookup(PORT_VAR) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR.to_string(),
                value: port.clone(),
            })?;
        }

        Ok(config)
    }

    /// Apply CLI overrides.
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, port: Option<u16>) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}
