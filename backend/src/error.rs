//! Error types for the Football Head backend.
//!
//! This module defines the error hierarchy shared by every layer:
//!
//! - [`StatsError`] - Aggregation engine errors (team lookup)
//! - [`ConfigError`] - Environment configuration errors
//! - [`ServerError`] - Top-level startup and serving errors
//!
//! CSV loading errors carry line/column context and live next to the
//! loader in [`crate::parser::CsvError`]; they convert into
//! [`ServerError`] so `?` works from the loader up to the CLI.

use thiserror::Error;

use crate::parser::CsvError;

// =============================================================================
// Aggregation Errors
// =============================================================================

/// Errors returned by the aggregation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The name matches no team in the loaded season (exact, case-sensitive).
    #[error("Team '{0}' not found")]
    TeamNotFound(String),
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port variable is set but is not a valid TCP port.
    #[error("Invalid port '{value}' in {var}")]
    InvalidPort { var: String, value: String },

    /// Data path variable is set but empty.
    #[error("{0} is set but empty")]
    EmptyDataPath(String),
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// Top-level errors surfaced by the CLI and the HTTP server startup.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Match data could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] CsvError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Aggregation error.
    #[error("Stats error: {0}")]
    Stats(#[from] StatsError),

    /// Socket or output IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for aggregation operations.
pub type StatsResult<T> = Result<T, StatsError>;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server and CLI operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // CsvError -> ServerError
        let csv_err = CsvError::new(3, "Invalid date format");
        let server_err: ServerError = csv_err.into();
        assert!(server_err.to_string().contains("Line 3"));

        // StatsError -> ServerError
        let stats_err = StatsError::TeamNotFound("Leeds".into());
        let server_err: ServerError = stats_err.into();
        assert!(server_err.to_string().contains("Leeds"));
    }

    #[test]
    fn test_team_not_found_format() {
        let err = StatsError::TeamNotFound("Arsenal".into());
        assert_eq!(err.to_string(), "Team 'Arsenal' not found");
    }

    #[test]
    fn test_invalid_port_format() {
        let err = ConfigError::InvalidPort {
            var: "FOOTBALL_HEAD_PORT".into(),
            value: "eighty".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("eighty"));
        assert!(msg.contains("FOOTBALL_HEAD_PORT"));
    }
}
