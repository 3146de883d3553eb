//! # Football Head - league statistics over a season of match records
//!
//! Loads a football-data style CSV once at startup and serves the derived
//! standings over a small HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│    Stats     │────▶│  HTTP JSON  │
//! │ (ISO/UTF8)  │     │ (validated) │     │ (table/team) │     │   (axum)    │
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use football_head::{load_matches, StatsService};
//!
//! let service = StatsService::new(load_matches("data/epl_2023_2024.csv")?);
//! for (pos, row) in service.compute_league_table().iter().enumerate() {
//!     println!("{:>2}. {} {}", pos + 1, row.team, row.points);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Match and team records
//! - [`config`] - Environment configuration
//! - [`parser`] - Season CSV loader
//! - [`validation`] - Match record consistency checks
//! - [`stats`] - Aggregation engine (teams, table, team record)
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Configuration
pub mod config;

// Loading
pub mod parser;
pub mod validation;

// Aggregation
pub mod stats;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ServerError, StatsError};

pub use models::{MatchRecord, MatchResult, Outcome, Side, TeamRecord};

pub use config::Config;

pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    load_matches,
    parse_bytes,
    parse_str,
    CsvError,
};

pub use validation::{is_valid_match, validate_match};

pub use stats::{standings_order, StatsService};

pub use api::types::{
    error_response,
    ApiError,
    HealthResponse,
    LeagueTableResponse,
    TeamsResponse,
};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
