//! HTTP API module.
//!
//! Thin query surface over [`crate::stats::StatsService`]: routing, response
//! shapes and the server log feed.

pub mod logs;
pub mod server;
pub mod types;

pub use logs::*;
pub use server::{router, start_server, AppState};
pub use types::*;
