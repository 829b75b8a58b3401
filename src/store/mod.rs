//! Local persistence
//!
//! Keeps the journal, portfolio and risk limits as JSON documents

mod json;

pub use json::{JsonStore, PORTFOLIO_KEY, RISK_LIMITS_KEY, TRADES_KEY};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Document could not be encoded or decoded
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
