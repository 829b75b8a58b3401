//! tradeguard: personal trading risk desk
//!
//! This library provides:
//! - Position sizing from a risk budget
//! - Pre-trade validation against loss limits and drawdown
//! - Performance statistics and Kelly sizing from the journal
//! - Compounding projections and derivatives margin estimates
//! - Drawdown-based risk scaling and portfolio recomputation
//! - A trade journal with CSV export and local JSON persistence

pub mod analytics;
pub mod cli;
pub mod config;
pub mod journal;
pub mod risk;
pub mod store;
pub mod telemetry;
