//! CLI interface for tradeguard
//!
//! Provides subcommands for:
//! - `size`: Position size for a risk budget
//! - `validate`: Check a proposed trade against the limits
//! - `kelly`, `stats`: Performance of the journal
//! - `compound`, `margin`: Planning calculators
//! - `trade`, `portfolio`: Journal and account upkeep
//! - `export`: CSV export of the journal
//! - `config`: Show configuration

mod compound;
mod export;
mod margin;
mod portfolio;
mod size;
mod stats;
mod trade;
mod validate;

pub use compound::CompoundArgs;
pub use export::ExportArgs;
pub use margin::MarginArgs;
pub use portfolio::PortfolioCommand;
pub use size::SizeArgs;
pub use stats::{KellyArgs, StatsArgs};
pub use trade::TradeCommand;
pub use validate::ValidateArgs;

use crate::config::Config;
use crate::journal::AppState;
use crate::store::JsonStore;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tradeguard")]
#[command(about = "Personal trading risk desk: sizing, validation and performance")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Position size for a risk budget
    Size(SizeArgs),
    /// Validate a proposed trade against limits and portfolio state
    Validate(ValidateArgs),
    /// Kelly risk fraction from the journal
    Kelly(KellyArgs),
    /// Performance statistics
    Stats(StatsArgs),
    /// Project compounded capital growth
    Compound(CompoundArgs),
    /// Estimate derivatives margin
    Margin(MarginArgs),
    /// Open, close, cancel or list trades
    #[command(subcommand)]
    Trade(TradeCommand),
    /// Inspect or adjust the portfolio
    #[command(subcommand)]
    Portfolio(PortfolioCommand),
    /// Export the journal as CSV
    Export(ExportArgs),
    /// Show configuration
    Config,
}

/// Store configured for this run
pub(crate) fn open_store(config: &Config) -> JsonStore {
    JsonStore::new(&config.storage.data_dir)
}

/// Load persisted state, falling back to the configured account
pub(crate) fn load_state(config: &Config) -> anyhow::Result<(JsonStore, AppState)> {
    let store = open_store(config);
    let state = store.load_state(config.portfolio.initial_state(), config.limits.clone())?;
    Ok((store, state))
}
