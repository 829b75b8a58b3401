//! Export command implementation

use super::load_state;
use crate::config::Config;
use crate::journal::write_trades_csv;
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output CSV file
    #[arg(long, default_value = "trades.csv")]
    pub output: PathBuf,
}

impl ExportArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (_, state) = load_state(config)?;
        let file = File::create(&self.output)
            .with_context(|| format!("Failed to create {}", self.output.display()))?;
        write_trades_csv(&state.trades, file)?;

        tracing::info!(trades = state.trades.len(), path = %self.output.display(), "Exported journal");
        println!("Exported {} trades to {}", state.trades.len(), self.output.display());
        Ok(())
    }
}
