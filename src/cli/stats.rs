//! Stats and Kelly command implementations

use super::load_state;
use crate::config::Config;
use crate::risk::{full_kelly_pct, half_kelly_pct};
use clap::Args;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output format: json or table
    #[arg(long, default_value = "table")]
    pub format: String,
}

impl StatsArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (_, state) = load_state(config)?;
        let metrics = state.metrics();

        match self.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&metrics)?),
            _ => print!("{}", metrics.format_table()),
        }
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct KellyArgs {}

impl KellyArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (_, state) = load_state(config)?;
        let m = state.metrics();

        let half = half_kelly_pct(m.win_rate, m.avg_win, m.avg_loss);
        let full = full_kelly_pct(m.win_rate, m.avg_win, m.avg_loss);

        println!(
            "Based on {} closed trades (win rate {:.1}%)",
            m.total_trades, m.win_rate
        );
        println!("  Half Kelly: {:.2}%", half);
        println!("  Full Kelly: {:.2}%", full);
        if half.is_zero() {
            println!("  No edge in the journal yet; keep risk at the per-trade limit");
        }
        Ok(())
    }
}
