//! Validate command implementation

use super::load_state;
use crate::analytics::{risk_reward_ratio, trade_risk_pct};
use crate::config::Config;
use crate::risk::{validate_trade, ValidationResult};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Entry price
    #[arg(long)]
    pub entry: Decimal,

    /// Stop-loss price
    #[arg(long)]
    pub stop: Decimal,

    /// Target price
    #[arg(long)]
    pub target: Decimal,

    /// Quantity
    #[arg(long)]
    pub qty: u32,
}

/// Print every message of a validation result
pub(crate) fn print_validation(result: &ValidationResult) {
    for error in &result.errors {
        println!("  ERROR: {}", error);
    }
    for warning in &result.warnings {
        println!("  WARNING: {}", warning);
    }
}

impl ValidateArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (_, state) = load_state(config)?;

        let rr = risk_reward_ratio(self.entry, self.stop, self.target);
        let risk_pct = trade_risk_pct(self.entry, self.stop, self.qty, state.portfolio.capital);
        let result = validate_trade(rr, risk_pct, &state.limits, &state.portfolio);

        println!("Risk-reward 1:{:.2}, risk {:.2}% of capital", rr, risk_pct);
        print_validation(&result);

        if !result.is_valid {
            anyhow::bail!("Trade rejected with {} error(s)", result.errors.len());
        }
        println!("Trade is within limits");
        Ok(())
    }
}
