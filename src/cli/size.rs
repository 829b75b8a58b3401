//! Size command implementation

use super::load_state;
use crate::config::Config;
use crate::risk::{adjusted_risk_for_drawdown, calculate_position_size, PositionSizeParams};
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Entry price
    #[arg(long)]
    pub entry: Decimal,

    /// Stop-loss distance as % of entry
    #[arg(long)]
    pub stop_loss: Decimal,

    /// Risk as % of capital (defaults to the per-trade limit)
    #[arg(long)]
    pub risk: Option<Decimal>,

    /// Capital (defaults to the stored portfolio)
    #[arg(long)]
    pub capital: Option<Decimal>,

    /// Leverage (defaults to the stored portfolio)
    #[arg(long)]
    pub leverage: Option<Decimal>,
}

impl SizeArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (_, state) = load_state(config)?;
        let portfolio = &state.portfolio;

        let base_risk = self.risk.unwrap_or(state.limits.risk_per_trade);
        let params = PositionSizeParams::new(
            self.capital.unwrap_or(portfolio.capital),
            base_risk,
            self.stop_loss,
            self.entry,
        )
        .with_leverage(self.leverage.unwrap_or(portfolio.leverage));

        let result = calculate_position_size(&params);
        tracing::debug!(?params, ?result, "Sized position");

        println!("Position size");
        println!("  Quantity:        {}", result.quantity);
        println!("  Position value:  {:.2}", result.position_size);
        println!("  Margin required: {:.2}", result.margin_required);
        println!("  Risk amount:     {:.2}", result.risk_amount);
        println!("  Max loss:        {:.2}", result.max_loss);
        println!("  Max profit:      {:.2}", result.max_profit);

        let adjusted = adjusted_risk_for_drawdown(base_risk, portfolio.drawdown);
        if adjusted != base_risk {
            println!(
                "  Drawdown {:.2}%: reduce risk from {}% to {}%",
                portfolio.drawdown,
                base_risk.normalize(),
                adjusted.normalize()
            );
        }
        Ok(())
    }
}
