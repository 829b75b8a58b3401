//! Compound command implementation

use crate::analytics::{calculate_compounding, required_monthly_return};
use crate::config::Config;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct CompoundArgs {
    /// Starting capital (defaults to the configured initial capital)
    #[arg(long)]
    pub capital: Option<Decimal>,

    /// Monthly return in %
    #[arg(long)]
    pub rate: Decimal,

    /// Number of months
    #[arg(long, default_value = "12")]
    pub months: u32,

    /// Target capital, to show the monthly return it requires
    #[arg(long)]
    pub target: Option<Decimal>,
}

impl CompoundArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let capital = self.capital.unwrap_or(config.portfolio.initial_capital);
        let steps = calculate_compounding(capital, self.rate, self.months);

        println!("{:>5}  {:>16}  {:>14}  {:>16}", "Month", "Capital", "Profit", "Cumulative");
        for step in &steps {
            println!(
                "{:>5}  {:>16.2}  {:>14.2}  {:>16.2}",
                step.month, step.capital, step.profit, step.cumulative_profit
            );
        }

        if steps.len() < self.months as usize {
            println!(
                "Projection stopped after {} months: capital exceeds the representable range",
                steps.len()
            );
        }

        if let Some(target) = self.target {
            let required = required_monthly_return(capital, target, self.months);
            println!(
                "Reaching {:.2} in {} months needs {:.2}% per month",
                target, self.months, required
            );
        }
        Ok(())
    }
}
