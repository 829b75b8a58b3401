//! Portfolio command implementations

use super::load_state;
use crate::config::Config;
use crate::risk::{adjusted_risk_for_drawdown, Period, PortfolioUpdate};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

#[derive(Subcommand, Debug)]
pub enum PortfolioCommand {
    /// Show the portfolio snapshot
    Show,
    /// Set capital, leverage or equity
    Set(SetArgs),
    /// Allow trading again after a lock
    Unlock,
    /// Start a new peak from the current equity
    ResetDrawdown,
    /// Zero a period PnL at the start of a new day, week or month
    ResetPeriod {
        /// daily, weekly or monthly
        period: PeriodArg,
    },
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[arg(long)]
    pub capital: Option<Decimal>,
    #[arg(long)]
    pub leverage: Option<Decimal>,
    #[arg(long)]
    pub equity: Option<Decimal>,
}

impl SetArgs {
    /// Partial update for the given flags, rejecting an invalid account
    pub fn update(&self) -> anyhow::Result<PortfolioUpdate> {
        if let Some(capital) = self.capital {
            anyhow::ensure!(capital > Decimal::ZERO, "Capital must be positive");
        }
        if let Some(leverage) = self.leverage {
            anyhow::ensure!(leverage >= Decimal::ONE, "Leverage must be at least 1");
        }
        Ok(PortfolioUpdate {
            capital: self.capital,
            leverage: self.leverage,
            current_equity: self.equity,
            ..Default::default()
        })
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum PeriodArg {
    Daily,
    Weekly,
    Monthly,
}

impl From<PeriodArg> for Period {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Daily => Period::Daily,
            PeriodArg::Weekly => Period::Weekly,
            PeriodArg::Monthly => Period::Monthly,
        }
    }
}

impl PortfolioCommand {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (store, mut state) = load_state(config)?;
        let p = &state.portfolio;

        let next = match self {
            PortfolioCommand::Show => {
                println!("Capital:           {:.2}", p.capital);
                println!("Leverage:          {}x", p.leverage);
                println!("Effective capital: {:.2}", p.effective_capital);
                println!("Equity:            {:.2} (peak {:.2})", p.current_equity, p.peak_equity);
                println!("P&L day/week/month: {:+.2} / {:+.2} / {:+.2}", p.daily_pnl, p.weekly_pnl, p.monthly_pnl);
                println!("Drawdown:          {:.2}% (max {:.2}%)", p.drawdown, p.max_drawdown);
                println!(
                    "Risk per trade:    {}%",
                    adjusted_risk_for_drawdown(state.limits.risk_per_trade, p.drawdown).normalize()
                );
                match (p.is_trading_locked, &p.lock_reason) {
                    (true, Some(reason)) => println!("Trading:           LOCKED ({})", reason),
                    (true, None) => println!("Trading:           LOCKED"),
                    (false, _) => println!("Trading:           open"),
                }
                return Ok(());
            }
            PortfolioCommand::Set(args) => p.apply(args.update()?),
            PortfolioCommand::Unlock => p.unlock(),
            PortfolioCommand::ResetDrawdown => p.reset_drawdown(),
            PortfolioCommand::ResetPeriod { period } => p.reset_period((*period).into()),
        };

        tracing::info!(command = ?self, "Portfolio updated");
        state.portfolio = next;
        store.save_state(&state)?;
        Ok(())
    }
}
