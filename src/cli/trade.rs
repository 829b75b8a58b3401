//! Trade command implementations

use super::load_state;
use super::validate::print_validation;
use crate::analytics::trade_risk_pct;
use crate::config::Config;
use crate::journal::{NewTrade, TradeId, TradeSide};
use crate::risk::validate_trade;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

#[derive(Subcommand, Debug)]
pub enum TradeCommand {
    /// Log a new open trade (validated first)
    Open(OpenArgs),
    /// Close an open trade at an exit price
    Close(CloseArgs),
    /// Cancel an open trade
    Cancel(CancelArgs),
    /// List the journal
    List,
}

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Instrument label
    #[arg(long)]
    pub instrument: String,

    /// long or short
    #[arg(long)]
    pub side: TradeSide,

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

    /// Trade date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct CloseArgs {
    /// Trade id
    pub id: TradeId,

    /// Exit price
    #[arg(long)]
    pub exit: Decimal,
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Trade id
    pub id: TradeId,
}

impl TradeCommand {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let (store, mut state) = load_state(config)?;

        match self {
            TradeCommand::Open(args) => {
                let new = NewTrade {
                    date: args.date.unwrap_or_else(|| Local::now().date_naive()),
                    instrument: args.instrument.clone(),
                    side: args.side,
                    entry_price: args.entry,
                    stop_loss: args.stop,
                    target: args.target,
                    quantity: args.qty,
                    notes: args.notes.clone(),
                };
                let risk_pct = trade_risk_pct(args.entry, args.stop, args.qty, state.portfolio.capital);
                let trade = state.open_trade(new)?.clone();

                let result = validate_trade(trade.risk_reward, risk_pct, &state.limits, &state.portfolio);
                print_validation(&result);
                if !result.is_valid {
                    anyhow::bail!("Trade rejected with {} error(s)", result.errors.len());
                }

                store.save_state(&state)?;
                println!("Opened {} (RR 1:{:.2})", trade.id, trade.risk_reward);
            }
            TradeCommand::Close(args) => {
                let closed = state.close_trade(args.id, args.exit)?;
                store.save_state(&state)?;
                println!("Closed {} with P&L {:+.2}", closed.id, closed.pnl.unwrap_or_default());
                if let Some(reason) = &state.portfolio.lock_reason {
                    println!("Trading locked: {}", reason);
                }
            }
            TradeCommand::Cancel(args) => {
                let cancelled = state.cancel_trade(args.id)?;
                store.save_state(&state)?;
                println!("Cancelled {}", cancelled.id);
            }
            TradeCommand::List => {
                for t in &state.trades {
                    let pnl = t.pnl.map(|p| format!("{:+.2}", p)).unwrap_or_default();
                    println!(
                        "{}  {}  {:<12} {:<5} {:>5} @ {:<10} {:<9} {}",
                        t.id, t.date, t.instrument, t.side, t.quantity, t.entry_price, t.status, pnl
                    );
                }
            }
        }
        Ok(())
    }
}
