//! Application state and the trade-close transaction

use super::{JournalError, NewTrade, Trade, TradeId};
use crate::analytics::{analyze_performance, PerformanceMetrics};
use crate::risk::{check_loss_limits, PortfolioState, PortfolioUpdate, RiskLimits};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Fold a realized PnL into the portfolio as one transition.
///
/// Capital, equity and every period accumulator move by `pnl`, then the
/// derived drawdown fields are recomputed from the same snapshot.
pub fn apply_trade_close(portfolio: &PortfolioState, pnl: Decimal) -> PortfolioState {
    portfolio.apply(PortfolioUpdate {
        capital: Some(portfolio.capital + pnl),
        current_equity: Some(portfolio.current_equity + pnl),
        daily_pnl: Some(portfolio.daily_pnl + pnl),
        weekly_pnl: Some(portfolio.weekly_pnl + pnl),
        monthly_pnl: Some(portfolio.monthly_pnl + pnl),
        ..Default::default()
    })
}

/// Everything the desk persists: the journal, the account and the limits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub trades: Vec<Trade>,
    pub portfolio: PortfolioState,
    pub limits: RiskLimits,
}

impl AppState {
    /// Create state for a fresh account
    pub fn new(portfolio: PortfolioState, limits: RiskLimits) -> Self {
        Self {
            trades: vec![],
            portfolio,
            limits,
        }
    }

    /// Log a new open trade
    pub fn open_trade(&mut self, new: NewTrade) -> Result<&Trade, JournalError> {
        let trade = Trade::open(new)?;
        info!(
            id = %trade.id,
            instrument = %trade.instrument,
            side = %trade.side,
            quantity = trade.quantity,
            "Trade opened"
        );
        self.trades.push(trade);
        Ok(&self.trades[self.trades.len() - 1])
    }

    /// Close a trade and update the portfolio in one step.
    ///
    /// Locks trading when the realized loss breaches a period limit.
    pub fn close_trade(&mut self, id: TradeId, exit_price: Decimal) -> Result<Trade, JournalError> {
        let index = self.position(id)?;
        let closed = self.trades[index].close(exit_price)?;
        let pnl = closed.pnl.unwrap_or_default();

        let mut portfolio = apply_trade_close(&self.portfolio, pnl);
        if !portfolio.is_trading_locked {
            if let Some(reason) = check_loss_limits(&portfolio, &self.limits) {
                warn!(%reason, "Loss limit breached, locking trading");
                portfolio = portfolio.lock(reason.to_string());
            }
        }

        info!(
            id = %closed.id,
            pnl = %pnl,
            equity = %portfolio.current_equity,
            drawdown = %portfolio.drawdown,
            "Trade closed"
        );

        self.trades[index] = closed.clone();
        self.portfolio = portfolio;
        Ok(closed)
    }

    /// Cancel an open trade
    pub fn cancel_trade(&mut self, id: TradeId) -> Result<Trade, JournalError> {
        let index = self.position(id)?;
        let cancelled = self.trades[index].cancel()?;
        info!(id = %cancelled.id, "Trade cancelled");
        self.trades[index] = cancelled.clone();
        Ok(cancelled)
    }

    /// Look up a trade by id
    pub fn trade(&self, id: TradeId) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// Open trades in journal order
    pub fn open_trades(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter().filter(|t| t.is_open())
    }

    /// Performance over the whole journal
    pub fn metrics(&self) -> PerformanceMetrics {
        analyze_performance(&self.trades)
    }

    fn position(&self, id: TradeId) -> Result<usize, JournalError> {
        self.trades
            .iter()
            .position(|t| t.id == id)
            .ok_or(JournalError::NotFound(id))
    }
}
