//! Drawdown-based risk scaling and portfolio recomputation

use super::Period;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Risk multiplier for the current drawdown.
///
/// Each tier is half-open on its upper bound, so a drawdown sitting exactly
/// on a boundary falls into the stricter tier.
pub fn drawdown_multiplier(drawdown_pct: Decimal) -> Decimal {
    if drawdown_pct < dec!(5) {
        dec!(1)
    } else if drawdown_pct < dec!(10) {
        dec!(0.75)
    } else if drawdown_pct < dec!(15) {
        dec!(0.5)
    } else if drawdown_pct < dec!(20) {
        dec!(0.25)
    } else {
        dec!(0)
    }
}

/// Scale a base risk percentage down as drawdown deepens. Zero means stop trading.
pub fn adjusted_risk_for_drawdown(base_risk: Decimal, drawdown_pct: Decimal) -> Decimal {
    base_risk * drawdown_multiplier(drawdown_pct)
}

/// Percentage fall of current equity from peak, floored at zero
pub fn drawdown_pct(peak_equity: Decimal, current_equity: Decimal) -> Decimal {
    if peak_equity <= dec!(0) {
        return dec!(0);
    }
    ((peak_equity - current_equity) / peak_equity * dec!(100)).max(dec!(0))
}

/// Snapshot of the trading account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioState {
    /// Account capital
    pub capital: Decimal,
    /// Leverage multiplier (>= 1)
    pub leverage: Decimal,
    /// capital x leverage
    pub effective_capital: Decimal,
    /// Current equity
    pub current_equity: Decimal,
    /// Highest equity reached
    pub peak_equity: Decimal,
    /// Realized PnL today
    pub daily_pnl: Decimal,
    /// Realized PnL this week
    pub weekly_pnl: Decimal,
    /// Realized PnL this month
    pub monthly_pnl: Decimal,
    /// Current drawdown from peak (%)
    pub drawdown: Decimal,
    /// Worst drawdown observed since the last reset (%)
    pub max_drawdown: Decimal,
    /// Whether new trades are blocked
    pub is_trading_locked: bool,
    /// Why trading was locked
    pub lock_reason: Option<String>,
}

/// Partial portfolio update; `None` keeps the previous value
#[derive(Debug, Clone, Default)]
pub struct PortfolioUpdate {
    pub capital: Option<Decimal>,
    pub leverage: Option<Decimal>,
    pub current_equity: Option<Decimal>,
    pub peak_equity: Option<Decimal>,
    pub daily_pnl: Option<Decimal>,
    pub weekly_pnl: Option<Decimal>,
    pub monthly_pnl: Option<Decimal>,
    pub is_trading_locked: Option<bool>,
    pub lock_reason: Option<Option<String>>,
}

impl PortfolioState {
    /// Create a fresh portfolio with equity equal to capital
    pub fn new(capital: Decimal, leverage: Decimal) -> Self {
        Self {
            capital,
            leverage,
            effective_capital: capital * leverage,
            current_equity: capital,
            peak_equity: capital,
            daily_pnl: dec!(0),
            weekly_pnl: dec!(0),
            monthly_pnl: dec!(0),
            drawdown: dec!(0),
            max_drawdown: dec!(0),
            is_trading_locked: false,
            lock_reason: None,
        }
    }

    /// Merge a partial update and recompute the derived fields.
    ///
    /// Effective capital and drawdown are always recomputed, peak equity only
    /// ever rises here, and max drawdown never decreases.
    pub fn apply(&self, update: PortfolioUpdate) -> Self {
        let mut next = self.clone();
        if let Some(capital) = update.capital {
            next.capital = capital;
        }
        if let Some(leverage) = update.leverage {
            next.leverage = leverage;
        }
        if let Some(equity) = update.current_equity {
            next.current_equity = equity;
        }
        if let Some(peak) = update.peak_equity {
            next.peak_equity = peak;
        }
        if let Some(pnl) = update.daily_pnl {
            next.daily_pnl = pnl;
        }
        if let Some(pnl) = update.weekly_pnl {
            next.weekly_pnl = pnl;
        }
        if let Some(pnl) = update.monthly_pnl {
            next.monthly_pnl = pnl;
        }
        if let Some(locked) = update.is_trading_locked {
            next.is_trading_locked = locked;
        }
        if let Some(reason) = update.lock_reason {
            next.lock_reason = reason;
        }

        if next.current_equity > next.peak_equity {
            next.peak_equity = next.current_equity;
        }
        next.effective_capital = next.capital * next.leverage;
        next.drawdown = drawdown_pct(next.peak_equity, next.current_equity);
        next.max_drawdown = self.max_drawdown.max(next.drawdown);
        next
    }

    /// Explicit reset: current equity becomes the new peak
    pub fn reset_drawdown(&self) -> Self {
        Self {
            peak_equity: self.current_equity,
            drawdown: dec!(0),
            max_drawdown: dec!(0),
            ..self.clone()
        }
    }

    /// Start a new accounting period
    pub fn reset_period(&self, period: Period) -> Self {
        let zero = Some(dec!(0));
        let update = match period {
            Period::Daily => PortfolioUpdate {
                daily_pnl: zero,
                ..Default::default()
            },
            Period::Weekly => PortfolioUpdate {
                weekly_pnl: zero,
                ..Default::default()
            },
            Period::Monthly => PortfolioUpdate {
                monthly_pnl: zero,
                ..Default::default()
            },
        };
        self.apply(update)
    }

    /// Block new trades
    pub fn lock(&self, reason: impl Into<String>) -> Self {
        self.apply(PortfolioUpdate {
            is_trading_locked: Some(true),
            lock_reason: Some(Some(reason.into())),
            ..Default::default()
        })
    }

    /// Allow trading again
    pub fn unlock(&self) -> Self {
        self.apply(PortfolioUpdate {
            is_trading_locked: Some(false),
            lock_reason: Some(None),
            ..Default::default()
        })
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new(dec!(100000), dec!(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawdown_tiers() {
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(0)), dec!(1));
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(4.99)), dec!(1));
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(5)), dec!(0.75));
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(9.99)), dec!(0.75));
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(10)), dec!(0.5));
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(15)), dec!(0.25));
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(20)), dec!(0));
        assert_eq!(adjusted_risk_for_drawdown(dec!(1), dec!(45)), dec!(0));
    }

    #[test]
    fn test_adjusted_risk_scales_base() {
        assert_eq!(adjusted_risk_for_drawdown(dec!(2), dec!(12)), dec!(1));
    }

    #[test]
    fn test_new_portfolio() {
        let portfolio = PortfolioState::new(dec!(100000), dec!(5));
        assert_eq!(portfolio.effective_capital, dec!(500000));
        assert_eq!(portfolio.current_equity, dec!(100000));
        assert_eq!(portfolio.peak_equity, dec!(100000));
        assert_eq!(portfolio.drawdown, dec!(0));
        assert!(!portfolio.is_trading_locked);
    }

    #[test]
    fn test_apply_recomputes_drawdown() {
        let portfolio = PortfolioState::new(dec!(100000), dec!(1));
        let next = portfolio.apply(PortfolioUpdate {
            current_equity: Some(dec!(90000)),
            ..Default::default()
        });
        assert_eq!(next.peak_equity, dec!(100000));
        assert_eq!(next.drawdown, dec!(10));
        assert_eq!(next.max_drawdown, dec!(10));
    }

    #[test]
    fn test_peak_rises_and_max_drawdown_sticks() {
        let portfolio = PortfolioState::new(dec!(100000), dec!(1));
        let down = portfolio.apply(PortfolioUpdate {
            current_equity: Some(dec!(80000)),
            ..Default::default()
        });
        assert_eq!(down.max_drawdown, dec!(20));

        let up = down.apply(PortfolioUpdate {
            current_equity: Some(dec!(120000)),
            ..Default::default()
        });
        assert_eq!(up.peak_equity, dec!(120000));
        assert_eq!(up.drawdown, dec!(0));
        assert_eq!(up.max_drawdown, dec!(20));

        let small_dip = up.apply(PortfolioUpdate {
            current_equity: Some(dec!(114000)),
            ..Default::default()
        });
        assert_eq!(small_dip.drawdown, dec!(5));
        assert_eq!(small_dip.max_drawdown, dec!(20));
    }

    #[test]
    fn test_apply_recomputes_effective_capital() {
        let portfolio = PortfolioState::new(dec!(100000), dec!(1));
        let next = portfolio.apply(PortfolioUpdate {
            leverage: Some(dec!(3)),
            ..Default::default()
        });
        assert_eq!(next.effective_capital, dec!(300000));
    }

    #[test]
    fn test_drawdown_zero_peak() {
        assert_eq!(drawdown_pct(dec!(0), dec!(-50)), dec!(0));
        assert_eq!(drawdown_pct(dec!(100), dec!(150)), dec!(0));
    }

    #[test]
    fn test_reset_drawdown() {
        let portfolio = PortfolioState::new(dec!(100000), dec!(1)).apply(PortfolioUpdate {
            current_equity: Some(dec!(85000)),
            ..Default::default()
        });
        let reset = portfolio.reset_drawdown();
        assert_eq!(reset.peak_equity, dec!(85000));
        assert_eq!(reset.drawdown, dec!(0));
        assert_eq!(reset.max_drawdown, dec!(0));
    }

    #[test]
    fn test_reset_period_only_touches_that_period() {
        let portfolio = PortfolioState::new(dec!(100000), dec!(1)).apply(PortfolioUpdate {
            daily_pnl: Some(dec!(-500)),
            weekly_pnl: Some(dec!(-700)),
            monthly_pnl: Some(dec!(-900)),
            ..Default::default()
        });
        let next = portfolio.reset_period(Period::Weekly);
        assert_eq!(next.daily_pnl, dec!(-500));
        assert_eq!(next.weekly_pnl, dec!(0));
        assert_eq!(next.monthly_pnl, dec!(-900));
    }

    #[test]
    fn test_lock_and_unlock() {
        let locked = PortfolioState::default().lock("Daily loss limit hit");
        assert!(locked.is_trading_locked);
        assert_eq!(locked.lock_reason.as_deref(), Some("Daily loss limit hit"));

        let unlocked = locked.unlock();
        assert!(!unlocked.is_trading_locked);
        assert!(unlocked.lock_reason.is_none());
    }
}
