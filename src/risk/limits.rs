//! Loss limits and trading locks

use super::{PortfolioState, RiskError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk limits, all expressed as percentages of capital
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskLimits {
    /// Maximum risk on a single trade
    pub risk_per_trade: Decimal,
    /// Maximum realized loss per day
    pub daily_loss_limit: Decimal,
    /// Maximum realized loss per week
    pub weekly_loss_limit: Decimal,
    /// Maximum realized loss per month
    pub monthly_loss_limit: Decimal,
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            risk_per_trade: dec!(1),
            daily_loss_limit: dec!(3),
            weekly_loss_limit: dec!(6),
            monthly_loss_limit: dec!(10),
        }
    }
}

impl RiskLimits {
    /// Check that every limit is strictly positive
    pub fn validate(&self) -> Result<(), RiskError> {
        let fields = [
            ("risk_per_trade", self.risk_per_trade),
            ("daily_loss_limit", self.daily_loss_limit),
            ("weekly_loss_limit", self.weekly_loss_limit),
            ("monthly_loss_limit", self.monthly_loss_limit),
        ];
        for (name, value) in fields {
            if value <= dec!(0) {
                return Err(RiskError::NonPositiveLimit { name, value });
            }
        }
        Ok(())
    }
}

/// Accounting period for a PnL accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// All periods in evaluation order
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
        }
    }

    /// PnL accumulated over this period
    pub fn pnl(&self, portfolio: &PortfolioState) -> Decimal {
        match self {
            Period::Daily => portfolio.daily_pnl,
            Period::Weekly => portfolio.weekly_pnl,
            Period::Monthly => portfolio.monthly_pnl,
        }
    }

    /// Loss limit for this period
    pub fn limit(&self, limits: &RiskLimits) -> Decimal {
        match self {
            Period::Daily => limits.daily_loss_limit,
            Period::Weekly => limits.weekly_loss_limit,
            Period::Monthly => limits.monthly_loss_limit,
        }
    }
}

/// Reason for locking the trading desk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LockReason {
    /// Daily loss limit reached (loss as % of capital)
    DailyLossLimit(Decimal),
    /// Weekly loss limit reached
    WeeklyLossLimit(Decimal),
    /// Monthly loss limit reached
    MonthlyLossLimit(Decimal),
}

impl LockReason {
    fn for_period(period: Period, loss_pct: Decimal) -> Self {
        match period {
            Period::Daily => LockReason::DailyLossLimit(loss_pct),
            Period::Weekly => LockReason::WeeklyLossLimit(loss_pct),
            Period::Monthly => LockReason::MonthlyLossLimit(loss_pct),
        }
    }
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (period, pct) = match self {
            LockReason::DailyLossLimit(pct) => ("Daily", pct),
            LockReason::WeeklyLossLimit(pct) => ("Weekly", pct),
            LockReason::MonthlyLossLimit(pct) => ("Monthly", pct),
        };
        write!(f, "{} loss limit hit ({}% of capital)", period, pct.round_dp(2).normalize())
    }
}

/// Realized loss over a period as a percentage of capital.
///
/// Returns `None` when the period is flat or profitable, or when capital
/// is not positive.
pub fn period_loss_pct(portfolio: &PortfolioState, period: Period) -> Option<Decimal> {
    let pnl = period.pnl(portfolio);
    if pnl >= dec!(0) || portfolio.capital <= dec!(0) {
        return None;
    }
    Some(pnl.abs() / portfolio.capital * dec!(100))
}

/// Find the first loss limit breached by the portfolio, checking daily,
/// then weekly, then monthly.
pub fn check_loss_limits(portfolio: &PortfolioState, limits: &RiskLimits) -> Option<LockReason> {
    Period::ALL.into_iter().find_map(|period| {
        let loss_pct = period_loss_pct(portfolio, period)?;
        (loss_pct >= period.limit(limits)).then(|| LockReason::for_period(period, loss_pct))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio_with_pnl(daily: Decimal, weekly: Decimal, monthly: Decimal) -> PortfolioState {
        let mut portfolio = PortfolioState::new(dec!(100000), dec!(1));
        portfolio.daily_pnl = daily;
        portfolio.weekly_pnl = weekly;
        portfolio.monthly_pnl = monthly;
        portfolio
    }

    #[test]
    fn test_default_limits_are_valid() {
        assert!(RiskLimits::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let limits = RiskLimits {
            weekly_loss_limit: dec!(-1),
            ..RiskLimits::default()
        };
        assert_eq!(
            limits.validate(),
            Err(RiskError::NonPositiveLimit {
                name: "weekly_loss_limit",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn test_no_lock_when_profitable() {
        let portfolio = portfolio_with_pnl(dec!(5000), dec!(5000), dec!(5000));
        assert_eq!(check_loss_limits(&portfolio, &RiskLimits::default()), None);
    }

    #[test]
    fn test_daily_limit_exactly_reached() {
        // 3000 / 100000 = 3% == daily limit
        let portfolio = portfolio_with_pnl(dec!(-3000), dec!(-3000), dec!(-3000));
        let reason = check_loss_limits(&portfolio, &RiskLimits::default());
        assert_eq!(reason, Some(LockReason::DailyLossLimit(dec!(3))));
    }

    #[test]
    fn test_weekly_breach_after_daily_reset() {
        let portfolio = portfolio_with_pnl(dec!(0), dec!(-6500), dec!(-6500));
        let reason = check_loss_limits(&portfolio, &RiskLimits::default());
        assert_eq!(reason, Some(LockReason::WeeklyLossLimit(dec!(6.5))));
    }

    #[test]
    fn test_monthly_breach() {
        let portfolio = portfolio_with_pnl(dec!(-100), dec!(-100), dec!(-12000));
        let reason = check_loss_limits(&portfolio, &RiskLimits::default());
        assert!(matches!(reason, Some(LockReason::MonthlyLossLimit(_))));
    }

    #[test]
    fn test_lock_reason_display() {
        let reason = LockReason::DailyLossLimit(dec!(3.456));
        assert_eq!(reason.to_string(), "Daily loss limit hit (3.46% of capital)");
    }

    #[test]
    fn test_period_loss_pct_zero_capital() {
        let mut portfolio = portfolio_with_pnl(dec!(-10), dec!(0), dec!(0));
        portfolio.capital = dec!(0);
        assert_eq!(period_loss_pct(&portfolio, Period::Daily), None);
    }
}
