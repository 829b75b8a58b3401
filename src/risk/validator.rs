//! Pre-trade validation against risk limits and portfolio state

use super::limits::period_loss_pct;
use super::{Period, PortfolioState, RiskLimits};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Minimum acceptable reward-to-risk ratio
pub const MIN_RISK_REWARD: Decimal = dec!(2);
/// Drawdown above which a caution is raised
pub const DRAWDOWN_WARNING_PCT: Decimal = dec!(10);
/// Drawdown above which new trades are rejected
pub const DRAWDOWN_STOP_PCT: Decimal = dec!(20);

fn rounded(value: Decimal) -> Decimal {
    value.round_dp(2).normalize()
}

/// Outcome of validating a proposed trade.
///
/// Errors block the trade, warnings are informational. Messages keep the
/// order in which the rules were evaluated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate a proposed trade.
///
/// `risk_reward` is reward / risk for the trade, `risk_pct` the amount at risk
/// as a percentage of capital.
pub fn validate_trade(
    risk_reward: Decimal,
    risk_pct: Decimal,
    limits: &RiskLimits,
    portfolio: &PortfolioState,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if risk_reward < MIN_RISK_REWARD {
        errors.push(format!(
            "Risk-reward ratio 1:{} is below minimum 1:2",
            rounded(risk_reward)
        ));
    }

    if risk_pct > limits.risk_per_trade {
        errors.push(format!(
            "Risk per trade {}% exceeds limit of {}%",
            rounded(risk_pct),
            limits.risk_per_trade.normalize()
        ));
    }

    for period in Period::ALL {
        if let Some(loss_pct) = period_loss_pct(portfolio, period) {
            let limit = period.limit(limits);
            if loss_pct >= limit {
                errors.push(format!(
                    "{} loss limit reached: {}% lost (limit {}%)",
                    period.label(),
                    rounded(loss_pct),
                    limit.normalize()
                ));
            }
        }
    }

    if portfolio.drawdown > DRAWDOWN_WARNING_PCT {
        warnings.push(format!(
            "Drawdown at {}%, consider reducing position size",
            rounded(portfolio.drawdown)
        ));
    }
    if portfolio.drawdown > DRAWDOWN_STOP_PCT {
        errors.push(format!(
            "Drawdown at {}% exceeds 20%, stop trading and review",
            rounded(portfolio.drawdown)
        ));
    }

    if portfolio.is_trading_locked {
        let reason = portfolio.lock_reason.as_deref().unwrap_or("no reason given");
        errors.push(format!("Trading is locked: {}", reason));
    }

    if !errors.is_empty() {
        tracing::debug!(errors = errors.len(), warnings = warnings.len(), "Trade rejected");
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::PortfolioUpdate;

    fn clean_portfolio() -> PortfolioState {
        PortfolioState::new(dec!(100000), dec!(1))
    }

    #[test]
    fn test_valid_trade() {
        let result = validate_trade(dec!(2.5), dec!(1), &RiskLimits::default(), &clean_portfolio());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_low_risk_reward_only_error() {
        let result = validate_trade(dec!(1.5), dec!(0.5), &RiskLimits::default(), &clean_portfolio());
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Risk-reward ratio 1:1.5 is below minimum 1:2"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_exactly_two_is_accepted() {
        let result = validate_trade(dec!(2), dec!(1), &RiskLimits::default(), &clean_portfolio());
        assert!(result.is_valid);
    }

    #[test]
    fn test_risk_over_limit() {
        let result = validate_trade(dec!(3), dec!(1.5), &RiskLimits::default(), &clean_portfolio());
        assert_eq!(result.errors, vec!["Risk per trade 1.5% exceeds limit of 1%"]);
    }

    #[test]
    fn test_period_losses_in_order() {
        let portfolio = clean_portfolio().apply(PortfolioUpdate {
            daily_pnl: Some(dec!(-3000)),
            weekly_pnl: Some(dec!(-6000)),
            monthly_pnl: Some(dec!(-6000)),
            ..Default::default()
        });
        let result = validate_trade(dec!(3), dec!(1), &RiskLimits::default(), &portfolio);
        assert_eq!(
            result.errors,
            vec![
                "Daily loss limit reached: 3% lost (limit 3%)",
                "Weekly loss limit reached: 6% lost (limit 6%)",
            ]
        );
    }

    #[test]
    fn test_profit_never_breaches() {
        let portfolio = clean_portfolio().apply(PortfolioUpdate {
            daily_pnl: Some(dec!(50000)),
            ..Default::default()
        });
        assert!(validate_trade(dec!(3), dec!(1), &RiskLimits::default(), &portfolio).is_valid);
    }

    #[test]
    fn test_drawdown_warning_only() {
        let portfolio = clean_portfolio().apply(PortfolioUpdate {
            current_equity: Some(dec!(88000)),
            ..Default::default()
        });
        let result = validate_trade(dec!(3), dec!(1), &RiskLimits::default(), &portfolio);
        assert!(result.is_valid);
        assert_eq!(
            result.warnings,
            vec!["Drawdown at 12%, consider reducing position size"]
        );
    }

    #[test]
    fn test_exactly_ten_percent_drawdown_is_silent() {
        let portfolio = clean_portfolio().apply(PortfolioUpdate {
            current_equity: Some(dec!(90000)),
            ..Default::default()
        });
        let result = validate_trade(dec!(3), dec!(1), &RiskLimits::default(), &portfolio);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_deep_drawdown_warns_and_blocks() {
        let portfolio = clean_portfolio().apply(PortfolioUpdate {
            current_equity: Some(dec!(75000)),
            ..Default::default()
        });
        let result = validate_trade(dec!(3), dec!(1), &RiskLimits::default(), &portfolio);
        assert!(!result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(
            result.errors,
            vec!["Drawdown at 25% exceeds 20%, stop trading and review"]
        );
    }

    #[test]
    fn test_locked_portfolio() {
        let portfolio = clean_portfolio().lock("Daily loss limit hit (3% of capital)");
        let result = validate_trade(dec!(3), dec!(1), &RiskLimits::default(), &portfolio);
        assert_eq!(
            result.errors,
            vec!["Trading is locked: Daily loss limit hit (3% of capital)"]
        );
    }

    #[test]
    fn test_warnings_never_block() {
        let portfolio = clean_portfolio().apply(PortfolioUpdate {
            current_equity: Some(dec!(85000)),
            ..Default::default()
        });
        let result = validate_trade(dec!(2), dec!(0.5), &RiskLimits::default(), &portfolio);
        assert!(!result.warnings.is_empty());
        assert!(result.is_valid);
    }
}
