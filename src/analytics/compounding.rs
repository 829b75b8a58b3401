//! Capital growth projections and planning helpers

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Capital at the end of one projected month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundingStep {
    /// 1-based month number
    pub month: u32,
    /// Capital after this month's return
    pub capital: Decimal,
    /// Profit made this month
    pub profit: Decimal,
    /// Profit since the start
    pub cumulative_profit: Decimal,
}

/// Project capital compounding at a fixed monthly return.
///
/// Returns one step per month, in order. Values are not rounded. The path
/// stops early at the first month whose capital no longer fits a `Decimal`.
pub fn calculate_compounding(
    start_capital: Decimal,
    monthly_return_pct: Decimal,
    months: u32,
) -> Vec<CompoundingStep> {
    let mut capital = start_capital;
    let mut cumulative_profit = dec!(0);
    let mut steps = Vec::new();

    for month in 1..=months {
        let next = capital.checked_mul(monthly_return_pct).and_then(|raw| {
            let profit = raw / dec!(100);
            Some((profit, capital.checked_add(profit)?, cumulative_profit.checked_add(profit)?))
        });
        let Some((profit, next_capital, next_cumulative)) = next else {
            tracing::warn!(month, "Compounded capital overflowed, projection truncated");
            break;
        };
        capital = next_capital;
        cumulative_profit = next_cumulative;
        steps.push(CompoundingStep {
            month,
            capital,
            profit,
            cumulative_profit,
        });
    }
    steps
}

/// Monthly return (%) needed to grow `current` into `target` over `months`.
///
/// Zero when the inputs are non-positive or the target is not above the
/// current capital.
pub fn required_monthly_return(current: Decimal, target: Decimal, months: u32) -> Decimal {
    if current <= dec!(0) || target <= dec!(0) || months == 0 || target <= current {
        return dec!(0);
    }

    let ratio: f64 = (target / current).try_into().unwrap_or(0.0);
    if ratio <= 0.0 {
        return dec!(0);
    }
    let monthly = ratio.powf(1.0 / months as f64) - 1.0;
    Decimal::try_from(monthly * 100.0).unwrap_or(dec!(0))
}

/// Reward-to-risk ratio: target distance over stop distance.
///
/// Zero when the stop sits on the entry.
pub fn risk_reward_ratio(entry: Decimal, stop_loss: Decimal, target: Decimal) -> Decimal {
    let risk = (entry - stop_loss).abs();
    if risk == dec!(0) {
        return dec!(0);
    }
    (target - entry).abs() / risk
}

/// Capital at risk on a trade, as a percentage of capital
pub fn trade_risk_pct(entry: Decimal, stop_loss: Decimal, quantity: u32, capital: Decimal) -> Decimal {
    if capital <= dec!(0) {
        return dec!(0);
    }
    (entry - stop_loss).abs() * Decimal::from(quantity) / capital * dec!(100)
}
