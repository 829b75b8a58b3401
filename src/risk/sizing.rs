//! Position sizing from a fixed risk budget
//!
//! Quantity is the number of units whose stop-loss distance fits inside the
//! risk amount. The quantity is floored, so the realized loss at the stop
//! never exceeds the budget.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Reward multiple assumed for `max_profit`, independent of the actual target
pub const MIN_REWARD_MULTIPLE: Decimal = dec!(2);

/// Inputs for position sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionSizeParams {
    /// Account capital
    pub capital: Decimal,
    /// Risk per trade as a percentage of capital
    pub risk_pct: Decimal,
    /// Stop-loss distance as a percentage of entry price
    pub stop_loss_pct: Decimal,
    /// Entry price
    pub entry_price: Decimal,
    /// Leverage multiplier
    pub leverage: Decimal,
}

impl PositionSizeParams {
    /// Create unlevered sizing params
    pub fn new(capital: Decimal, risk_pct: Decimal, stop_loss_pct: Decimal, entry_price: Decimal) -> Self {
        Self {
            capital,
            risk_pct,
            stop_loss_pct,
            entry_price,
            leverage: dec!(1),
        }
    }

    /// Set leverage
    pub fn with_leverage(mut self, leverage: Decimal) -> Self {
        self.leverage = leverage;
        self
    }
}

/// Result of position sizing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizeResult {
    /// Whole units to buy or sell
    pub quantity: Decimal,
    /// quantity x entry price
    pub position_size: Decimal,
    /// Position size divided by leverage
    pub margin_required: Decimal,
    /// Loss if the stop is hit
    pub max_loss: Decimal,
    /// Profit at the minimum 1:2 reward
    pub max_profit: Decimal,
    /// Capital put at risk
    pub risk_amount: Decimal,
}

/// Size a position. Degenerate inputs produce a zero quantity rather than an error.
pub fn calculate_position_size(params: &PositionSizeParams) -> PositionSizeResult {
    let risk_amount = params.capital * params.risk_pct / dec!(100);
    let stop_loss_amount = params.entry_price * params.stop_loss_pct / dec!(100);

    let quantity = if stop_loss_amount > dec!(0) {
        (risk_amount / stop_loss_amount).floor()
    } else {
        tracing::debug!(
            stop_loss_pct = %params.stop_loss_pct,
            "Zero stop-loss distance, sizing to zero"
        );
        dec!(0)
    };

    let position_size = quantity * params.entry_price;
    let margin_required = if params.leverage > dec!(0) {
        position_size / params.leverage
    } else {
        position_size
    };

    PositionSizeResult {
        quantity,
        position_size,
        margin_required,
        max_loss: risk_amount,
        max_profit: risk_amount * MIN_REWARD_MULTIPLE,
        risk_amount,
    }
}
