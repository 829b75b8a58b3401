//! Risk management module
//!
//! Position sizing, pre-trade validation, Kelly sizing, margin estimates,
//! drawdown policy and loss-limit locks. Everything here is a pure
//! function of its inputs.

mod drawdown;
mod kelly;
mod limits;
mod margin;
mod sizing;
mod types;
mod validator;

pub use drawdown::{
    adjusted_risk_for_drawdown, drawdown_multiplier, drawdown_pct, PortfolioState, PortfolioUpdate,
};
pub use kelly::{full_kelly_pct, half_kelly_pct, MAX_HALF_KELLY_PCT};
pub use limits::{check_loss_limits, period_loss_pct, LockReason, Period, RiskLimits};
pub use margin::{
    calculate_margin, InstrumentType, MarginEstimator, MarginParams, MarginResult,
    FUTURES_MARGIN_RATE, OPTIONS_SELL_MARGIN_RATE,
};
pub use sizing::{calculate_position_size, PositionSizeParams, PositionSizeResult};
pub use types::RiskError;
pub use validator::{validate_trade, ValidationResult, MIN_RISK_REWARD};
