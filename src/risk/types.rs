//! Risk management types

use rust_decimal::Decimal;
use thiserror::Error;

/// Risk configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum RiskError {
    /// A loss limit or per-trade risk is zero or negative
    #[error("Risk limit {name} must be positive, got {value}")]
    NonPositiveLimit { name: &'static str, value: Decimal },
    /// Starting capital is zero or negative
    #[error("Capital must be positive, got {0}")]
    NonPositiveCapital(Decimal),
    /// Leverage below 1x
    #[error("Leverage must be at least 1, got {0}")]
    LeverageBelowOne(Decimal),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_messages() {
        let err = RiskError::NonPositiveLimit {
            name: "daily_loss_limit",
            value: dec!(0),
        };
        assert_eq!(
            err.to_string(),
            "Risk limit daily_loss_limit must be positive, got 0"
        );
        assert_eq!(
            RiskError::LeverageBelowOne(dec!(0.5)).to_string(),
            "Leverage must be at least 1, got 0.5"
        );
    }
}
