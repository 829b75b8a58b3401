//! Approximate margin for derivatives
//!
//! Flat percentages stand in for an exchange SPAN schedule. They are policy
//! constants, not a risk model.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Futures margin as a fraction of contract value
pub const FUTURES_MARGIN_RATE: Decimal = dec!(0.12);
/// Short option margin as a fraction of contract value (premium added on top)
pub const OPTIONS_SELL_MARGIN_RATE: Decimal = dec!(0.15);

/// Derivative instrument kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentType {
    Futures,
    OptionsBuy,
    OptionsSell,
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InstrumentType::Futures => "FUTURES",
            InstrumentType::OptionsBuy => "OPTIONS_BUY",
            InstrumentType::OptionsSell => "OPTIONS_SELL",
        };
        f.write_str(s)
    }
}

impl FromStr for InstrumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "FUTURES" => Ok(InstrumentType::Futures),
            "OPTIONS_BUY" => Ok(InstrumentType::OptionsBuy),
            "OPTIONS_SELL" => Ok(InstrumentType::OptionsSell),
            other => Err(format!("unknown instrument type: {}", other)),
        }
    }
}

/// Inputs for a margin estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginParams {
    /// Underlying or contract price
    pub price: Decimal,
    /// Number of lots
    pub quantity: Decimal,
    /// Instrument kind
    pub instrument: InstrumentType,
    /// Option premium per unit
    pub premium: Option<Decimal>,
    /// Units per lot
    pub lot_size: Decimal,
}

impl MarginParams {
    /// Create params with a lot size of 1 and no premium
    pub fn new(price: Decimal, quantity: Decimal, instrument: InstrumentType) -> Self {
        Self {
            price,
            quantity,
            instrument,
            premium: None,
            lot_size: dec!(1),
        }
    }

    /// Set option premium
    pub fn with_premium(mut self, premium: Decimal) -> Self {
        self.premium = Some(premium);
        self
    }

    /// Set lot size
    pub fn with_lot_size(mut self, lot_size: Decimal) -> Self {
        self.lot_size = lot_size;
        self
    }
}

/// Margin estimate; only the field for the requested instrument is non-zero
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarginResult {
    pub futures_margin: Decimal,
    pub options_premium: Decimal,
    pub options_selling_margin: Decimal,
    /// price x quantity x lot size, for every instrument
    pub total_exposure: Decimal,
}

/// Margin calculator with configurable policy rates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginEstimator {
    pub futures_rate: Decimal,
    pub options_sell_rate: Decimal,
}

impl MarginEstimator {
    /// Create an estimator with custom rates
    pub fn new(futures_rate: Decimal, options_sell_rate: Decimal) -> Self {
        Self {
            futures_rate,
            options_sell_rate,
        }
    }

    /// Estimate margin for a position
    pub fn estimate(&self, params: &MarginParams) -> MarginResult {
        let units = params.quantity * params.lot_size;
        let contract_value = params.price * units;
        let premium_value = params.premium.unwrap_or(dec!(0)) * units;

        let mut result = MarginResult {
            total_exposure: contract_value,
            ..Default::default()
        };
        match params.instrument {
            InstrumentType::Futures => {
                result.futures_margin = contract_value * self.futures_rate;
            }
            InstrumentType::OptionsBuy => {
                result.options_premium = premium_value;
            }
            InstrumentType::OptionsSell => {
                result.options_selling_margin = contract_value * self.options_sell_rate + premium_value;
            }
        }
        result
    }
}

impl Default for MarginEstimator {
    fn default() -> Self {
        Self::new(FUTURES_MARGIN_RATE, OPTIONS_SELL_MARGIN_RATE)
    }
}

/// Estimate margin with the default policy rates
pub fn calculate_margin(params: &MarginParams) -> MarginResult {
    MarginEstimator::default().estimate(params)
}
