//! Configuration types for tradeguard

use crate::risk::{MarginEstimator, PortfolioState, RiskError, RiskLimits};
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: RiskLimits,
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub margin: MarginConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Starting account used when nothing is stored yet
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_initial_capital")]
    pub initial_capital: Decimal,
    #[serde(default = "default_leverage")]
    pub leverage: Decimal,
}

fn default_initial_capital() -> Decimal {
    dec!(100000)
}
fn default_leverage() -> Decimal {
    dec!(1)
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            initial_capital: default_initial_capital(),
            leverage: default_leverage(),
        }
    }
}

impl PortfolioConfig {
    /// Fresh portfolio snapshot for this account
    pub fn initial_state(&self) -> PortfolioState {
        PortfolioState::new(self.initial_capital, self.leverage)
    }
}

/// Margin policy rates
#[derive(Debug, Clone, Deserialize)]
pub struct MarginConfig {
    #[serde(default = "default_futures_rate")]
    pub futures_rate: Decimal,
    #[serde(default = "default_options_sell_rate")]
    pub options_sell_rate: Decimal,
}

fn default_futures_rate() -> Decimal {
    crate::risk::FUTURES_MARGIN_RATE
}
fn default_options_sell_rate() -> Decimal {
    crate::risk::OPTIONS_SELL_MARGIN_RATE
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            futures_rate: default_futures_rate(),
            options_sell_rate: default_options_sell_rate(),
        }
    }
}

impl MarginConfig {
    pub fn estimator(&self) -> MarginEstimator {
        MarginEstimator::new(self.futures_rate, self.options_sell_rate)
    }
}

/// Local storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject limits and accounts the risk engine cannot work with
    pub fn validate(&self) -> Result<(), RiskError> {
        self.limits.validate()?;
        if self.portfolio.initial_capital <= dec!(0) {
            return Err(RiskError::NonPositiveCapital(self.portfolio.initial_capital));
        }
        if self.portfolio.leverage < dec!(1) {
            return Err(RiskError::LeverageBelowOne(self.portfolio.leverage));
        }
        Ok(())
    }
}
