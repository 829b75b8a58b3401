//! JSON file store with one document per key

use super::StoreError;
use crate::journal::{AppState, Trade};
use crate::risk::{PortfolioState, RiskLimits};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key holding the trade journal
pub const TRADES_KEY: &str = "trades";
/// Key holding the portfolio snapshot
pub const PORTFOLIO_KEY: &str = "portfolio";
/// Key holding the risk limits
pub const RISK_LIMITS_KEY: &str = "risk_limits";

/// Key-value store backed by `<dir>/<key>.json` files
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `dir`. Nothing touches disk until a save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load a document; a missing file is `None`
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key, "No stored document");
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Json {
                path: path.display().to_string(),
                source,
            })
    }

    /// Save a document, creating the directory if needed
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path(key);
        let io_err = |source| StoreError::Io {
            path: path.display().to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })?;
        fs::write(&path, json).map_err(io_err)?;
        debug!(key, path = %path.display(), "Saved document");
        Ok(())
    }

    /// Load the full application state, using the defaults for missing keys
    pub fn load_state(
        &self,
        default_portfolio: PortfolioState,
        default_limits: RiskLimits,
    ) -> Result<AppState, StoreError> {
        let trades: Vec<Trade> = self.load(TRADES_KEY)?.unwrap_or_default();
        let portfolio = self.load(PORTFOLIO_KEY)?.unwrap_or(default_portfolio);
        let limits = self.load(RISK_LIMITS_KEY)?.unwrap_or(default_limits);
        debug!(trades = trades.len(), "Loaded state");
        Ok(AppState {
            trades,
            portfolio,
            limits,
        })
    }

    /// Persist every key of the application state
    pub fn save_state(&self, state: &AppState) -> Result<(), StoreError> {
        self.save(TRADES_KEY, &state.trades)?;
        self.save(PORTFOLIO_KEY, &state.portfolio)?;
        self.save(RISK_LIMITS_KEY, &state.limits)?;
        Ok(())
    }
}
