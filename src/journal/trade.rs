//! Trade records and their lifecycle

use super::JournalError;
use crate::analytics::risk_reward_ratio;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Trade identifier
pub type TradeId = Uuid;

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeSide {
    Long,
    Short,
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TradeSide::Long => "LONG",
            TradeSide::Short => "SHORT",
        })
    }
}

impl FromStr for TradeSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LONG" | "BUY" => Ok(TradeSide::Long),
            "SHORT" | "SELL" => Ok(TradeSide::Short),
            other => Err(format!("unknown side: {}", other)),
        }
    }
}

/// Trade lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Open,
    Closed,
    Cancelled,
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TradeStatus::Open => "OPEN",
            TradeStatus::Closed => "CLOSED",
            TradeStatus::Cancelled => "CANCELLED",
        })
    }
}

/// Fields supplied when logging a new trade
#[derive(Debug, Clone)]
pub struct NewTrade {
    pub date: NaiveDate,
    pub instrument: String,
    pub side: TradeSide,
    pub entry_price: Decimal,
    pub stop_loss: Decimal,
    pub target: Decimal,
    pub quantity: u32,
    pub notes: Option<String>,
}

/// A journal entry.
///
/// `exit_price` and `pnl` are set exactly when the trade is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub date: NaiveDate,
    pub instrument: String,
    pub side: TradeSide,
    pub entry_price: Decimal,
    pub stop_loss: Decimal,
    pub target: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl: Option<Decimal>,
    /// Reward-to-risk fixed at entry
    pub risk_reward: Decimal,
    pub status: TradeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trade {
    /// Log a new open trade
    pub fn open(new: NewTrade) -> Result<Self, JournalError> {
        if new.quantity == 0 {
            return Err(JournalError::InvalidQuantity);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            date: new.date,
            risk_reward: risk_reward_ratio(new.entry_price, new.stop_loss, new.target),
            instrument: new.instrument,
            side: new.side,
            entry_price: new.entry_price,
            stop_loss: new.stop_loss,
            target: new.target,
            quantity: new.quantity,
            exit_price: None,
            pnl: None,
            status: TradeStatus::Open,
            notes: new.notes,
        })
    }

    /// Realized PnL if the trade were exited at `exit_price`
    pub fn pnl_at(&self, exit_price: Decimal) -> Decimal {
        let quantity = Decimal::from(self.quantity);
        match self.side {
            TradeSide::Long => (exit_price - self.entry_price) * quantity,
            TradeSide::Short => (self.entry_price - exit_price) * quantity,
        }
    }

    /// Close the trade at `exit_price`
    pub fn close(&self, exit_price: Decimal) -> Result<Self, JournalError> {
        self.ensure_open()?;
        Ok(Self {
            exit_price: Some(exit_price),
            pnl: Some(self.pnl_at(exit_price)),
            status: TradeStatus::Closed,
            ..self.clone()
        })
    }

    /// Cancel an open trade; nothing is realized
    pub fn cancel(&self) -> Result<Self, JournalError> {
        self.ensure_open()?;
        Ok(Self {
            status: TradeStatus::Cancelled,
            ..self.clone()
        })
    }

    pub fn is_open(&self) -> bool {
        self.status == TradeStatus::Open
    }

    fn ensure_open(&self) -> Result<(), JournalError> {
        if self.is_open() {
            Ok(())
        } else {
            Err(JournalError::NotOpen {
                id: self.id,
                status: self.status,
            })
        }
    }
}
