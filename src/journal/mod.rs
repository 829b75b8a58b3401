//! Trade journal
//!
//! Trade records, the application state container that ties the journal
//! to the portfolio, and CSV export.

mod export;
mod ledger;
mod trade;

pub use export::{trades_to_csv_string, write_trades_csv, CSV_HEADER};
pub use ledger::{apply_trade_close, AppState};
pub use trade::{NewTrade, Trade, TradeId, TradeSide, TradeStatus};

use thiserror::Error;

/// Journal errors
#[derive(Debug, Error)]
pub enum JournalError {
    /// No trade with this id
    #[error("Trade not found: {0}")]
    NotFound(TradeId),
    /// Trade already closed or cancelled
    #[error("Trade {id} is {status}, not OPEN")]
    NotOpen { id: TradeId, status: TradeStatus },
    /// Quantity must be a positive integer
    #[error("Quantity must be positive")]
    InvalidQuantity,
}
