//! CSV export of the trade journal

use super::Trade;
use rust_decimal::Decimal;
use std::io::Write;

/// Column order of the export
pub const CSV_HEADER: [&str; 12] = [
    "Date",
    "Instrument",
    "Side",
    "Entry",
    "StopLoss",
    "Target",
    "Qty",
    "Exit",
    "P&L",
    "RR",
    "Status",
    "Notes",
];

// Prices print without the scale they were typed with
fn number(value: Decimal) -> String {
    value.normalize().to_string()
}

fn optional(value: Option<Decimal>) -> String {
    value.map(number).unwrap_or_default()
}

fn trade_record(trade: &Trade) -> [String; 12] {
    [
        trade.date.format("%Y-%m-%d").to_string(),
        trade.instrument.clone(),
        trade.side.to_string(),
        number(trade.entry_price),
        number(trade.stop_loss),
        number(trade.target),
        trade.quantity.to_string(),
        optional(trade.exit_price),
        optional(trade.pnl),
        format!("{:.2}", trade.risk_reward.round_dp(2)),
        trade.status.to_string(),
        trade.notes.clone().unwrap_or_default(),
    ]
}

/// Write trades as CSV, one row per trade in journal order
pub fn write_trades_csv<W: Write>(trades: &[Trade], writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for trade in trades {
        wtr.write_record(trade_record(trade))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render trades as a CSV string
pub fn trades_to_csv_string(trades: &[Trade]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_trades_csv(trades, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
