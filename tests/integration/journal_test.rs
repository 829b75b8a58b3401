//! Journal, portfolio and persistence integration tests

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tradeguard::analytics::{ProfitFactor, StreakType};
use tradeguard::journal::{trades_to_csv_string, AppState, NewTrade, TradeSide, TradeStatus};
use tradeguard::risk::{half_kelly_pct, validate_trade, PortfolioState, RiskLimits};
use tradeguard::store::JsonStore;

fn new_trade(instrument: &str, side: TradeSide, entry: Decimal, qty: u32) -> NewTrade {
    let (stop, target) = match side {
        TradeSide::Long => (entry - dec!(10), entry + dec!(25)),
        TradeSide::Short => (entry + dec!(10), entry - dec!(25)),
    };
    NewTrade {
        date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        instrument: instrument.to_string(),
        side,
        entry_price: entry,
        stop_loss: stop,
        target,
        quantity: qty,
        notes: None,
    }
}

fn fresh_state() -> AppState {
    AppState::new(PortfolioState::new(dec!(100000), dec!(1)), RiskLimits::default())
}

#[test]
fn test_trading_session() {
    let mut state = fresh_state();

    let a = state.open_trade(new_trade("NIFTY", TradeSide::Long, dec!(500), 50)).unwrap().id;
    let b = state.open_trade(new_trade("BANKNIFTY", TradeSide::Short, dec!(800), 20)).unwrap().id;
    let c = state.open_trade(new_trade("TCS", TradeSide::Long, dec!(300), 100)).unwrap().id;

    state.close_trade(a, dec!(525)).unwrap(); // +1250
    state.close_trade(b, dec!(810)).unwrap(); // -200
    state.cancel_trade(c).unwrap();

    let p = &state.portfolio;
    assert_eq!(p.current_equity, dec!(101050));
    assert_eq!(p.peak_equity, dec!(101250));
    assert_eq!(p.daily_pnl, dec!(1050));
    assert!(p.drawdown > dec!(0));
    assert_eq!(p.max_drawdown, p.drawdown);

    let m = state.metrics();
    assert_eq!(m.total_trades, 2);
    assert_eq!(m.win_rate, dec!(50));
    assert_eq!(m.avg_win, dec!(1250));
    assert_eq!(m.avg_loss, dec!(200));
    assert_eq!(m.profit_factor, ProfitFactor::Finite(dec!(6.25)));
    assert_eq!(m.streak_type, StreakType::Loss);

    // p = 0.5, b = 6.25 -> f* = 0.42 -> half Kelly 21%
    assert_eq!(half_kelly_pct(m.win_rate, m.avg_win, m.avg_loss), dec!(21));
}

#[test]
fn test_loss_lock_blocks_next_trade() {
    let mut state = fresh_state();
    let id = state.open_trade(new_trade("SBIN", TradeSide::Long, dec!(600), 500)).unwrap().id;
    // -15 * 500 = -7500 -> 7.5% daily, 7.5% weekly
    state.close_trade(id, dec!(585)).unwrap();
    assert!(state.portfolio.is_trading_locked);

    let result = validate_trade(dec!(3), dec!(0.5), &state.limits, &state.portfolio);
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 3);
    assert!(result.errors[0].starts_with("Daily loss limit reached"));
    assert!(result.errors[1].starts_with("Weekly loss limit reached"));
    assert!(result.errors[2].starts_with("Trading is locked: Daily loss limit hit"));

    let unlocked = state.portfolio.unlock();
    assert!(!unlocked.is_trading_locked);
}

#[test]
fn test_state_round_trip_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());

    let mut state = fresh_state();
    let id = state.open_trade(new_trade("HDFC", TradeSide::Long, dec!(1600), 10)).unwrap().id;
    state.close_trade(id, dec!(1650)).unwrap();
    state.open_trade(new_trade("ITC", TradeSide::Short, dec!(450), 100)).unwrap();
    store.save_state(&state).unwrap();

    let loaded = store
        .load_state(PortfolioState::new(dec!(1), dec!(1)), RiskLimits::default())
        .unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.trade(id).unwrap().status, TradeStatus::Closed);
    assert_eq!(loaded.metrics(), state.metrics());
}

#[test]
fn test_csv_export_of_session() {
    let mut state = fresh_state();
    let id = state.open_trade(new_trade("WIPRO", TradeSide::Short, dec!(400), 30)).unwrap().id;
    state.close_trade(id, dec!(380)).unwrap();
    state.open_trade(new_trade("LT", TradeSide::Long, dec!(3000), 5)).unwrap();

    let csv = trades_to_csv_string(&state.trades).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,Instrument,Side,Entry,StopLoss,Target,Qty,Exit,P&L,RR,Status,Notes");
    assert_eq!(lines[1], "2024-07-01,WIPRO,SHORT,400,410,375,30,380,600,2.50,CLOSED,");
    assert_eq!(lines[2], "2024-07-01,LT,LONG,3000,2990,3025,5,,,2.50,OPEN,");
}
