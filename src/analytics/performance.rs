//! Performance statistics over the trade journal

use crate::journal::{Trade, TradeStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the trailing run of results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StreakType {
    Win,
    Loss,
    #[default]
    None,
}

/// Gross profit over gross loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfitFactor {
    Finite(Decimal),
    /// Profits with no losses at all
    Infinite,
}

impl ProfitFactor {
    /// Finite value, if any
    pub fn value(&self) -> Option<Decimal> {
        match self {
            ProfitFactor::Finite(v) => Some(*v),
            ProfitFactor::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, ProfitFactor::Infinite)
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        ProfitFactor::Finite(dec!(0))
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Finite(v) => write!(f, "{:.2}", v.round_dp(2)),
            ProfitFactor::Infinite => f.write_str("∞"),
        }
    }
}

/// Aggregate statistics over closed trades
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Closed trades with a realized PnL
    pub total_trades: usize,
    /// Trades with PnL > 0
    pub winning_trades: usize,
    /// Trades with PnL < 0
    pub losing_trades: usize,
    /// Winners as a percentage of all closed trades
    pub win_rate: Decimal,
    /// Mean PnL of winners
    pub avg_win: Decimal,
    /// Mean absolute PnL of losers
    pub avg_loss: Decimal,
    /// Expected PnL per trade
    pub expectancy: Decimal,
    pub profit_factor: ProfitFactor,
    pub max_win_streak: usize,
    pub max_loss_streak: usize,
    /// Length of the trailing run
    pub current_streak: usize,
    pub streak_type: StreakType,
}

/// Compute performance metrics from the full trade list.
///
/// Only closed trades with a PnL count. A zero-PnL trade is neither a win nor
/// a loss for the averages and win rate, but it does extend (or start) a loss
/// streak.
pub fn analyze_performance(trades: &[Trade]) -> PerformanceMetrics {
    let closed: Vec<Decimal> = trades
        .iter()
        .filter(|t| t.status == TradeStatus::Closed)
        .filter_map(|t| t.pnl)
        .collect();

    if closed.is_empty() {
        return PerformanceMetrics::default();
    }

    let wins: Vec<Decimal> = closed.iter().copied().filter(|p| *p > dec!(0)).collect();
    let losses: Vec<Decimal> = closed.iter().copied().filter(|p| *p < dec!(0)).collect();

    let total_win: Decimal = wins.iter().sum();
    let total_loss: Decimal = losses.iter().map(|p| p.abs()).sum();

    let avg_win = mean(total_win, wins.len());
    let avg_loss = mean(total_loss, losses.len());

    let win_rate = Decimal::from(wins.len()) / Decimal::from(closed.len()) * dec!(100);
    let win_prob = win_rate / dec!(100);
    let expectancy = avg_win * win_prob - avg_loss * (Decimal::ONE - win_prob);

    let profit_factor = if total_loss > dec!(0) {
        ProfitFactor::Finite(total_win / total_loss)
    } else if total_win > dec!(0) {
        ProfitFactor::Infinite
    } else {
        ProfitFactor::Finite(dec!(0))
    };

    let streaks = Streaks::from_pnls(&closed);

    PerformanceMetrics {
        total_trades: closed.len(),
        winning_trades: wins.len(),
        losing_trades: losses.len(),
        win_rate,
        avg_win,
        avg_loss,
        expectancy,
        profit_factor,
        max_win_streak: streaks.max_win,
        max_loss_streak: streaks.max_loss,
        current_streak: streaks.current,
        streak_type: streaks.kind,
    }
}

fn mean(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return dec!(0);
    }
    total / Decimal::from(count)
}

#[derive(Debug, Default)]
struct Streaks {
    current: usize,
    kind: StreakType,
    max_win: usize,
    max_loss: usize,
}

impl Streaks {
    fn from_pnls(pnls: &[Decimal]) -> Self {
        let mut streaks = Self::default();
        for pnl in pnls {
            // pnl <= 0 is a loss step
            let step = if *pnl > dec!(0) {
                StreakType::Win
            } else {
                StreakType::Loss
            };
            if streaks.kind == step {
                streaks.current += 1;
            } else {
                streaks.kind = step;
                streaks.current = 1;
            }
            match step {
                StreakType::Win => streaks.max_win = streaks.max_win.max(streaks.current),
                _ => streaks.max_loss = streaks.max_loss.max(streaks.current),
            }
        }
        streaks
    }
}

impl PerformanceMetrics {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let streak = match self.streak_type {
            StreakType::None => "-".to_string(),
            StreakType::Win => format!("{} wins", self.current_streak),
            StreakType::Loss => format!("{} losses", self.current_streak),
        };
        format!(
            r#"
══════════════════════════════════════════════════════
               PERFORMANCE
══════════════════════════════════════════════════════

RESULTS
───────────────────────────────────────────────────────
Closed Trades:    {} ({} won, {} lost)
Win Rate:         {:.1}%
Avg Win:          {:.2}
Avg Loss:         {:.2}
Expectancy:       {:+.2}
Profit Factor:    {}

STREAKS
───────────────────────────────────────────────────────
Current:          {}
Best Win Run:     {}
Worst Loss Run:   {}
══════════════════════════════════════════════════════
"#,
            self.total_trades,
            self.winning_trades,
            self.losing_trades,
            self.win_rate.round_dp(1),
            self.avg_win.round_dp(2),
            self.avg_loss.round_dp(2),
            self.expectancy.round_dp(2),
            self.profit_factor,
            streak,
            self.max_win_streak,
            self.max_loss_streak,
        )
    }
}
