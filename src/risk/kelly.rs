//! Kelly criterion sizing from historical performance

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Cap on the returned half-Kelly percentage
pub const MAX_HALF_KELLY_PCT: Decimal = dec!(25);

/// Half-Kelly risk percentage for a track record.
///
/// Kelly: f* = p - q / b, where p = win rate, q = 1 - p and b = avg win / avg loss.
/// The result is pre-halved (f* x 50 as a percentage) and clamped to [0, 25].
/// Callers wanting full Kelly double it.
pub fn half_kelly_pct(win_rate: Decimal, avg_win: Decimal, avg_loss: Decimal) -> Decimal {
    if avg_loss == dec!(0) || win_rate == dec!(0) || win_rate == dec!(100) {
        return dec!(0);
    }
    if avg_win <= dec!(0) || avg_loss < dec!(0) {
        // b = 0 means every win is worthless
        return dec!(0);
    }

    let win_prob = win_rate / dec!(100);
    let kelly = match avg_win.checked_div(avg_loss) {
        // b beyond Decimal range: the loss term vanishes
        None => win_prob,
        // b underflowed to zero: the loss term is unbounded
        Some(loss_ratio) if loss_ratio.is_zero() => return dec!(0),
        Some(loss_ratio) => match (Decimal::ONE - win_prob).checked_div(loss_ratio) {
            Some(loss_term) => win_prob - loss_term,
            None => return dec!(0),
        },
    };

    if kelly <= dec!(0) {
        return dec!(0);
    }
    (kelly * dec!(50)).min(MAX_HALF_KELLY_PCT)
}

/// Full Kelly as displayed to the user: twice the half-Kelly figure
pub fn full_kelly_pct(win_rate: Decimal, avg_win: Decimal, avg_loss: Decimal) -> Decimal {
    half_kelly_pct(win_rate, avg_win, avg_loss) * dec!(2)
}
