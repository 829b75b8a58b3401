//! End-to-end integration tests

use rust_decimal_macros::dec;
use tradeguard::analytics::{calculate_compounding, risk_reward_ratio, trade_risk_pct};
use tradeguard::config::Config;
use tradeguard::risk::{
    adjusted_risk_for_drawdown, calculate_position_size, half_kelly_pct, validate_trade,
    PositionSizeParams,
};

#[test]
fn test_config_example_loads() {
    let toml = include_str!("../../config.toml.example");
    let config: Config = toml::from_str(toml).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.limits.daily_loss_limit, dec!(3));
    assert_eq!(config.portfolio.initial_capital, dec!(100000));
}

#[test]
fn test_plan_size_and_validate() {
    let config = Config::default();
    let portfolio = config.portfolio.initial_state();

    // Size a trade risking the per-trade limit with a 1% stop
    let sizing = calculate_position_size(&PositionSizeParams::new(
        portfolio.capital,
        config.limits.risk_per_trade,
        dec!(1),
        dec!(2500),
    ));
    assert_eq!(sizing.quantity, dec!(40));

    // Stop at 2475, target at 2550 -> RR 3
    let qty = 40;
    let rr = risk_reward_ratio(dec!(2500), dec!(2475), dec!(2550));
    let risk = trade_risk_pct(dec!(2500), dec!(2475), qty, portfolio.capital);
    assert_eq!(risk, dec!(1));

    let result = validate_trade(rr, risk, &config.limits, &portfolio);
    assert!(result.is_valid, "{:?}", result.errors);
}

#[test]
fn test_drawdown_scaling_feeds_sizing() {
    let base = dec!(2);
    let adjusted = adjusted_risk_for_drawdown(base, dec!(12));
    let full = calculate_position_size(&PositionSizeParams::new(dec!(100000), base, dec!(1), dec!(1000)));
    let reduced =
        calculate_position_size(&PositionSizeParams::new(dec!(100000), adjusted, dec!(1), dec!(1000)));
    assert_eq!(full.quantity, dec!(200));
    assert_eq!(reduced.quantity, dec!(100));
}

#[test]
fn test_kelly_stays_bounded() {
    for win_rate in [dec!(10), dec!(50), dec!(90)] {
        let k = half_kelly_pct(win_rate, dec!(500), dec!(250));
        assert!(k >= dec!(0) && k <= dec!(25));
    }
}

#[test]
fn test_compounding_projection() {
    let steps = calculate_compounding(dec!(100000), dec!(5), 3);
    let capitals: Vec<_> = steps.iter().map(|s| s.capital).collect();
    assert_eq!(capitals, vec![dec!(105000), dec!(110250), dec!(115762.5)]);
}
