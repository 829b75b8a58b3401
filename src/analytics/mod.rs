//! Analytics module
//!
//! Performance statistics over the journal and capital planning

mod compounding;
mod performance;

pub use compounding::{
    calculate_compounding, required_monthly_return, risk_reward_ratio, trade_risk_pct,
    CompoundingStep,
};
pub use performance::{analyze_performance, PerformanceMetrics, ProfitFactor, StreakType};
