//! Margin command implementation

use crate::config::Config;
use crate::risk::{InstrumentType, MarginParams};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Args, Debug)]
pub struct MarginArgs {
    /// Instrument price
    #[arg(long)]
    pub price: Decimal,

    /// Number of lots
    #[arg(long)]
    pub qty: Decimal,

    /// futures, options-buy or options-sell
    #[arg(long = "type")]
    pub instrument: InstrumentType,

    /// Option premium per unit
    #[arg(long)]
    pub premium: Option<Decimal>,

    /// Units per lot
    #[arg(long, default_value = "1")]
    pub lot_size: Decimal,
}

impl MarginArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut params = MarginParams::new(self.price, self.qty, self.instrument).with_lot_size(self.lot_size);
        params.premium = self.premium;

        let result = config.margin.estimator().estimate(&params);

        println!("{} margin estimate", self.instrument);
        println!("  Total exposure: {:.2}", result.total_exposure);
        match self.instrument {
            InstrumentType::Futures => println!("  Futures margin: {:.2}", result.futures_margin),
            InstrumentType::OptionsBuy => println!("  Premium paid:   {:.2}", result.options_premium),
            InstrumentType::OptionsSell => {
                println!("  Selling margin: {:.2}", result.options_selling_margin)
            }
        }
        if self.instrument != InstrumentType::Futures && self.premium.unwrap_or(dec!(0)).is_zero() {
            tracing::warn!("No premium given for an options estimate");
        }
        Ok(())
    }
}
