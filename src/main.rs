use clap::Parser;
use tradeguard::cli::{Cli, Commands};
use tradeguard::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    tradeguard::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Size(args) => args.execute(&config)?,
        Commands::Validate(args) => args.execute(&config)?,
        Commands::Kelly(args) => args.execute(&config)?,
        Commands::Stats(args) => args.execute(&config)?,
        Commands::Compound(args) => args.execute(&config)?,
        Commands::Margin(args) => args.execute(&config)?,
        Commands::Trade(cmd) => cmd.execute(&config)?,
        Commands::Portfolio(cmd) => cmd.execute(&config)?,
        Commands::Export(args) => args.execute(&config)?,
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Limits: risk/trade={}%, daily={}%, weekly={}%, monthly={}%",
                config.limits.risk_per_trade,
                config.limits.daily_loss_limit,
                config.limits.weekly_loss_limit,
                config.limits.monthly_loss_limit
            );
            println!(
                "  Portfolio: capital={}, leverage={}x",
                config.portfolio.initial_capital, config.portfolio.leverage
            );
            println!(
                "  Margin: futures={}, options sell={}",
                config.margin.futures_rate, config.margin.options_sell_rate
            );
            println!("  Data dir: {}", config.storage.data_dir.display());
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
