//! stocksynth command-line tool
//!
//! Prints a synthetic series or the ticker parameter table without
//! starting the HTTP server.

use anyhow::Result;
use clap::{Parser, Subcommand};
use stocksynth::application::market_data::PriceSeriesGenerator;
use stocksynth::config::SeriesEnvConfig;
use stocksynth::domain::market::stock_params::{DEFAULT_PARAMS, KNOWN_TICKERS};
use stocksynth::interfaces::export::{OutputFormat, write_series};
use tracing::{Level, info};

#[derive(Parser)]
#[command(author, version, about = "Synthetic daily stock price series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a series for one symbol and print it to stdout
    Generate {
        /// Ticker symbol (unknown symbols use default parameters)
        symbol: String,

        /// Number of trading days, clamped to the configured range
        #[arg(short, long)]
        days: Option<i64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Print the random-walk parameters of every known ticker
    Params,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            symbol,
            days,
            format,
        } => {
            let limits = SeriesEnvConfig::from_env()?;
            let days = limits.clamp_days(days.unwrap_or(limits.default_days));
            info!("Generating {} days for {}", days, symbol);

            let series = PriceSeriesGenerator::generate(&symbol, days)?;
            write_series(std::io::stdout().lock(), &series, format)?;
        }
        Commands::Params => {
            println!(
                "{:<8} {:>10} {:>10} {:>8}",
                "SYMBOL", "BASE", "VOL", "DRIFT"
            );
            let rows = KNOWN_TICKERS
                .iter()
                .copied()
                .chain(std::iter::once(("DEFAULT", DEFAULT_PARAMS)));
            for (ticker, params) in rows {
                println!(
                    "{:<8} {:>10.2} {:>10.2} {:>8.4}",
                    ticker, params.base_price, params.volatility, params.drift
                );
            }
        }
    }

    Ok(())
}
