//! Deterministic synthetic OHLCV series.
//!
//! Every call seeds a fresh PCG stream from the symbol as supplied, so the
//! same input always yields the same bars while concurrent calls never share
//! generator state. Parameter lookup is case-insensitive but seeding is not:
//! `aapl` and `AAPL` use the same parameters and different random paths.

use crate::application::market_data::price_path::simulate_closes;
use crate::application::market_data::series_stats::summarize;
use crate::domain::errors::GenerationError;
use crate::domain::market::stock_params::StockParams;
use crate::domain::market::trading_calendar::trading_days;
use crate::domain::market::types::{Bar, SeriesResult, round2};
use chrono::{Local, NaiveDateTime};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

const MIN_VOLUME: f64 = 50_000_000.0;
const MAX_VOLUME: f64 = 150_000_000.0;

/// Fraction of `close * volatility` used as the intraday range.
const DAILY_RANGE_FACTOR: f64 = 0.1;

/// Sum of the symbol's Unicode code points.
pub fn symbol_seed(symbol: &str) -> u64 {
    symbol.chars().map(|c| c as u64).sum()
}

pub struct PriceSeriesGenerator;

impl PriceSeriesGenerator {
    /// Generates a series whose calendar ends around the current local time.
    pub fn generate(symbol: &str, day_count: i64) -> Result<SeriesResult, GenerationError> {
        Self::generate_as_of(symbol, day_count, Local::now().naive_local())
    }

    /// Generates a series with its calendar anchored at `now`.
    pub fn generate_as_of(
        symbol: &str,
        day_count: i64,
        now: NaiveDateTime,
    ) -> Result<SeriesResult, GenerationError> {
        if day_count <= 0 {
            return Err(GenerationError::NonPositiveDayCount(day_count));
        }
        let requested = day_count;
        let day_count = day_count as usize;

        let dates = trading_days(now, day_count)
            .ok_or(GenerationError::CalendarOutOfRange(requested))?;

        let mut rng = Pcg64::seed_from_u64(symbol_seed(symbol));
        let params = StockParams::lookup(symbol);
        let closes = simulate_closes(&mut rng, &params, day_count);

        let bars: Vec<Bar> = dates
            .iter()
            .zip(&closes)
            .map(|(date, close)| {
                let (open, high, low, volume) =
                    synthesize_ohlcv(&mut rng, *close, params.volatility);
                Bar {
                    date: *date,
                    open: round2(open),
                    high: round2(high),
                    low: round2(low),
                    close: round2(*close),
                    volume,
                }
            })
            .collect();

        let stats = summarize(&dates, &closes, params.volatility)
            .expect("positive day_count yields a non-empty series");

        debug!(
            "Generated {} bars for {} ({} -> {})",
            bars.len(),
            symbol,
            stats.start_date,
            stats.end_date
        );

        Ok(SeriesResult {
            symbol: symbol.to_uppercase(),
            bars,
            stats,
        })
    }
}

/// Draws open, high, low and volume around a close, in that order.
fn synthesize_ohlcv<R: Rng>(rng: &mut R, close: f64, volatility: f64) -> (f64, f64, f64, u64) {
    let daily_range = close * volatility * DAILY_RANGE_FACTOR;

    let open = close + uniform(rng, -daily_range, daily_range);
    let high = open.max(close) + uniform(rng, 0.0, daily_range).abs();
    let low = open.min(close) - uniform(rng, 0.0, daily_range).abs();
    let volume = rng.random_range(MIN_VOLUME..MAX_VOLUME).floor() as u64;

    (open, high, low, volume)
}

/// Uniform draw on `[low, high)` that tolerates a collapsed range.
fn uniform<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.random_range(low..high)
    } else {
        low
    }
}
