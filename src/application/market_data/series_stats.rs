use crate::domain::market::types::{SeriesStats, round2};
use chrono::NaiveDate;

/// Aggregates summary statistics over aligned dates and unrounded closes.
///
/// Returns `None` for an empty series.
pub fn summarize(dates: &[NaiveDate], closes: &[f64], volatility: f64) -> Option<SeriesStats> {
    let (start_date, end_date) = (*dates.first()?, *dates.last()?);
    let (start_price, end_price) = (*closes.first()?, *closes.last()?);

    let max_price = closes.iter().copied().fold(f64::MIN, f64::max);
    let min_price = closes.iter().copied().fold(f64::MAX, f64::min);
    let total_return_pct = (end_price - start_price) / start_price * 100.0;

    Some(SeriesStats {
        start_date,
        end_date,
        trading_days: dates.len(),
        start_price: round2(start_price),
        end_price: round2(end_price),
        total_return_pct: round2(total_return_pct),
        max_price: round2(max_price),
        min_price: round2(min_price),
        volatility_pct: round2(volatility * 100.0),
    })
}
