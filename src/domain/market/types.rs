use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Rounds to cents, the precision of every price and percentage we emit.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One synthetic trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Summary of a generated series, derived from its bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub trading_days: usize,
    pub start_price: f64,
    pub end_price: f64,
    #[serde(rename = "total_return")]
    pub total_return_pct: f64,
    pub max_price: f64,
    pub min_price: f64,
    #[serde(rename = "volatility")]
    pub volatility_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    /// Uppercased ticker
    pub symbol: String,
    #[serde(rename = "data")]
    pub bars: Vec<Bar>,
    pub stats: SeriesStats,
}
