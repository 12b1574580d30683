use serde::{Deserialize, Serialize};

/// Random-walk parameters for one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockParams {
    pub base_price: f64,
    /// Scale of the daily normal shock
    pub volatility: f64,
    /// Deterministic daily drift term
    pub drift: f64,
}

impl StockParams {
    pub const fn new(base_price: f64, volatility: f64, drift: f64) -> Self {
        Self {
            base_price,
            volatility,
            drift,
        }
    }

    /// Lowest close the random walk may reach.
    pub fn price_floor(&self) -> f64 {
        self.base_price * 0.3
    }

    /// Parameters for `symbol`, case-insensitive, falling back to [`DEFAULT_PARAMS`].
    pub fn lookup(symbol: &str) -> Self {
        let upper = symbol.to_uppercase();
        KNOWN_TICKERS
            .iter()
            .find(|(ticker, _)| *ticker == upper)
            .map(|(_, params)| *params)
            .unwrap_or(DEFAULT_PARAMS)
    }
}

pub const DEFAULT_PARAMS: StockParams = StockParams::new(100.0, 0.25, 0.0002);

pub const KNOWN_TICKERS: [(&str, StockParams); 7] = [
    ("AAPL", StockParams::new(170.0, 0.25, 0.0003)),
    ("GOOG", StockParams::new(140.0, 0.28, 0.0002)),
    ("MSFT", StockParams::new(380.0, 0.23, 0.0004)),
    ("TSLA", StockParams::new(240.0, 0.45, 0.0001)),
    ("AMZN", StockParams::new(175.0, 0.30, 0.0003)),
    ("META", StockParams::new(485.0, 0.32, 0.0002)),
    ("NVDA", StockParams::new(880.0, 0.40, 0.0005)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_ticker() {
        let params = StockParams::lookup("MSFT");
        assert_eq!(params.base_price, 380.0);
        assert_eq!(params.volatility, 0.23);
        assert_eq!(params.drift, 0.0004);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(StockParams::lookup("nvda"), StockParams::lookup("NVDA"));
        assert_eq!(StockParams::lookup("Tsla").base_price, 240.0);
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        assert_eq!(StockParams::lookup("ZZZZ"), DEFAULT_PARAMS);
        assert_eq!(StockParams::lookup(""), DEFAULT_PARAMS);
        // "DEFAULT" is not a ticker, but it resolves to the same row anyway
        assert_eq!(StockParams::lookup("default"), DEFAULT_PARAMS);
    }

    #[test]
    fn test_price_floor() {
        let params = StockParams::lookup("AAPL");
        assert!((params.price_floor() - 51.0).abs() < 1e-9);
    }
}
