//! Request and response bodies of the JSON API.

use serde::{Deserialize, Serialize};

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub backend: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            version: "1.0",
            backend: "vectorbt-style",
        }
    }
}

/// Query of `GET /api/stock/{symbol}`.
///
/// `days` is kept raw: a value that is not an integer falls back to the
/// configured default instead of rejecting the request.
#[derive(Debug, Default)]
pub struct StockQuery {
    pub days: Option<String>,
}

impl StockQuery {
    /// Takes the first `days` value when the parameter is repeated.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let days = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "days").then_some(value));
        Self { days }
    }

    pub fn days_or(&self, default: i64) -> i64 {
        self.days
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(default)
    }
}

/// Body of `POST /api/stocks`.
#[derive(Debug, Default, Deserialize)]
pub struct StocksRequest {
    /// `null` and a missing key both read as "no symbols".
    pub symbols: Option<Vec<String>>,
    pub days: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_or() {
        let query = |days: Option<&str>| StockQuery {
            days: days.map(str::to_string),
        };
        assert_eq!(query(None).days_or(252), 252);
        assert_eq!(query(Some("30")).days_or(252), 30);
        assert_eq!(query(Some("-4")).days_or(252), -4);
        assert_eq!(query(Some("abc")).days_or(252), 252);
        assert_eq!(query(Some("")).days_or(252), 252);
    }

    #[test]
    fn test_from_pairs_keeps_first_days() {
        let pairs = vec![
            ("foo".to_string(), "1".to_string()),
            ("days".to_string(), "10".to_string()),
            ("days".to_string(), "20".to_string()),
        ];
        assert_eq!(StockQuery::from_pairs(pairs).days.as_deref(), Some("10"));
        assert!(StockQuery::from_pairs(Vec::new()).days.is_none());
    }

    #[test]
    fn test_stocks_request_parsing() {
        let req: StocksRequest =
            serde_json::from_str(r#"{"symbols": ["AAPL", "msft"], "days": 30}"#).unwrap();
        assert_eq!(req.symbols.unwrap(), vec!["AAPL", "msft"]);
        assert_eq!(req.days, Some(30));

        let req: StocksRequest = serde_json::from_str("{}").unwrap();
        assert!(req.symbols.is_none());
        assert!(req.days.is_none());

        let req: StocksRequest = serde_json::from_str(r#"{"symbols": null}"#).unwrap();
        assert!(req.symbols.is_none());
    }

    #[test]
    fn test_health_serialization() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert_eq!(
            json,
            r#"{"status":"healthy","version":"1.0","backend":"vectorbt-style"}"#
        );
    }
}
