//! Route handlers. Each one clamps the requested length, delegates to
//! [`PriceSeriesGenerator`] and wraps the outcome in the JSON envelope.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use std::collections::BTreeMap;
use tracing::info;

use super::dto::{ApiResponse, HealthResponse, StockQuery, StocksRequest};
use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::application::market_data::PriceSeriesGenerator;
use crate::domain::errors::GenerationError;
use crate::domain::market::types::SeriesResult;

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// `GET /api/stock/{symbol}?days=N`
pub async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<SeriesResult>>> {
    let Query(pairs) = query.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    let query = StockQuery::from_pairs(pairs);

    let days = state
        .series
        .clamp_days(query.days_or(state.series.default_days));
    info!("Generating {} trading days for {}", days, symbol);

    let series = PriceSeriesGenerator::generate(&symbol, days)?;
    Ok(Json(ApiResponse::ok(series)))
}

/// `POST /api/stocks` with `{"symbols": [...], "days": N}`
///
/// Results are keyed by each symbol exactly as supplied.
pub async fn post_stocks(
    State(state): State<AppState>,
    payload: Result<Json<StocksRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<BTreeMap<String, SeriesResult>>>> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let symbols = request.symbols.unwrap_or_default();
    if symbols.is_empty() {
        return Err(ApiError::NoSymbols);
    }

    let days = state
        .series
        .clamp_days(request.days.unwrap_or(state.series.default_days));
    info!(
        "Generating {} trading days for {} symbols",
        days,
        symbols.len()
    );

    // Up to max_days bars per symbol with no cap on symbols; keep it off the async workers
    let results = tokio::task::spawn_blocking(move || {
        symbols
            .into_iter()
            .map(|symbol| {
                PriceSeriesGenerator::generate(&symbol, days).map(|series| (symbol, series))
            })
            .collect::<Result<BTreeMap<_, _>, GenerationError>>()
    })
    .await
    .map_err(|e| ApiError::GenerationFailed(e.to_string()))??;

    Ok(Json(ApiResponse::ok(results)))
}
