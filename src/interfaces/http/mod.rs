//! JSON HTTP API over the series generator.
//!
//! Routes:
//! - `GET /api/health`
//! - `GET /api/stock/{symbol}?days=N`
//! - `POST /api/stocks`

pub mod dto;
pub mod error;
pub mod handlers;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Builds the router with open CORS and request tracing.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/stock/{symbol}", get(handlers::get_stock))
        .route("/api/stocks", post(handlers::post_stocks))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
