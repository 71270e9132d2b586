//! Site status API
//!
//! Liveness and request statistics for the console backend.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::api::middleware::AppState;

/// Response for the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub total_requests: u64,
    pub avg_response_time_us: f64,
}

/// Build the site router
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /api/v1/site/health - Liveness and request statistics
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = &state.request_stats;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: stats.uptime_seconds(),
        total_requests: stats.total_requests(),
        avg_response_time_us: stats.avg_response_time_us(),
    })
}
