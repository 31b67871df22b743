//! Health Routes
//!
//! - GET /health/live - Liveness (process is alive)
//! - GET /health - Full status with client and data directory checks

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use super::state::HostState;

/// Full health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Built client: ok, missing
    pub client: String,
    /// Data directory: ok, missing
    pub data: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<HostState>>) -> Json<HealthResponse> {
    let client_ok = state.client_present();
    let data_ok = state.data_present();

    let label = |ok: bool| if ok { "ok" } else { "missing" }.to_string();

    Json(HealthResponse {
        status: if client_ok && data_ok { "healthy" } else { "degraded" }.to_string(),
        client: label(client_ok),
        data: label(data_ok),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
