//! Request handlers.

pub mod videos;

pub use videos::*;

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe.
pub async fn ready() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ready" })
}
