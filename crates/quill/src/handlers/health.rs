//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Reports the compiled-in storage backend

use axum::{http::StatusCode, response::IntoResponse, Json};

#[cfg(feature = "inmemory")]
const STORAGE_BACKEND: &str = "inmemory";

#[cfg(feature = "dynamodb")]
const STORAGE_BACKEND: &str = "dynamodb";

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting
/// connections.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Reports service status and the active storage backend.
pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "storage": STORAGE_BACKEND,
    }))
}
