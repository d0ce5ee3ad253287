use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. The body is pinned to exactly `{"status":"ok"}`.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok"
    }))
}

/// Readiness probe. There are no downstream dependencies to check, so a
/// running process is a ready process.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}
