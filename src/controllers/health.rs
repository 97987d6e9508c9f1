use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready() -> impl IntoResponse {
    // No local state to probe; translation and speech keys are supplied per
    // request, so readiness only means the process is serving
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "translation": "available",
            "speech": "available"
        })),
    )
}
