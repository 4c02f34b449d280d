use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::app::{dto::HealthStatus, errors};

/// Liveness probe; never touches GitHub.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

/// Fallback for unmatched routes, rendered in the error envelope.
pub async fn not_found() -> impl IntoResponse {
    errors::json_error(StatusCode::NOT_FOUND, "Not Found")
}
