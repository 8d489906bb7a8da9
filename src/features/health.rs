use axum::{routing::get, Json, Router};

use crate::shared::types::HealthResponse;

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub fn routes() -> Router {
    Router::new().route("/api/health", get(health_check))
}
