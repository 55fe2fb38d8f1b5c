use crate::models::HealthResponse;
use axum::Json;

/// `GET /health`. Does not check the model or the provider.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
