use crate::transport::http::types::HealthResponse;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Liveness only: never touches the lookup service or the database.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is alive", body = HealthResponse)
    )
)]
pub async fn healthcheck_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
        }),
    )
}
