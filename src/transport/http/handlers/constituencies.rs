use crate::domain::model::Constituency;
use crate::transport::http::handlers::common::lookup_response;
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/constituencies/{slug}",
    params(
        ("slug" = String, Path, description = "Constituency slug")
    ),
    responses(
        (status = 200, description = "Constituency", body = Constituency),
        (status = 400, description = "Invalid slug format", body = ErrorResponse),
        (status = 404, description = "Constituency not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_constituency_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(state.lookup.get_constituency_by_slug(&ctx, &slug).await)
}
