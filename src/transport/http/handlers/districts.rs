use crate::domain::model::{Constituency, District};
use crate::transport::http::handlers::common::lookup_response;
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/districts/{slug}",
    params(
        ("slug" = String, Path, description = "District slug")
    ),
    responses(
        (status = 200, description = "District", body = District),
        (status = 400, description = "Invalid slug format", body = ErrorResponse),
        (status = 404, description = "District not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_district_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(state.lookup.get_district_by_slug(&ctx, &slug).await)
}

#[utoipa::path(
    get,
    path = "/api/v1/districts/{slug}/constituencies",
    params(
        ("slug" = String, Path, description = "District slug")
    ),
    responses(
        (status = 200, description = "Constituencies of the district ordered by name", body = Vec<Constituency>),
        (status = 400, description = "Invalid slug format", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_district_constituencies_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(
        state
            .lookup
            .get_constituencies_by_district_slug(&ctx, &slug)
            .await,
    )
}
