use crate::domain::model::{District, Region};
use crate::transport::http::handlers::common::lookup_response;
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/regions",
    responses(
        (status = 200, description = "All regions ordered by name", body = Vec<Region>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_regions_handler(State(state): State<AppState>) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(state.lookup.get_all_regions(&ctx).await)
}

#[utoipa::path(
    get,
    path = "/api/v1/regions/{slug}",
    params(
        ("slug" = String, Path, description = "Region slug (e.g. greater-accra)")
    ),
    responses(
        (status = 200, description = "Region", body = Region),
        (status = 400, description = "Invalid slug format", body = ErrorResponse),
        (status = 404, description = "Region not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_region_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(state.lookup.get_region_by_slug(&ctx, &slug).await)
}

/// An unknown region yields an empty list, not a 404.
#[utoipa::path(
    get,
    path = "/api/v1/regions/{slug}/districts",
    params(
        ("slug" = String, Path, description = "Region slug")
    ),
    responses(
        (status = 200, description = "Districts of the region ordered by name", body = Vec<District>),
        (status = 400, description = "Invalid slug format", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_region_districts_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(state.lookup.get_districts_by_region_slug(&ctx, &slug).await)
}
