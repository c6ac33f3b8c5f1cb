use crate::domain::model::Country;
use crate::transport::http::handlers::common::lookup_response;
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/countries",
    responses(
        (status = 200, description = "All countries ordered by name", body = Vec<Country>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_countries_handler(State(state): State<AppState>) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(state.lookup.get_all_countries(&ctx).await)
}

#[utoipa::path(
    get,
    path = "/api/v1/countries/{code}",
    params(
        ("code" = String, Path, description = "Country code (e.g. GH)")
    ),
    responses(
        (status = 200, description = "Country", body = Country),
        (status = 404, description = "Country not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_country_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    let ctx = state.call_context();
    lookup_response(state.lookup.get_country_by_code(&ctx, &code).await)
}
