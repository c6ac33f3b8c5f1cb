use crate::domain::model::City;
use crate::transport::http::handlers::common::{error_response, lookup_response};
use crate::transport::http::types::{AppState, CitiesQuery, ErrorResponse};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(
    get,
    path = "/api/v1/cities",
    params(CitiesQuery),
    responses(
        (status = 200, description = "Cities of the district ordered by name", body = Vec<City>),
        (status = 400, description = "Missing district parameter or invalid slug", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_cities_handler(
    State(state): State<AppState>,
    Query(query): Query<CitiesQuery>,
) -> impl IntoResponse {
    let Some(district) = query.district.filter(|d| !d.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "district parameter is required");
    };
    let ctx = state.call_context();
    lookup_response(state.lookup.get_cities_by_district_slug(&ctx, &district).await)
}
