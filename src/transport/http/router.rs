use crate::domain::model::{City, Constituency, Country, District, DistrictKind, Region};
use crate::transport::http::handlers::{
    cities, constituencies, countries, districts, health, regions,
};
use crate::transport::http::types::{ErrorResponse, HealthResponse};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        countries::list_countries_handler,
        countries::get_country_handler,
        regions::list_regions_handler,
        regions::get_region_handler,
        regions::list_region_districts_handler,
        districts::get_district_handler,
        districts::list_district_constituencies_handler,
        constituencies::get_constituency_handler,
        cities::list_cities_handler
    ),
    components(schemas(
        Country,
        Region,
        District,
        DistrictKind,
        Constituency,
        City,
        ErrorResponse,
        HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    let api = Router::new()
        .route("/countries", get(countries::list_countries_handler))
        .route("/countries/:code", get(countries::get_country_handler))
        .route("/regions", get(regions::list_regions_handler))
        .route("/regions/:slug", get(regions::get_region_handler))
        .route(
            "/regions/:slug/districts",
            get(regions::list_region_districts_handler),
        )
        .route("/districts/:slug", get(districts::get_district_handler))
        .route(
            "/districts/:slug/constituencies",
            get(districts::list_district_constituencies_handler),
        )
        .route(
            "/constituencies/:slug",
            get(constituencies::get_constituency_handler),
        )
        .route("/cities", get(cities::list_cities_handler));

    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
