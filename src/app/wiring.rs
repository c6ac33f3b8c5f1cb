//! Composition root: turns a [`Config`] into a fully wired service.

use crate::app::lookup_service::{LookupService, Stores};
use crate::infra::Config;
use crate::storage::PgEntityStore;
use crate::transport::http::AppState;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

/// Everything the api_server binary needs to serve requests.
pub struct App {
    pub pool: PgPool,
    pub state: AppState,
}

/// Opens a bounded connection pool to the configured database.
pub async fn connect_pool(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// One Postgres-backed store per entity level, sharing `pool`.
pub fn pg_stores(pool: &PgPool) -> Stores {
    Stores {
        countries: Arc::new(PgEntityStore::new(pool.clone())),
        regions: Arc::new(PgEntityStore::new(pool.clone())),
        districts: Arc::new(PgEntityStore::new(pool.clone())),
        constituencies: Arc::new(PgEntityStore::new(pool.clone())),
        cities: Arc::new(PgEntityStore::new(pool.clone())),
    }
}

pub async fn build(config: &Config) -> anyhow::Result<App> {
    let pool = connect_pool(config).await?;
    let service = LookupService::new(pg_stores(&pool));
    let state = AppState::new(service, config.request_timeout);
    Ok(App { pool, state })
}
