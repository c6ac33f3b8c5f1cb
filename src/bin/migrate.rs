//! Applies the table layout and checks that every table and index exists.

use ghana_geo_api::app::wiring;
use ghana_geo_api::infra::telemetry;
use ghana_geo_api::storage::schema;
use ghana_geo_api::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env()?;

    let pool = wiring::connect_pool(&config).await?;
    tracing::info!("connected to database");

    schema::apply(&pool).await?;
    tracing::info!("schema applied");

    let report = schema::verify(&pool).await?;
    for table in &report.present_tables {
        tracing::info!(table, "table exists");
    }
    for index in &report.present_indexes {
        tracing::info!(index, "index exists");
    }
    for index in &report.missing_indexes {
        tracing::warn!(index, "index not found");
    }
    if !report.is_complete() {
        return Err(anyhow::anyhow!(
            "missing tables after migration: {}",
            report.missing_tables.join(", ")
        ));
    }

    tracing::info!("migration complete");
    Ok(())
}
