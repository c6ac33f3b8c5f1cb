//! Prints row counts for every table.

use ghana_geo_api::app::wiring;
use ghana_geo_api::infra::telemetry;
use ghana_geo_api::storage::schema;
use ghana_geo_api::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env()?;
    let pool = wiring::connect_pool(&config).await?;

    for (table, count) in schema::table_counts(&pool).await? {
        println!("{}: {}", table, count);
    }
    Ok(())
}
