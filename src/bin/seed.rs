//! Loads the fixture files from `DATA_DIR` into the database.

use ghana_geo_api::app::fixtures::FixtureSet;
use ghana_geo_api::app::{wiring, Loader};
use ghana_geo_api::infra::telemetry;
use ghana_geo_api::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env()?;

    let fixtures = FixtureSet::load_dir(&config.data_dir)?;
    tracing::info!(
        dir = %config.data_dir.display(),
        countries = fixtures.countries.len(),
        regions = fixtures.regions.len(),
        districts = fixtures.districts.len(),
        constituencies = fixtures.constituencies.len(),
        cities = fixtures.cities.len(),
        "fixtures read"
    );

    let pool = wiring::connect_pool(&config).await?;
    let report = Loader::new(pool, config.seed_country_code.clone())
        .load(&fixtures)
        .await?;

    tracing::info!(?report, "seeding completed");
    Ok(())
}
