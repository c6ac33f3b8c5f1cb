//! Out-of-band bulk loader.
//!
//! Upserts every fixture collection keyed by natural identifier, so running
//! it repeatedly converges on the same rows. Parents are resolved by natural
//! key against the database. A record naming a parent that does not exist is
//! skipped when the reference is mandatory, or stored with a NULL parent when
//! it is optional (constituency -> district).

use crate::app::fixtures::{
    CityFixture, ConstituencyFixture, CountryFixture, DistrictFixture, FixtureError, FixtureSet,
    RegionFixture,
};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error("failed to load {collection}: {source}")]
    Store {
        collection: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Upserted and skipped record counts for one collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollectionReport {
    pub upserted: usize,
    pub skipped: usize,
    /// Records stored with a NULL parent because their optional parent was unknown.
    pub detached: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub countries: CollectionReport,
    pub regions: CollectionReport,
    pub districts: CollectionReport,
    pub constituencies: CollectionReport,
    pub cities: CollectionReport,
}

pub struct Loader {
    pool: PgPool,
    default_country_code: String,
}

impl Loader {
    pub fn new(pool: PgPool, default_country_code: impl Into<String>) -> Self {
        Self {
            pool,
            default_country_code: default_country_code.into(),
        }
    }

    /// Loads all collections parent-first; each collection commits on its own.
    pub async fn load(&self, fixtures: &FixtureSet) -> Result<LoadReport, LoadError> {
        let countries = self
            .load_countries(&fixtures.countries)
            .await
            .map_err(store_err("countries"))?;
        tracing::info!(upserted = countries.upserted, "countries loaded");

        let regions = self
            .load_regions(&fixtures.regions)
            .await
            .map_err(store_err("regions"))?;
        tracing::info!(upserted = regions.upserted, skipped = regions.skipped, "regions loaded");

        let districts = self
            .load_districts(&fixtures.districts)
            .await
            .map_err(store_err("districts"))?;
        tracing::info!(upserted = districts.upserted, skipped = districts.skipped, "districts loaded");

        let constituencies = self
            .load_constituencies(&fixtures.constituencies)
            .await
            .map_err(store_err("constituencies"))?;
        tracing::info!(
            upserted = constituencies.upserted,
            detached = constituencies.detached,
            "constituencies loaded"
        );

        let cities = self
            .load_cities(&fixtures.cities)
            .await
            .map_err(store_err("cities"))?;
        tracing::info!(upserted = cities.upserted, skipped = cities.skipped, "cities loaded");

        Ok(LoadReport {
            countries,
            regions,
            districts,
            constituencies,
            cities,
        })
    }

    async fn load_countries(&self, records: &[CountryFixture]) -> Result<CollectionReport, sqlx::Error> {
        let mut report = CollectionReport::default();
        let mut tx = self.pool.begin().await?;
        for country in records {
            sqlx::query(
                "INSERT INTO countries (code, name) VALUES ($1, $2)
                 ON CONFLICT (code) DO UPDATE SET name = EXCLUDED.name",
            )
            .bind(&country.code)
            .bind(&country.name)
            .execute(tx.as_mut())
            .await?;
            report.upserted += 1;
        }
        tx.commit().await?;
        Ok(report)
    }

    async fn load_regions(&self, records: &[RegionFixture]) -> Result<CollectionReport, sqlx::Error> {
        let mut report = CollectionReport::default();
        let mut tx = self.pool.begin().await?;
        for region in records {
            let code = region
                .country_code
                .as_deref()
                .unwrap_or(&self.default_country_code);
            let Some(country_id) = lookup_id(&mut tx, "countries", "code", code).await? else {
                tracing::warn!(region = %region.slug, country = %code, "country not found, skipping region");
                report.skipped += 1;
                continue;
            };
            sqlx::query(
                "INSERT INTO regions (country_id, name, slug, capital) VALUES ($1, $2, $3, $4)
                 ON CONFLICT (slug) DO UPDATE
                 SET country_id = EXCLUDED.country_id, name = EXCLUDED.name, capital = EXCLUDED.capital",
            )
            .bind(country_id)
            .bind(&region.name)
            .bind(&region.slug)
            .bind(&region.capital)
            .execute(tx.as_mut())
            .await?;
            report.upserted += 1;
        }
        tx.commit().await?;
        Ok(report)
    }

    async fn load_districts(&self, records: &[DistrictFixture]) -> Result<CollectionReport, sqlx::Error> {
        let mut report = CollectionReport::default();
        let mut tx = self.pool.begin().await?;
        for district in records {
            let Some(region_id) = lookup_id(&mut tx, "regions", "slug", &district.region_slug).await?
            else {
                tracing::warn!(
                    district = %district.slug,
                    region = %district.region_slug,
                    "region not found, skipping district"
                );
                report.skipped += 1;
                continue;
            };
            sqlx::query(
                "INSERT INTO districts (region_id, name, slug, type, capital) VALUES ($1, $2, $3, $4, $5)
                 ON CONFLICT (slug) DO UPDATE
                 SET region_id = EXCLUDED.region_id, name = EXCLUDED.name,
                     type = EXCLUDED.type, capital = EXCLUDED.capital",
            )
            .bind(region_id)
            .bind(&district.name)
            .bind(&district.slug)
            .bind(district.kind.as_str())
            .bind(&district.capital)
            .execute(tx.as_mut())
            .await?;
            report.upserted += 1;
        }
        tx.commit().await?;
        Ok(report)
    }

    async fn load_constituencies(
        &self,
        records: &[ConstituencyFixture],
    ) -> Result<CollectionReport, sqlx::Error> {
        let mut report = CollectionReport::default();
        let mut tx = self.pool.begin().await?;
        for constituency in records {
            let district_id = match constituency.district_slug.as_deref() {
                Some(slug) => {
                    let id = lookup_id(&mut tx, "districts", "slug", slug).await?;
                    if id.is_none() {
                        tracing::warn!(
                            constituency = %constituency.slug,
                            district = %slug,
                            "district not found, storing constituency without district"
                        );
                        report.detached += 1;
                    }
                    id
                }
                None => None,
            };
            sqlx::query(
                "INSERT INTO constituencies (district_id, name, slug) VALUES ($1, $2, $3)
                 ON CONFLICT (slug) DO UPDATE SET district_id = EXCLUDED.district_id, name = EXCLUDED.name",
            )
            .bind(district_id)
            .bind(&constituency.name)
            .bind(&constituency.slug)
            .execute(tx.as_mut())
            .await?;
            report.upserted += 1;
        }
        tx.commit().await?;
        Ok(report)
    }

    async fn load_cities(&self, records: &[CityFixture]) -> Result<CollectionReport, sqlx::Error> {
        let mut report = CollectionReport::default();
        let mut tx = self.pool.begin().await?;
        for city in records {
            let Some(district_id) = lookup_id(&mut tx, "districts", "slug", &city.district_slug).await?
            else {
                tracing::warn!(
                    city = %city.name,
                    district = %city.district_slug,
                    "district not found, skipping city"
                );
                report.skipped += 1;
                continue;
            };
            sqlx::query(
                "INSERT INTO cities (district_id, name, lat, lng) VALUES ($1, $2, $3, $4)
                 ON CONFLICT (district_id, name) DO UPDATE SET lat = EXCLUDED.lat, lng = EXCLUDED.lng",
            )
            .bind(district_id)
            .bind(&city.name)
            .bind(city.lat)
            .bind(city.lng)
            .execute(tx.as_mut())
            .await?;
            report.upserted += 1;
        }
        tx.commit().await?;
        Ok(report)
    }
}

/// Resolves a parent's surrogate id from its natural key. `table` and
/// `column` are always compile-time constants.
async fn lookup_id(
    tx: &mut Transaction<'_, Postgres>,
    table: &'static str,
    column: &'static str,
    key: &str,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar(&format!("SELECT id FROM {} WHERE {} = $1", table, column))
        .bind(key)
        .fetch_optional(tx.as_mut())
        .await
}

fn store_err(collection: &'static str) -> impl Fn(sqlx::Error) -> LoadError {
    move |source| LoadError::Store { collection, source }
}
