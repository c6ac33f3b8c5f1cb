//! The lookup contract the transport layer depends on.
//!
//! For every operation: validate caller-supplied slugs, delegate to the
//! entity store under the caller's [`CallContext`], then translate absence.
//! Single-entity lookups turn absence into `NotFound`; parent-scoped
//! collections return an empty `Vec` whether or not the parent exists.

use crate::app::context::CallContext;
use crate::domain::model::{City, Constituency, Country, District, Region};
use crate::domain::validate::validate_identifier;
use crate::domain::LookupError;
use crate::storage::{EntityStore, GeoEntity, StoreError};
use std::sync::Arc;

/// The five entity stores the service reads from.
#[derive(Clone)]
pub struct Stores {
    pub countries: Arc<dyn EntityStore<Country>>,
    pub regions: Arc<dyn EntityStore<Region>>,
    pub districts: Arc<dyn EntityStore<District>>,
    pub constituencies: Arc<dyn EntityStore<Constituency>>,
    pub cities: Arc<dyn EntityStore<City>>,
}

/// Stateless: each call is independent and holds no locks.
#[derive(Clone)]
pub struct LookupService {
    stores: Stores,
}

impl LookupService {
    pub fn new(stores: Stores) -> Self {
        Self { stores }
    }

    pub async fn get_all_countries(&self, ctx: &CallContext) -> Result<Vec<Country>, LookupError> {
        all(ctx, self.stores.countries.as_ref()).await
    }

    /// Country codes are matched exactly and are not slug-validated.
    pub async fn get_country_by_code(
        &self,
        ctx: &CallContext,
        code: &str,
    ) -> Result<Country, LookupError> {
        single(ctx, self.stores.countries.as_ref(), code).await
    }

    pub async fn get_all_regions(&self, ctx: &CallContext) -> Result<Vec<Region>, LookupError> {
        all(ctx, self.stores.regions.as_ref()).await
    }

    pub async fn get_region_by_slug(
        &self,
        ctx: &CallContext,
        slug: &str,
    ) -> Result<Region, LookupError> {
        validate_identifier(slug)?;
        single(ctx, self.stores.regions.as_ref(), slug).await
    }

    pub async fn get_districts_by_region_slug(
        &self,
        ctx: &CallContext,
        region_slug: &str,
    ) -> Result<Vec<District>, LookupError> {
        validate_identifier(region_slug)?;
        children(ctx, self.stores.districts.as_ref(), region_slug).await
    }

    pub async fn get_district_by_slug(
        &self,
        ctx: &CallContext,
        slug: &str,
    ) -> Result<District, LookupError> {
        validate_identifier(slug)?;
        single(ctx, self.stores.districts.as_ref(), slug).await
    }

    pub async fn get_constituencies_by_district_slug(
        &self,
        ctx: &CallContext,
        district_slug: &str,
    ) -> Result<Vec<Constituency>, LookupError> {
        validate_identifier(district_slug)?;
        children(ctx, self.stores.constituencies.as_ref(), district_slug).await
    }

    pub async fn get_constituency_by_slug(
        &self,
        ctx: &CallContext,
        slug: &str,
    ) -> Result<Constituency, LookupError> {
        validate_identifier(slug)?;
        single(ctx, self.stores.constituencies.as_ref(), slug).await
    }

    pub async fn get_cities_by_district_slug(
        &self,
        ctx: &CallContext,
        district_slug: &str,
    ) -> Result<Vec<City>, LookupError> {
        validate_identifier(district_slug)?;
        children(ctx, self.stores.cities.as_ref(), district_slug).await
    }
}

async fn all<E: GeoEntity>(
    ctx: &CallContext,
    store: &dyn EntityStore<E>,
) -> Result<Vec<E>, LookupError> {
    ctx.run(async { store.fetch_all().await.map_err(store_failure::<E>) })
        .await
}

async fn single<E: GeoEntity>(
    ctx: &CallContext,
    store: &dyn EntityStore<E>,
    key: &str,
) -> Result<E, LookupError> {
    ctx.run(async {
        store
            .fetch_by_identifier(key)
            .await
            .map_err(store_failure::<E>)?
            .ok_or_else(|| LookupError::not_found(E::ENTITY, key))
    })
    .await
}

async fn children<E: GeoEntity>(
    ctx: &CallContext,
    store: &dyn EntityStore<E>,
    parent_key: &str,
) -> Result<Vec<E>, LookupError> {
    ctx.run(async { store.fetch_children(parent_key).await.map_err(store_failure::<E>) })
        .await
}

fn store_failure<E: GeoEntity>(err: StoreError) -> LookupError {
    tracing::error!(table = E::TABLE, error = %err, "store query failed");
    LookupError::StoreFailure(err)
}
