//! Store-backed lookups against a live Postgres.
//!
//! These tests need DATABASE_URL and are ignored by default:
//!   cargo test --test test_postgres_lookup -- --ignored
//!
//! Every test scopes its own rows by unique slugs so the suite can share one
//! database and run in parallel.

use ghana_geo_api::app::fixtures::{
    CityFixture, ConstituencyFixture, CountryFixture, DistrictFixture, FixtureSet, RegionFixture,
};
use ghana_geo_api::app::wiring::pg_stores;
use ghana_geo_api::app::Loader;
use ghana_geo_api::storage::schema;
use ghana_geo_api::{CallContext, DistrictKind, LookupError, LookupService};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use tokio::sync::OnceCell;
use uuid::Uuid;

type TestResult = Result<(), Box<dyn std::error::Error>>;

static SCHEMA: OnceCell<()> = OnceCell::const_new();

async fn pool() -> Result<PgPool, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new().max_connections(4).connect(&url).await?;
    // Concurrent CREATE TABLE IF NOT EXISTS can still collide in the catalog.
    SCHEMA
        .get_or_try_init(|| async { schema::apply(&pool).await })
        .await?;
    Ok(pool)
}

fn shipped_fixtures() -> FixtureSet {
    FixtureSet::load_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
        .expect("shipped fixtures parse")
}

fn suffix() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore] // requires DATABASE_URL
async fn schema_is_complete_after_apply() -> TestResult {
    let pool = pool().await?;
    let report = schema::verify(&pool).await?;
    assert!(report.is_complete(), "missing: {:?} {:?}", report.missing_tables, report.missing_indexes);
    assert_eq!(report.present_indexes.len(), schema::INDEXES.len());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore] // requires DATABASE_URL
async fn reloading_shipped_fixtures_is_idempotent() -> TestResult {
    let pool = pool().await?;
    let fixtures = shipped_fixtures();
    let loader = Loader::new(pool.clone(), "GH");
    let service = LookupService::new(pg_stores(&pool));
    let ctx = CallContext::background();

    let first = loader.load(&fixtures).await?;
    assert_eq!(first.regions.skipped, 0);
    assert_eq!(first.districts.skipped, 0);
    assert_eq!(first.cities.skipped, 0);

    let mut before = Vec::new();
    for d in &fixtures.districts {
        before.push(service.get_district_by_slug(&ctx, &d.slug).await?);
    }
    let before_cities = service.get_cities_by_district_slug(&ctx, "accra-metropolitan").await?;

    let second = loader.load(&fixtures).await?;
    assert_eq!(first, second);

    let mut after = Vec::new();
    for d in &fixtures.districts {
        after.push(service.get_district_by_slug(&ctx, &d.slug).await?);
    }
    assert_eq!(before, after);
    assert_eq!(
        before_cities,
        service.get_cities_by_district_slug(&ctx, "accra-metropolitan").await?
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore] // requires DATABASE_URL
async fn shipped_data_answers_lookups() -> TestResult {
    let pool = pool().await?;
    Loader::new(pool.clone(), "GH").load(&shipped_fixtures()).await?;
    let service = LookupService::new(pg_stores(&pool));
    let ctx = CallContext::background();

    let ghana = service.get_country_by_code(&ctx, "GH").await?;
    assert_eq!(ghana.name, "Ghana");

    let regions = service.get_all_regions(&ctx).await?;
    let names: Vec<&str> = regions.iter().map(|r| r.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let volta = service.get_region_by_slug(&ctx, "volta").await?;
    assert_eq!(volta.country_id, ghana.id);

    let districts = service.get_districts_by_region_slug(&ctx, "volta").await?;
    assert!(districts.iter().all(|d| d.region_id == volta.id));
    assert!(districts.iter().any(|d| d.slug == "ketu-south-municipal"));

    let ketu = service.get_district_by_slug(&ctx, "ketu-south-municipal").await?;
    assert_eq!(ketu.kind, DistrictKind::Municipal);
    assert!(service
        .get_cities_by_district_slug(&ctx, "ketu-south-municipal")
        .await?
        .is_empty());

    let krachi = service.get_constituency_by_slug(&ctx, "krachi-west").await?;
    assert_eq!(krachi.district_id, None);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore] // requires DATABASE_URL
async fn not_found_and_empty_collections_differ() -> TestResult {
    let pool = pool().await?;
    let service = LookupService::new(pg_stores(&pool));
    let ctx = CallContext::background();
    let missing = format!("missing-{}", suffix());

    let err = service.get_region_by_slug(&ctx, &missing).await.unwrap_err();
    assert!(matches!(err, LookupError::NotFound { entity: "region", .. }));

    assert!(service.get_districts_by_region_slug(&ctx, &missing).await?.is_empty());
    assert!(service.get_cities_by_district_slug(&ctx, &missing).await?.is_empty());

    let err = service.get_district_by_slug(&ctx, "bad slug").await.unwrap_err();
    assert!(matches!(err, LookupError::InvalidIdentifier { .. }));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore] // requires DATABASE_URL
async fn loader_handles_missing_references() -> TestResult {
    let pool = pool().await?;
    let tag = suffix();
    let code = format!("T{}", &tag[..4]).to_uppercase();
    let region = format!("region-{tag}");
    let district = format!("district-{tag}");

    let fixtures = FixtureSet {
        countries: vec![CountryFixture {
            code: code.clone(),
            name: format!("Testland {tag}"),
        }],
        regions: vec![
            RegionFixture {
                name: "Beta".to_string(),
                slug: region.clone(),
                capital: None,
                country_code: Some(code.clone()),
            },
            RegionFixture {
                name: "Orphan".to_string(),
                slug: format!("orphan-region-{tag}"),
                capital: None,
                country_code: Some(format!("NO-{tag}")),
            },
        ],
        districts: vec![
            DistrictFixture {
                name: "Alpha".to_string(),
                slug: district.clone(),
                kind: DistrictKind::District,
                capital: None,
                region_slug: region.clone(),
            },
            DistrictFixture {
                name: "Orphan".to_string(),
                slug: format!("orphan-district-{tag}"),
                kind: DistrictKind::Metro,
                capital: None,
                region_slug: format!("nowhere-{tag}"),
            },
        ],
        constituencies: vec![
            ConstituencyFixture {
                name: "Attached".to_string(),
                slug: format!("attached-{tag}"),
                region_slug: Some(region.clone()),
                district_slug: Some(district.clone()),
            },
            ConstituencyFixture {
                name: "Detached".to_string(),
                slug: format!("detached-{tag}"),
                region_slug: Some(region.clone()),
                district_slug: Some(format!("nowhere-{tag}")),
            },
        ],
        cities: vec![
            CityFixture {
                name: "Town".to_string(),
                lat: Some(5.5),
                lng: None,
                district_slug: district.clone(),
            },
            CityFixture {
                name: "Lost".to_string(),
                lat: None,
                lng: None,
                district_slug: format!("nowhere-{tag}"),
            },
        ],
    };

    let report = Loader::new(pool.clone(), "GH").load(&fixtures).await?;
    assert_eq!(report.regions.upserted, 1);
    assert_eq!(report.regions.skipped, 1);
    assert_eq!(report.districts.upserted, 1);
    assert_eq!(report.districts.skipped, 1);
    assert_eq!(report.constituencies.upserted, 2);
    assert_eq!(report.constituencies.detached, 1);
    assert_eq!(report.cities.upserted, 1);
    assert_eq!(report.cities.skipped, 1);

    let service = LookupService::new(pg_stores(&pool));
    let ctx = CallContext::background();

    let detached = service
        .get_constituency_by_slug(&ctx, &format!("detached-{tag}"))
        .await?;
    assert_eq!(detached.district_id, None);

    let attached = service
        .get_constituencies_by_district_slug(&ctx, &district)
        .await?;
    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].name, "Attached");

    let cities = service.get_cities_by_district_slug(&ctx, &district).await?;
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0].lat, Some(5.5));
    assert_eq!(cities[0].lng, None);

    let err = service
        .get_district_by_slug(&ctx, &format!("orphan-district-{tag}"))
        .await
        .unwrap_err();
    assert!(matches!(err, LookupError::NotFound { .. }));
    Ok(())
}
