//! Table layout for the geography store, plus checks used by the `migrate`
//! and `verify` binaries.

use sqlx::PgPool;

pub const TABLES: &[&str] = &["countries", "regions", "districts", "constituencies", "cities"];

pub const INDEXES: &[&str] = &[
    "idx_regions_country_id",
    "idx_regions_slug",
    "idx_districts_region_id",
    "idx_districts_slug",
    "idx_constituencies_district_id",
    "idx_constituencies_slug",
    "idx_cities_district_id",
];

/// Idempotent DDL, applied in order.
const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS countries (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        code TEXT NOT NULL UNIQUE,
        name TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS regions (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        country_id UUID NOT NULL REFERENCES countries(id),
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        capital TEXT
    )",
    "CREATE TABLE IF NOT EXISTS districts (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        region_id UUID NOT NULL REFERENCES regions(id),
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE,
        type TEXT NOT NULL CHECK (type IN ('metro', 'municipal', 'district')),
        capital TEXT
    )",
    "CREATE TABLE IF NOT EXISTS constituencies (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        district_id UUID REFERENCES districts(id),
        name TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS cities (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        district_id UUID NOT NULL REFERENCES districts(id),
        name TEXT NOT NULL,
        lat DOUBLE PRECISION,
        lng DOUBLE PRECISION,
        UNIQUE (district_id, name)
    )",
    "CREATE INDEX IF NOT EXISTS idx_regions_country_id ON regions(country_id)",
    "CREATE INDEX IF NOT EXISTS idx_regions_slug ON regions(slug)",
    "CREATE INDEX IF NOT EXISTS idx_districts_region_id ON districts(region_id)",
    "CREATE INDEX IF NOT EXISTS idx_districts_slug ON districts(slug)",
    "CREATE INDEX IF NOT EXISTS idx_constituencies_district_id ON constituencies(district_id)",
    "CREATE INDEX IF NOT EXISTS idx_constituencies_slug ON constituencies(slug)",
    "CREATE INDEX IF NOT EXISTS idx_cities_district_id ON cities(district_id)",
];

/// Creates the five tables and their indexes in a single transaction.
pub async fn apply(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for stmt in STATEMENTS {
        sqlx::query(stmt).execute(tx.as_mut()).await?;
    }
    tx.commit().await
}

/// Which expected tables and indexes are present.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub present_tables: Vec<&'static str>,
    pub missing_tables: Vec<&'static str>,
    pub present_indexes: Vec<&'static str>,
    pub missing_indexes: Vec<&'static str>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.missing_tables.is_empty()
    }
}

pub async fn verify(pool: &PgPool) -> Result<SchemaReport, sqlx::Error> {
    let mut report = SchemaReport::default();

    for table in TABLES {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT FROM information_schema.tables WHERE table_schema = 'public' AND table_name = $1)",
        )
        .bind(*table)
        .fetch_one(pool)
        .await?;
        if exists {
            report.present_tables.push(*table);
        } else {
            report.missing_tables.push(*table);
        }
    }

    for index in INDEXES {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT FROM pg_indexes WHERE indexname = $1)")
                .bind(*index)
                .fetch_one(pool)
                .await?;
        if exists {
            report.present_indexes.push(*index);
        } else {
            report.missing_indexes.push(*index);
        }
    }

    Ok(report)
}

/// Row count per table, in [`TABLES`] order.
pub async fn table_counts(pool: &PgPool) -> Result<Vec<(&'static str, i64)>, sqlx::Error> {
    let mut counts = Vec::with_capacity(TABLES.len());
    for table in TABLES {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await?;
        counts.push((*table, count));
    }
    Ok(counts)
}
