//! Postgres-backed entity store.

use super::{EntityStore, GeoEntity, StoreError};
use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;

/// Read-only store over one table. Queries are rendered once from the
/// entity's [`GeoEntity`] description and reused for every call.
pub struct PgEntityStore<E: GeoEntity> {
    pool: PgPool,
    select_all: String,
    select_by_key: Option<String>,
    select_children: Option<String>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: GeoEntity> Clone for PgEntityStore<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            select_all: self.select_all.clone(),
            select_by_key: self.select_by_key.clone(),
            select_children: self.select_children.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: GeoEntity> PgEntityStore<E> {
    pub fn new(pool: PgPool) -> Self {
        let columns = E::COLUMNS
            .iter()
            .map(|c| format!("e.{}", c))
            .collect::<Vec<_>>()
            .join(", ");
        let table = E::TABLE;

        let select_all = format!("SELECT {columns} FROM {table} e ORDER BY e.name, e.id");

        let select_by_key = E::NATURAL_KEY
            .map(|key| format!("SELECT {columns} FROM {table} e WHERE e.{key} = $1"));

        // Rows with a NULL foreign key never join, so they never appear as children.
        let select_children = E::PARENT.map(|parent| {
            format!(
                "SELECT {columns} FROM {table} e \
                 JOIN {ptable} p ON e.{fk} = p.id \
                 WHERE p.{pkey} = $1 \
                 ORDER BY e.name, e.id",
                ptable = parent.table,
                fk = parent.foreign_key,
                pkey = parent.natural_key,
            )
        });

        Self {
            pool,
            select_all,
            select_by_key,
            select_children,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl<E: GeoEntity> EntityStore<E> for PgEntityStore<E> {
    async fn fetch_all(&self) -> Result<Vec<E>, StoreError> {
        let rows = sqlx::query(&self.select_all).fetch_all(&self.pool).await?;
        rows.iter().map(E::from_row).collect()
    }

    async fn fetch_by_identifier(&self, key: &str) -> Result<Option<E>, StoreError> {
        let Some(sql) = self.select_by_key.as_deref() else {
            return Ok(None);
        };
        let row = sqlx::query(sql)
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(E::from_row).transpose()
    }

    async fn fetch_children(&self, parent_key: &str) -> Result<Vec<E>, StoreError> {
        let Some(sql) = self.select_children.as_deref() else {
            return Ok(Vec::new());
        };
        let rows = sqlx::query(sql)
            .bind(parent_key)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(E::from_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{City, Country, District};
    use sqlx::postgres::PgPoolOptions;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy("postgres://localhost/unused")
            .unwrap()
    }

    #[tokio::test]
    async fn renders_children_query_against_parent_natural_key() {
        let store = PgEntityStore::<District>::new(lazy_pool());
        let sql = store.select_children.as_deref().unwrap();
        assert!(sql.contains("FROM districts e JOIN regions p ON e.region_id = p.id"));
        assert!(sql.contains("WHERE p.slug = $1"));
        assert!(sql.ends_with("ORDER BY e.name, e.id"));
        assert!(store.select_all.ends_with("ORDER BY e.name, e.id"));
    }

    #[tokio::test]
    async fn country_has_no_children_query() {
        let store = PgEntityStore::<Country>::new(lazy_pool());
        assert!(store.select_children.is_none());
        assert_eq!(
            store.select_by_key.as_deref(),
            Some("SELECT e.id, e.code, e.name FROM countries e WHERE e.code = $1")
        );
    }

    #[tokio::test]
    async fn city_is_never_addressed_directly() {
        let store = PgEntityStore::<City>::new(lazy_pool());
        assert!(store.select_by_key.is_none());
        assert_eq!(store.fetch_by_identifier("anything").await.unwrap(), None);
    }
}
