//! In-memory entity store.
//!
//! Holds a fixed snapshot of rows plus the parent natural keys needed to
//! answer `fetch_children`. Used for tests and for wiring the HTTP layer
//! without a database.

use super::{EntityStore, GeoEntity, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Clone)]
pub struct MemoryEntityStore<E: GeoEntity> {
    rows: Vec<E>,
    parent_ids: HashMap<String, Uuid>,
}

impl<E: GeoEntity> MemoryEntityStore<E> {
    pub fn new(rows: Vec<E>) -> Self {
        let mut rows = rows;
        sort_by_name(&mut rows);
        Self {
            rows,
            parent_ids: HashMap::new(),
        }
    }

    /// Registers the parent level so children can be resolved by the
    /// parent's natural key.
    pub fn with_parents<P: GeoEntity>(mut self, parents: &[P]) -> Self {
        self.parent_ids = parents
            .iter()
            .filter_map(|p| p.natural_key().map(|key| (key.to_string(), p.id())))
            .collect();
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn sort_by_name<E: GeoEntity>(rows: &mut [E]) {
    rows.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));
}

#[async_trait]
impl<E: GeoEntity> EntityStore<E> for MemoryEntityStore<E> {
    async fn fetch_all(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.rows.clone())
    }

    async fn fetch_by_identifier(&self, key: &str) -> Result<Option<E>, StoreError> {
        Ok(self
            .rows
            .iter()
            .find(|row| row.natural_key() == Some(key))
            .cloned())
    }

    async fn fetch_children(&self, parent_key: &str) -> Result<Vec<E>, StoreError> {
        let Some(parent_id) = self.parent_ids.get(parent_key).copied() else {
            return Ok(Vec::new());
        };
        Ok(self
            .rows
            .iter()
            .filter(|row| row.parent_id() == Some(parent_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{City, Country, Region};

    fn country(code: &str, name: &str) -> Country {
        Country {
            id: Uuid::new_v4(),
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    fn region(country: &Country, slug: &str, name: &str) -> Region {
        Region {
            id: Uuid::new_v4(),
            country_id: country.id,
            name: name.to_string(),
            slug: slug.to_string(),
            capital: None,
        }
    }

    #[tokio::test]
    async fn fetch_all_orders_by_name() {
        let gh = country("GH", "Ghana");
        let store = MemoryEntityStore::new(vec![
            region(&gh, "volta", "Volta"),
            region(&gh, "ashanti", "Ashanti"),
            region(&gh, "central", "Central"),
        ]);
        let names: Vec<String> = store
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Ashanti", "Central", "Volta"]);
    }

    #[tokio::test]
    async fn children_of_unknown_parent_are_empty() {
        let gh = country("GH", "Ghana");
        let tg = country("TG", "Togo");
        let store = MemoryEntityStore::new(vec![region(&gh, "volta", "Volta")])
            .with_parents(&[gh.clone(), tg]);

        assert_eq!(store.fetch_children("GH").await.unwrap().len(), 1);
        assert!(store.fetch_children("TG").await.unwrap().is_empty());
        assert!(store.fetch_children("XX").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lookup_by_natural_key() {
        let gh = country("GH", "Ghana");
        let store = MemoryEntityStore::new(vec![gh.clone()]);
        assert_eq!(store.fetch_by_identifier("GH").await.unwrap(), Some(gh));
        assert_eq!(store.fetch_by_identifier("gh").await.unwrap(), None);
    }

    #[tokio::test]
    async fn cities_have_no_natural_key() {
        let city = City {
            id: Uuid::new_v4(),
            district_id: Uuid::new_v4(),
            name: "Tema".to_string(),
            lat: None,
            lng: None,
        };
        let store = MemoryEntityStore::new(vec![city]);
        assert_eq!(store.fetch_by_identifier("Tema").await.unwrap(), None);
    }
}
