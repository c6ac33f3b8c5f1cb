//! Entity stores: one read-only store per level of the geography tree.
//!
//! Each entity type describes its table through [`GeoEntity`]; the store
//! implementations ([`PgEntityStore`], [`MemoryEntityStore`]) are generic over
//! that description so every level exposes the same three operations.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use uuid::Uuid;

pub mod memory;
pub mod postgres;
pub mod tables;

pub use memory::MemoryEntityStore;
pub use postgres::PgEntityStore;

/// Faults raised while reading from the persistent store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("column '{column}' holds an unexpected value '{value}'")]
    Decode { column: &'static str, value: String },
}

/// How a child table points at its immediate parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentLink {
    /// Parent table name.
    pub table: &'static str,
    /// Foreign-key column on the child table.
    pub foreign_key: &'static str,
    /// Natural-key column on the parent table that callers address it by.
    pub natural_key: &'static str,
}

/// Table description shared by every entity level.
pub trait GeoEntity: Clone + Send + Sync + Unpin + 'static {
    /// Singular human name used in messages (e.g. `"region"`).
    const ENTITY: &'static str;

    const TABLE: &'static str;

    /// Selected columns, in the order `from_row` expects them.
    const COLUMNS: &'static [&'static str];

    /// Natural-key column, if the entity is independently addressable.
    const NATURAL_KEY: Option<&'static str>;

    const PARENT: Option<ParentLink>;

    fn from_row(row: &PgRow) -> Result<Self, StoreError>;

    fn id(&self) -> Uuid;

    fn name(&self) -> &str;

    fn natural_key(&self) -> Option<&str>;

    fn parent_id(&self) -> Option<Uuid>;
}

/// Read-only access to one entity level.
///
/// Absence is a value (`None` / empty `Vec`), never an error. An unknown
/// parent key and a parent without children both yield an empty `Vec`.
#[async_trait]
pub trait EntityStore<E: GeoEntity>: Send + Sync {
    /// Every row, ordered by name ascending.
    async fn fetch_all(&self) -> Result<Vec<E>, StoreError>;

    /// Exact natural-key match. Entities without a natural key never resolve.
    async fn fetch_by_identifier(&self, key: &str) -> Result<Option<E>, StoreError>;

    /// Rows whose parent has natural key `parent_key`, ordered by name ascending.
    async fn fetch_children(&self, parent_key: &str) -> Result<Vec<E>, StoreError>;
}
