pub mod entity;
pub mod schema;

pub use entity::{EntityStore, GeoEntity, MemoryEntityStore, ParentLink, PgEntityStore, StoreError};
