pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{CallContext, LookupService, Stores};
pub use domain::model::{City, Constituency, Country, District, DistrictKind, Region};
pub use domain::LookupError;
pub use infra::Config;
pub use storage::{EntityStore, MemoryEntityStore, PgEntityStore, StoreError};
