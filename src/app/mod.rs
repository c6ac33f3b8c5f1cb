pub mod context;
pub mod fixtures;
pub mod loader;
pub mod lookup_service;
pub mod wiring;

pub use context::{CallContext, CancelHandle};
pub use loader::{LoadReport, Loader};
pub use lookup_service::{LookupService, Stores};
