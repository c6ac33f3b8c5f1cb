pub mod error;
pub mod model;
pub mod validate;

pub use error::LookupError;
