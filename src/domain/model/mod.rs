//! Entity definitions for the administrative geography tree.
//!
//! The tree has a fixed depth: country -> region -> district -> constituency,
//! with cities hanging off districts as a sibling branch. All entities are
//! immutable while serving; optional scalars are `Option` and are omitted from
//! JSON when absent.

pub mod city;
pub mod constituency;
pub mod country;
pub mod district;
pub mod region;

pub use city::City;
pub use constituency::Constituency;
pub use country::Country;
pub use district::{District, DistrictKind, UnknownDistrictKind};
pub use region::Region;
