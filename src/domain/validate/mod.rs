pub mod identifier;

pub use identifier::{is_valid_identifier, validate_identifier, DISALLOWED_CHARS};
