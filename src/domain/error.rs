//! Closed error taxonomy for lookups.
//!
//! Every lookup failure is exactly one `LookupError` variant and maps to
//! exactly one HTTP status via [`LookupError::status`].

use crate::storage::StoreError;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Caller-supplied slug failed syntactic validation.
    #[error("invalid slug format: '{identifier}'")]
    InvalidIdentifier { identifier: String },

    /// A valid identifier did not resolve to a single entity.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, key: String },

    /// The persistent store could not complete the query.
    #[error("store failure")]
    StoreFailure(#[source] StoreError),

    /// The caller cancelled the call while the query was in flight.
    #[error("lookup cancelled")]
    Cancelled,

    /// The caller's deadline elapsed before the query completed.
    #[error("lookup deadline exceeded")]
    DeadlineExceeded,
}

impl LookupError {
    pub fn not_found(entity: &'static str, key: &str) -> Self {
        LookupError::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            LookupError::NotFound { .. } => StatusCode::NOT_FOUND,
            LookupError::StoreFailure(_)
            | LookupError::Cancelled
            | LookupError::DeadlineExceeded => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to hand to a client. Store details stay server-side.
    pub fn public_message(&self) -> String {
        match self {
            LookupError::InvalidIdentifier { .. } => "invalid slug format".to_string(),
            LookupError::NotFound { entity, .. } => format!("{entity} not found"),
            LookupError::StoreFailure(_) => "failed to fetch data".to_string(),
            LookupError::Cancelled => "request cancelled".to_string(),
            LookupError::DeadlineExceeded => "request timed out".to_string(),
        }
    }
}

impl From<StoreError> for LookupError {
    fn from(err: StoreError) -> Self {
        LookupError::StoreFailure(err)
    }
}
