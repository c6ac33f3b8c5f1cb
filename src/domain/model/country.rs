use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Top of the tree. `code` is the natural key (e.g. `GH`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}
