use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// First-level subdivision of a country, addressed by `slug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Region {
    pub id: Uuid,
    pub country_id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
}
