use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Electoral constituency. The district link is optional: some constituencies
/// could not be matched to a district when the data was loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Constituency {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<Uuid>,
    pub name: String,
    pub slug: String,
}
