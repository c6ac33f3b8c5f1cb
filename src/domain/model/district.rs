use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Second-level subdivision, addressed by `slug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct District {
    pub id: Uuid,
    pub region_id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: DistrictKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
}

/// Assembly classification of a district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DistrictKind {
    Metro,
    Municipal,
    District,
}

impl DistrictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistrictKind::Metro => "metro",
            DistrictKind::Municipal => "municipal",
            DistrictKind::District => "district",
        }
    }
}

impl fmt::Display for DistrictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown district type '{0}' (expected metro, municipal or district)")]
pub struct UnknownDistrictKind(pub String);

impl FromStr for DistrictKind {
    type Err = UnknownDistrictKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metro" => Ok(DistrictKind::Metro),
            "municipal" => Ok(DistrictKind::Municipal),
            "district" => Ok(DistrictKind::District),
            other => Err(UnknownDistrictKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_only_known_values() {
        assert_eq!("metro".parse::<DistrictKind>(), Ok(DistrictKind::Metro));
        assert_eq!("municipal".parse::<DistrictKind>(), Ok(DistrictKind::Municipal));
        assert_eq!("district".parse::<DistrictKind>(), Ok(DistrictKind::District));
        assert!("Metro".parse::<DistrictKind>().is_err());
        assert!("".parse::<DistrictKind>().is_err());
    }

    #[test]
    fn serializes_kind_as_type_and_omits_missing_capital() {
        let district = District {
            id: Uuid::nil(),
            region_id: Uuid::nil(),
            name: "Accra Metropolitan".to_string(),
            slug: "accra-metropolitan".to_string(),
            kind: DistrictKind::Metro,
            capital: None,
        };
        let json = serde_json::to_value(&district).unwrap();
        assert_eq!(json["type"], "metro");
        assert!(json.get("capital").is_none());
        assert!(json.get("kind").is_none());
    }
}
