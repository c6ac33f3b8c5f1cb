//! Fixture records read by the loader, one JSON array per entity type.
//!
//! Parents are referenced by natural key (`country_code`, `region_slug`,
//! `district_slug`), never by surrogate id.

use crate::domain::model::DistrictKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryFixture {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionFixture {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub capital: Option<String>,
    /// Falls back to the loader's default country when absent.
    #[serde(default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistrictFixture {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: DistrictKind,
    #[serde(default)]
    pub capital: Option<String>,
    pub region_slug: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConstituencyFixture {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub region_slug: Option<String>,
    #[serde(default)]
    pub district_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityFixture {
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    pub district_slug: String,
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Every fixture collection, in load order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSet {
    pub countries: Vec<CountryFixture>,
    pub regions: Vec<RegionFixture>,
    pub districts: Vec<DistrictFixture>,
    pub constituencies: Vec<ConstituencyFixture>,
    pub cities: Vec<CityFixture>,
}

impl FixtureSet {
    /// Reads `countries.json`, `regions.json`, `districts.json`,
    /// `constituencies.json` and `cities.json` from `dir`.
    pub fn load_dir(dir: &Path) -> Result<Self, FixtureError> {
        Ok(Self {
            countries: read_collection(&dir.join("countries.json"))?,
            regions: read_collection(&dir.join("regions.json"))?,
            districts: read_collection(&dir.join("districts.json"))?,
            constituencies: read_collection(&dir.join("constituencies.json"))?,
            cities: read_collection(&dir.join("cities.json"))?,
        })
    }
}

fn read_collection<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, FixtureError> {
    let raw = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_set(dir: &Path, districts: &str) {
        fs::write(dir.join("countries.json"), r#"[{"code":"GH","name":"Ghana","slug":"ghana"}]"#).unwrap();
        fs::write(
            dir.join("regions.json"),
            r#"[{"name":"Volta","slug":"volta","capital":"Ho"},{"name":"Oti","slug":"oti"}]"#,
        )
        .unwrap();
        fs::write(dir.join("districts.json"), districts).unwrap();
        fs::write(
            dir.join("constituencies.json"),
            r#"[{"name":"Ho Central","slug":"ho-central","region_slug":"volta","district_slug":"ho"},{"name":"Loose","slug":"loose","region_slug":"oti"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("cities.json"),
            r#"[{"name":"Ho","slug":"ho","lat":6.6,"lng":0.47,"district_slug":"ho"},{"name":"Kpeve","district_slug":"ho"}]"#,
        )
        .unwrap();
    }

    #[test]
    fn loads_a_complete_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_set(
            dir.path(),
            r#"[{"name":"Ho Municipal","slug":"ho","type":"municipal","capital":"Ho","region_slug":"volta"}]"#,
        );

        let set = FixtureSet::load_dir(dir.path()).unwrap();
        assert_eq!(set.countries[0].code, "GH");
        assert_eq!(set.regions[1].capital, None);
        assert_eq!(set.regions[0].country_code, None);
        assert_eq!(set.districts[0].kind, DistrictKind::Municipal);
        assert_eq!(set.constituencies[1].district_slug, None);
        assert_eq!(set.cities[1].lat, None);
        assert_eq!(set.cities[0].lng, Some(0.47));
    }

    #[test]
    fn unknown_district_type_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_set(
            dir.path(),
            r#"[{"name":"Ho","slug":"ho","type":"county","region_slug":"volta"}]"#,
        );
        let err = FixtureSet::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Parse { .. }));
        assert!(err.to_string().contains("districts.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixtureSet::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, FixtureError::Read { .. }));
    }
}
