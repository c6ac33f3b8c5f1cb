//! `GeoEntity` implementations for the five tables.

use super::{GeoEntity, ParentLink, StoreError};
use crate::domain::model::{City, Constituency, Country, District, DistrictKind, Region};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

impl GeoEntity for Country {
    const ENTITY: &'static str = "country";
    const TABLE: &'static str = "countries";
    const COLUMNS: &'static [&'static str] = &["id", "code", "name"];
    const NATURAL_KEY: Option<&'static str> = Some("code");
    const PARENT: Option<ParentLink> = None;

    fn from_row(row: &PgRow) -> Result<Self, StoreError> {
        Ok(Country {
            id: row.try_get("id")?,
            code: row.try_get("code")?,
            name: row.try_get("name")?,
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.code)
    }

    fn parent_id(&self) -> Option<Uuid> {
        None
    }
}

impl GeoEntity for Region {
    const ENTITY: &'static str = "region";
    const TABLE: &'static str = "regions";
    const COLUMNS: &'static [&'static str] = &["id", "country_id", "name", "slug", "capital"];
    const NATURAL_KEY: Option<&'static str> = Some("slug");
    const PARENT: Option<ParentLink> = Some(ParentLink {
        table: "countries",
        foreign_key: "country_id",
        natural_key: "code",
    });

    fn from_row(row: &PgRow) -> Result<Self, StoreError> {
        Ok(Region {
            id: row.try_get("id")?,
            country_id: row.try_get("country_id")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            capital: row.try_get("capital")?,
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn parent_id(&self) -> Option<Uuid> {
        Some(self.country_id)
    }
}

impl GeoEntity for District {
    const ENTITY: &'static str = "district";
    const TABLE: &'static str = "districts";
    const COLUMNS: &'static [&'static str] = &["id", "region_id", "name", "slug", "type", "capital"];
    const NATURAL_KEY: Option<&'static str> = Some("slug");
    const PARENT: Option<ParentLink> = Some(ParentLink {
        table: "regions",
        foreign_key: "region_id",
        natural_key: "slug",
    });

    fn from_row(row: &PgRow) -> Result<Self, StoreError> {
        let raw_kind: String = row.try_get("type")?;
        let kind = raw_kind
            .parse::<DistrictKind>()
            .map_err(|e| StoreError::Decode {
                column: "type",
                value: e.0,
            })?;
        Ok(District {
            id: row.try_get("id")?,
            region_id: row.try_get("region_id")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
            kind,
            capital: row.try_get("capital")?,
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn parent_id(&self) -> Option<Uuid> {
        Some(self.region_id)
    }
}

impl GeoEntity for Constituency {
    const ENTITY: &'static str = "constituency";
    const TABLE: &'static str = "constituencies";
    const COLUMNS: &'static [&'static str] = &["id", "district_id", "name", "slug"];
    const NATURAL_KEY: Option<&'static str> = Some("slug");
    const PARENT: Option<ParentLink> = Some(ParentLink {
        table: "districts",
        foreign_key: "district_id",
        natural_key: "slug",
    });

    fn from_row(row: &PgRow) -> Result<Self, StoreError> {
        Ok(Constituency {
            id: row.try_get("id")?,
            district_id: row.try_get("district_id")?,
            name: row.try_get("name")?,
            slug: row.try_get("slug")?,
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn parent_id(&self) -> Option<Uuid> {
        self.district_id
    }
}

impl GeoEntity for City {
    const ENTITY: &'static str = "city";
    const TABLE: &'static str = "cities";
    const COLUMNS: &'static [&'static str] = &["id", "district_id", "name", "lat", "lng"];
    const NATURAL_KEY: Option<&'static str> = None;
    const PARENT: Option<ParentLink> = Some(ParentLink {
        table: "districts",
        foreign_key: "district_id",
        natural_key: "slug",
    });

    fn from_row(row: &PgRow) -> Result<Self, StoreError> {
        Ok(City {
            id: row.try_get("id")?,
            district_id: row.try_get("district_id")?,
            name: row.try_get("name")?,
            lat: row.try_get("lat")?,
            lng: row.try_get("lng")?,
        })
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn natural_key(&self) -> Option<&str> {
        None
    }

    fn parent_id(&self) -> Option<Uuid> {
        Some(self.district_id)
    }
}
