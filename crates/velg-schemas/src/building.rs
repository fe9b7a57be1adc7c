//! Building payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;
use velg_types::{CityId, StreetId, ZoneId};

use crate::validation::{Schema, default_data_source, url_or_empty};

/// Map position of a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GeoLocation {
    /// Latitude in degrees.
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    /// Longitude in degrees.
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
    /// Free-form address label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Payload for creating a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BuildingCreate {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Building type taxonomy value.
    #[validate(length(min = 1, message = "Building type is required"))]
    pub building_type: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Architectural style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Map position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub location: Option<GeoLocation>,
    /// City the building stands in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<CityId>,
    /// Zone the building stands in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    /// Street the building stands on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_id: Option<StreetId>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// How many agents it holds.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub population_capacity: i64,
    /// Year of construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<i32>,
    /// Condition taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_condition: Option<String>,
    /// Image URL, or empty to clear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = url_or_empty))]
    pub image_url: Option<String>,
    /// Special type (embassy, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_type: Option<String>,
    /// Origin of the record; set once at creation.
    #[serde(default = "default_data_source")]
    pub data_source: String,
}

impl Schema for BuildingCreate {
    const NAME: &'static str = "building_create";
}

/// Partial building update. `data_source` is not accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BuildingUpdate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,
    /// Building type taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Building type is required"))]
    pub building_type: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Architectural style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Map position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub location: Option<GeoLocation>,
    /// City the building stands in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<CityId>,
    /// Zone the building stands in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    /// Street the building stands on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_id: Option<StreetId>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// How many agents it holds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub population_capacity: Option<i64>,
    /// Year of construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<i32>,
    /// Condition taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_condition: Option<String>,
    /// Image URL, or empty to clear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = url_or_empty))]
    pub image_url: Option<String>,
    /// Special type (embassy, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_type: Option<String>,
}

impl Schema for BuildingUpdate {
    const NAME: &'static str = "building_update";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_defaults() {
        let building = BuildingCreate::parse(json!({
            "name": "Ministry of Truth",
            "building_type": "government"
        }));
        assert!(building.is_ok_and(|b| b.population_capacity == 0 && b.data_source == "manual"));
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let err = BuildingCreate::parse(json!({
            "name": "Depot",
            "building_type": "industrial",
            "population_capacity": -4
        }))
        .err();
        assert!(err.is_some_and(|e| e.has_field("population_capacity")));
    }

    #[test]
    fn nested_location_errors_carry_a_path() {
        let err = BuildingCreate::parse(json!({
            "name": "Lighthouse",
            "building_type": "infrastructure",
            "location": { "lat": 123.0, "lng": 10.0 }
        }))
        .err();
        assert!(err.is_some_and(|e| e.has_field("location.lat")));
    }

    #[test]
    fn malformed_uuid_is_a_field_issue_not_a_panic() {
        let err = BuildingCreate::parse(json!({
            "name": "Depot",
            "building_type": "industrial",
            "city_id": "north"
        }));
        assert!(err.is_err());
    }
}
