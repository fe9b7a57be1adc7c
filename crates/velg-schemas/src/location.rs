//! City, zone and street payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;
use velg_types::{CityId, ZoneId};

use crate::validation::Schema;

const fn default_zoom() -> i32 {
    12
}

fn default_zone_type() -> String {
    String::from("residential")
}

fn default_security_level() -> String {
    String::from("medium")
}

/// Payload for creating a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CityCreate {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Layout type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inhabitants.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub population: i64,
    /// Map centre latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_center_lat: Option<f64>,
    /// Map centre longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_center_lng: Option<f64>,
    /// Default zoom level.
    #[serde(default = "default_zoom")]
    pub map_default_zoom: i32,
}

impl Schema for CityCreate {
    const NAME: &'static str = "city_create";
}

/// Partial city update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CityUpdate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,
    /// Layout type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Inhabitants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub population: Option<i64>,
    /// Map centre latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_center_lat: Option<f64>,
    /// Map centre longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_center_lng: Option<f64>,
    /// Default zoom level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_default_zoom: Option<i32>,
}

impl Schema for CityUpdate {
    const NAME: &'static str = "city_update";
}

/// Payload for creating a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ZoneCreate {
    /// City the zone belongs to.
    pub city_id: CityId,
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Zone type.
    #[serde(default = "default_zone_type")]
    pub zone_type: String,
    /// Estimated inhabitants.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub population_estimate: i64,
    /// Security level.
    #[serde(default = "default_security_level")]
    pub security_level: String,
    /// Origin of the record; set once at creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

impl Schema for ZoneCreate {
    const NAME: &'static str = "zone_create";
}

/// Partial zone update. Neither the city nor `data_source` can change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ZoneUpdate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Zone type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
    /// Estimated inhabitants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub population_estimate: Option<i64>,
    /// Security level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_level: Option<String>,
}

impl Schema for ZoneUpdate {
    const NAME: &'static str = "zone_update";
}

/// Payload for creating a street.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct StreetCreate {
    /// City the street belongs to.
    pub city_id: CityId,
    /// Zone the street belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub name: Option<String>,
    /// Street type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_type: Option<String>,
    /// Length in kilometres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub length_km: Option<f64>,
    /// `GeoJSON` geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geojson: Option<serde_json::Value>,
}

impl Schema for StreetCreate {
    const NAME: &'static str = "street_create";
}

/// Partial street update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct StreetUpdate {
    /// Zone the street belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub name: Option<String>,
    /// Street type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_type: Option<String>,
    /// Length in kilometres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub length_km: Option<f64>,
    /// `GeoJSON` geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geojson: Option<serde_json::Value>,
}

impl Schema for StreetUpdate {
    const NAME: &'static str = "street_update";
}
