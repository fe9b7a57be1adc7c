//! Entity records mirroring backend resources.
//!
//! The client never changes the shape of these records; it only carries
//! them between the API and the views. Every record is created by
//! deserializing a response and lives only in process memory.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EchoStatus, SimulationRole};
use crate::ids::{
    AgentId, BuildingId, CityId, ConnectionId, EchoId, EventId, MemberId, SettingId,
    SimulationId, StreetId, TaxonomyId, UserId, ZoneId,
};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// The signed-in platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct User {
    /// User id issued by the auth provider.
    pub id: UserId,
    /// Primary e-mail address, when the provider exposes it.
    #[serde(default)]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// Simulations
// ---------------------------------------------------------------------------

/// A tenant-scoped fictional world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Simulation {
    /// Simulation id.
    pub id: SimulationId,
    /// Display name.
    pub name: String,
    /// URL slug (`[a-z0-9-]+`).
    pub slug: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Theme preset name (see [`crate::SimulationTheme`] for the creatable set).
    pub theme: String,
    /// Lifecycle status (`draft`, `configuring`, `active`, `archived`).
    pub status: String,
    /// Locale content is authored in.
    #[serde(default = "default_locale")]
    pub content_locale: String,
    /// Extra locales content is translated into.
    #[serde(default)]
    pub additional_locales: Vec<String>,
    /// Owning user.
    #[serde(default)]
    pub owner_id: Option<UserId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

fn default_locale() -> String {
    String::from("en")
}

/// A user's membership in a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationMember {
    /// Membership id.
    pub id: MemberId,
    /// Simulation the membership belongs to.
    pub simulation_id: SimulationId,
    /// Member user.
    pub user_id: UserId,
    /// Role held in the simulation.
    pub member_role: SimulationRole,
    /// When the user joined.
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

/// A keyed setting scoped to one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationSetting {
    /// Setting id.
    pub id: SettingId,
    /// Owning simulation.
    pub simulation_id: SimulationId,
    /// Category name (see [`crate::SettingCategory`]).
    pub category: String,
    /// Key, unique per `(simulation, category)`.
    pub setting_key: String,
    /// Arbitrary JSON value. Secrets arrive masked.
    #[serde(default)]
    #[ts(type = "unknown")]
    pub setting_value: serde_json::Value,
    /// Last editor.
    #[serde(default)]
    pub updated_by_id: Option<UserId>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// A classification value (category, tag, profession, ...) scoped to one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationTaxonomy {
    /// Taxonomy value id.
    pub id: TaxonomyId,
    /// Owning simulation.
    pub simulation_id: SimulationId,
    /// Which taxonomy this value belongs to (`gender`, `profession`, ...).
    pub taxonomy_type: String,
    /// Machine value.
    pub value: String,
    /// Localised labels keyed by locale.
    #[serde(default)]
    pub label: BTreeMap<String, String>,
    /// Display order within the type.
    #[serde(default)]
    pub sort_order: i32,
    /// Inactive values are hidden from pickers.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

const fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// A city inside a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct City {
    /// City id.
    pub id: CityId,
    /// Owning simulation.
    pub simulation_id: SimulationId,
    /// Display name.
    pub name: String,
    /// Layout type (`grid`, `organic`, ...).
    #[serde(default)]
    pub layout_type: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Inhabitants.
    #[serde(default)]
    pub population: i64,
    /// Map centre latitude.
    #[serde(default)]
    pub map_center_lat: Option<f64>,
    /// Map centre longitude.
    #[serde(default)]
    pub map_center_lng: Option<f64>,
    /// Default zoom for the city map.
    #[serde(default = "default_zoom")]
    pub map_default_zoom: i32,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

const fn default_zoom() -> i32 {
    12
}

/// A zone (district) inside a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Zone {
    /// Zone id.
    pub id: ZoneId,
    /// Owning simulation.
    pub simulation_id: SimulationId,
    /// City the zone belongs to.
    pub city_id: CityId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Zone type (`residential`, `industrial`, ...).
    pub zone_type: String,
    /// Estimated inhabitants.
    #[serde(default)]
    pub population_estimate: i64,
    /// Security level (`low`, `medium`, `high`).
    pub security_level: String,
    /// Origin of the record.
    #[serde(default)]
    pub data_source: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// A street inside a city, optionally inside a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CityStreet {
    /// Street id.
    pub id: StreetId,
    /// Owning simulation.
    pub simulation_id: SimulationId,
    /// City the street belongs to.
    pub city_id: CityId,
    /// Zone the street belongs to.
    #[serde(default)]
    pub zone_id: Option<ZoneId>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Street type (`avenue`, `alley`, ...).
    #[serde(default)]
    pub street_type: Option<String>,
    /// Length in kilometres.
    #[serde(default)]
    pub length_km: Option<f64>,
    /// `GeoJSON` geometry.
    #[serde(default)]
    #[ts(type = "unknown")]
    pub geojson: Option<serde_json::Value>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

/// A building placed in a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Building {
    /// Building id.
    pub id: BuildingId,
    /// Owning simulation.
    pub simulation_id: SimulationId,
    /// Display name.
    pub name: String,
    /// Building type taxonomy value.
    pub building_type: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Architectural style.
    #[serde(default)]
    pub style: Option<String>,
    /// City the building stands in.
    #[serde(default)]
    pub city_id: Option<CityId>,
    /// Zone the building stands in.
    #[serde(default)]
    pub zone_id: Option<ZoneId>,
    /// Street the building stands on.
    #[serde(default)]
    pub street_id: Option<StreetId>,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// How many agents it holds.
    #[serde(default)]
    pub population_capacity: i64,
    /// Year of construction.
    #[serde(default)]
    pub construction_year: Option<i32>,
    /// Condition taxonomy value.
    #[serde(default)]
    pub building_condition: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Special type (embassy, ...).
    #[serde(default)]
    pub special_type: Option<String>,
    /// Origin of the record.
    #[serde(default)]
    pub data_source: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Link between an agent and a building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BuildingAgentRelation {
    /// Relation id.
    pub id: uuid::Uuid,
    /// Building side.
    pub building_id: BuildingId,
    /// Agent side.
    pub agent_id: AgentId,
    /// Kind of link (`works`, `lives`, ...).
    pub relation_type: String,
}

/// Profession a building needs staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BuildingProfessionRequirement {
    /// Requirement id.
    pub id: uuid::Uuid,
    /// Building the requirement applies to.
    pub building_id: BuildingId,
    /// Profession taxonomy value.
    pub profession: String,
    /// Minimum qualification level.
    #[serde(default)]
    pub min_qualification_level: i32,
    /// Whether the building cannot operate without it.
    #[serde(default)]
    pub is_mandatory: bool,
}

// ---------------------------------------------------------------------------
// Multiverse: echoes and connections
// ---------------------------------------------------------------------------

/// An event propagated from one simulation into another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventEcho {
    /// Echo id.
    pub id: EchoId,
    /// Event that caused the echo.
    pub source_event_id: EventId,
    /// Simulation the source event lives in.
    pub source_simulation_id: SimulationId,
    /// Simulation receiving the echo.
    pub target_simulation_id: SimulationId,
    /// Event generated in the target, once completed.
    #[serde(default)]
    pub target_event_id: Option<EventId>,
    /// Channel of propagation (wire name of [`crate::EchoVector`]).
    pub echo_vector: String,
    /// Strength in `0.0..=1.0`.
    pub echo_strength: f64,
    /// Hops from the root event (capped at 3 by the backend).
    pub echo_depth: u8,
    /// First event of the cascade.
    #[serde(default)]
    pub root_event_id: Option<EventId>,
    /// Approval state.
    pub status: EchoStatus,
    /// Generation metadata.
    #[serde(default)]
    #[ts(type = "unknown")]
    pub bleed_metadata: Option<serde_json::Value>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// A standing connection between two simulations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationConnection {
    /// Connection id.
    pub id: ConnectionId,
    /// First endpoint.
    pub simulation_a_id: SimulationId,
    /// Second endpoint.
    pub simulation_b_id: SimulationId,
    /// Connection type (`bleed`, ...).
    pub connection_type: String,
    /// Vectors allowed across the connection.
    #[serde(default)]
    pub bleed_vectors: Vec<String>,
    /// Strength in `0.0..=1.0`.
    pub strength: f64,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Inactive connections carry no echoes.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

/// Aggregated data for the multiverse map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MapData {
    /// Simulation nodes as returned by the backend.
    #[ts(type = "unknown[]")]
    pub simulations: Vec<serde_json::Value>,
    /// Connection edges as returned by the backend.
    #[ts(type = "unknown[]")]
    pub connections: Vec<serde_json::Value>,
    /// Echo count per simulation id.
    #[serde(default)]
    pub echo_counts: BTreeMap<String, u64>,
}
