//! Request payload validation for the Velgarien client.
//!
//! Every create/update payload has a schema type here. A schema is a plain
//! struct deriving `serde` and `validator`: [`Schema::parse`] decodes a JSON
//! payload (filling defaults) and then checks every field constraint. Failure
//! is always a [`SchemaError`] listing field-level messages, never a panic,
//! and it is a separate channel from server-side [`velg_types::ApiError`]s.
//!
//! Update schemas are the creation schema with every field optional. They
//! refuse unknown keys, so creation-only metadata such as `data_source`
//! cannot be resupplied through an update.
//!
//! # Modules
//!
//! - [`validation`] -- [`Schema`] trait, [`SchemaError`], shared field checks
//! - [`common`] -- Pagination, filters, UUID strings
//! - [`agent`], [`building`], [`event`], [`simulation`] -- Entity schemas
//! - [`location`] -- City, zone and street schemas
//! - [`multiverse`] -- Echo trigger payload
//! - [`membership`] -- Member and setting payloads
//! - [`theme`] -- Theme override configuration

pub mod agent;
pub mod building;
pub mod common;
pub mod event;
pub mod location;
pub mod membership;
pub mod multiverse;
pub mod simulation;
pub mod theme;
pub mod validation;

pub use agent::{AgentCreate, AgentUpdate};
pub use building::{BuildingCreate, BuildingUpdate, GeoLocation};
pub use common::{Filter, Pagination, parse_uuid};
pub use event::{EventCreate, EventUpdate};
pub use location::{CityCreate, CityUpdate, StreetCreate, StreetUpdate, ZoneCreate, ZoneUpdate};
pub use membership::{MemberAdd, MemberRoleChange, SettingUpsert};
pub use multiverse::EchoTrigger;
pub use simulation::{SimulationCreate, SimulationUpdate};
pub use theme::{THEME_SETTING_KEYS, ThemeConfig, validate_theme_config};
pub use validation::{FieldIssue, Schema, SchemaError};
