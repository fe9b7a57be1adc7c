//! Shared wire types for the Velgarien simulation platform client.
//!
//! This crate is the single source of truth for the records the client
//! exchanges with the platform API. Types flow to `TypeScript` via `ts-rs`
//! so the browser bundle and the Rust client agree on one shape.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for every resource identifier
//! - [`enums`] -- Roles, themes, echo vectors/statuses, setting categories
//! - [`structs`] -- Entity records (simulations, members, locations, echoes)
//! - [`envelope`] -- [`ApiResponse`], [`ApiError`] and pagination

pub mod enums;
pub mod envelope;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{EchoStatus, EchoVector, SettingCategory, SimulationRole, SimulationTheme};
pub use envelope::{ApiError, ApiResponse, ErrorKind, PaginatedResponse, PaginationMeta};
pub use ids::{
    AgentId, BuildingId, CityId, ConnectionId, EchoId, EventId, MemberId, SettingId,
    SimulationId, StreetId, TaxonomyId, UserId, ZoneId,
};
pub use structs::{
    Building, BuildingAgentRelation, BuildingProfessionRequirement, City, CityStreet, EventEcho,
    MapData, Simulation, SimulationConnection, SimulationMember, SimulationSetting,
    SimulationTaxonomy, User, Zone,
};
