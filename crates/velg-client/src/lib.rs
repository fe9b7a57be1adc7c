//! Session state and REST access for the Velgarien simulation platform.
//!
//! # Architecture
//!
//! ```text
//! views --> services --> ApiClient --> HTTP
//!   ^                       |
//!   +------ AppState <------+ (reads token, authenticated flag)
//! ```
//!
//! # Modules
//!
//! - [`state`] -- [`AppState`] session store with change subscription
//! - [`client`] -- [`ApiClient`] and the [`Access`] mode
//! - [`services`] -- One service per resource
//! - [`config`] -- [`ClientConfig`] loaded from the environment
//! - [`error`] -- [`ClientError`] for client construction

pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

pub use client::{Access, ApiClient, Query};
pub use config::ClientConfig;
pub use error::ClientError;
pub use services::{
    AgentAssignment, BuildingsApi, ConnectionsApi, EchoesApi, LocationsApi, MembersApi,
    ProfessionRequirementInput, SettingsApi, SimulationsApi,
};
pub use state::{AppState, ContextToken, SessionState};
