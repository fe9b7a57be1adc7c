//! Resource services.
//!
//! Each service borrows an [`ApiClient`](crate::ApiClient) and maps one
//! domain operation onto one endpoint. Services never translate errors and
//! never cache: the envelope from the client is returned unchanged.
//! Payload types come from `velg-schemas` and are expected to have been
//! produced by [`Schema::parse`](velg_schemas::Schema::parse).

mod buildings;
mod connections;
mod echoes;
mod locations;
mod members;
mod settings;
mod simulations;

pub use buildings::{AgentAssignment, BuildingsApi, ProfessionRequirementInput};
pub use connections::ConnectionsApi;
pub use echoes::EchoesApi;
pub use locations::LocationsApi;
pub use members::MembersApi;
pub use settings::SettingsApi;
pub use simulations::SimulationsApi;

use velg_schemas::{Filter, Pagination};
use velg_types::SimulationId;

/// `/simulations/{id}{rest}`.
fn simulation_path(simulation_id: SimulationId, rest: &str) -> String {
    format!("/simulations/{simulation_id}{rest}")
}

/// Query pairs for a paged, filtered list.
fn list_query(page: Pagination, filter: &Filter) -> Vec<(String, String)> {
    let mut query = page.to_query();
    query.extend(filter.to_query());
    query
}
