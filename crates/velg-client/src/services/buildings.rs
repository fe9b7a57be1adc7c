use serde::Serialize;
use serde_json::Value;
use velg_schemas::{BuildingCreate, BuildingUpdate, Filter, Pagination};
use velg_types::{
    AgentId, ApiResponse, Building, BuildingAgentRelation, BuildingId,
    BuildingProfessionRequirement, PaginatedResponse, SimulationId,
};

use super::{list_query, simulation_path};
use crate::client::ApiClient;

/// Body of an agent assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentAssignment {
    /// Agent to assign.
    pub agent_id: AgentId,
    /// Kind of relation (`resident`, `works`, ...); the backend default when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<String>,
}

/// Body of a profession requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfessionRequirementInput {
    /// Required profession.
    pub profession: String,
    /// Minimum qualification level.
    pub min_qualification_level: i32,
    /// Whether the building cannot operate without it.
    pub is_mandatory: bool,
}

/// `/simulations/{id}/buildings`.
#[derive(Debug, Clone, Copy)]
pub struct BuildingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BuildingsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn path(simulation_id: SimulationId, building_id: BuildingId, rest: &str) -> String {
        simulation_path(simulation_id, &format!("/buildings/{building_id}{rest}"))
    }

    /// One page of buildings.
    pub async fn list(
        &self,
        simulation_id: SimulationId,
        page: Pagination,
        filter: &Filter,
    ) -> ApiResponse<PaginatedResponse<Building>> {
        self.client
            .get(&simulation_path(simulation_id, "/buildings"), &list_query(page, filter))
            .await
    }

    /// One building.
    pub async fn get_by_id(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
    ) -> ApiResponse<Building> {
        self.client
            .get(&Self::path(simulation_id, building_id, ""), &[])
            .await
    }

    /// Create a building.
    pub async fn create(
        &self,
        simulation_id: SimulationId,
        data: &BuildingCreate,
    ) -> ApiResponse<Building> {
        self.client
            .post(&simulation_path(simulation_id, "/buildings"), data)
            .await
    }

    /// Partially update a building.
    pub async fn update(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
        data: &BuildingUpdate,
    ) -> ApiResponse<Building> {
        self.client
            .put(&Self::path(simulation_id, building_id, ""), data)
            .await
    }

    /// Delete a building, returning the removed record.
    pub async fn remove(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
    ) -> ApiResponse<Building> {
        self.client
            .delete(&Self::path(simulation_id, building_id, ""))
            .await
    }

    /// Agents related to a building.
    pub async fn agents(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
    ) -> ApiResponse<Vec<BuildingAgentRelation>> {
        self.client
            .get(&Self::path(simulation_id, building_id, "/agents"), &[])
            .await
    }

    /// Relate an agent to a building.
    pub async fn assign_agent(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
        assignment: &AgentAssignment,
    ) -> ApiResponse<BuildingAgentRelation> {
        self.client
            .post(&Self::path(simulation_id, building_id, "/agents"), assignment)
            .await
    }

    /// Remove an agent from a building.
    pub async fn unassign_agent(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
        agent_id: AgentId,
    ) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&Self::path(
                simulation_id,
                building_id,
                &format!("/agents/{agent_id}"),
            ))
            .await
            .map(drop)
    }

    /// Profession requirements of a building.
    pub async fn profession_requirements(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
    ) -> ApiResponse<Vec<BuildingProfessionRequirement>> {
        self.client
            .get(
                &Self::path(simulation_id, building_id, "/profession-requirements"),
                &[],
            )
            .await
    }

    /// Add or replace a profession requirement.
    pub async fn set_profession_requirement(
        &self,
        simulation_id: SimulationId,
        building_id: BuildingId,
        requirement: &ProfessionRequirementInput,
    ) -> ApiResponse<BuildingProfessionRequirement> {
        self.client
            .post(
                &Self::path(simulation_id, building_id, "/profession-requirements"),
                requirement,
            )
            .await
    }
}
