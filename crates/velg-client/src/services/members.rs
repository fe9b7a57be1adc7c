use serde_json::Value;
use velg_schemas::{MemberAdd, MemberRoleChange};
use velg_types::{ApiResponse, MemberId, SimulationId, SimulationMember};

use super::simulation_path;
use crate::client::ApiClient;

/// `/simulations/{id}/members`.
///
/// Role changes are not checked against the caller's own role here; the
/// backend decides whether a change is allowed.
#[derive(Debug, Clone, Copy)]
pub struct MembersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MembersApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All members of a simulation.
    pub async fn list(&self, simulation_id: SimulationId) -> ApiResponse<Vec<SimulationMember>> {
        self.client
            .get(&simulation_path(simulation_id, "/members"), &[])
            .await
    }

    /// Add a member.
    pub async fn add(
        &self,
        simulation_id: SimulationId,
        data: &MemberAdd,
    ) -> ApiResponse<SimulationMember> {
        self.client
            .post(&simulation_path(simulation_id, "/members"), data)
            .await
    }

    /// Overwrite a member's role.
    pub async fn change_role(
        &self,
        simulation_id: SimulationId,
        member_id: MemberId,
        data: &MemberRoleChange,
    ) -> ApiResponse<SimulationMember> {
        self.client
            .put(&simulation_path(simulation_id, &format!("/members/{member_id}")), data)
            .await
    }

    /// Remove a member.
    pub async fn remove(
        &self,
        simulation_id: SimulationId,
        member_id: MemberId,
    ) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&simulation_path(simulation_id, &format!("/members/{member_id}")))
            .await
            .map(drop)
    }
}
