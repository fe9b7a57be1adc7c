use velg_schemas::{Filter, Pagination, SimulationCreate, SimulationUpdate};
use velg_types::{ApiResponse, PaginatedResponse, Simulation, SimulationId};

use super::{list_query, simulation_path};
use crate::client::{Access, ApiClient};

/// `/simulations`.
#[derive(Debug, Clone, Copy)]
pub struct SimulationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SimulationsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// One page of simulations; anonymous visitors get the public index.
    pub async fn list(
        &self,
        page: Pagination,
        filter: &Filter,
    ) -> ApiResponse<PaginatedResponse<Simulation>> {
        self.client
            .get_with("/simulations", &list_query(page, filter), Access::PublicIfAnonymous)
            .await
    }

    /// One simulation; public for anonymous visitors.
    pub async fn get_by_id(&self, id: SimulationId) -> ApiResponse<Simulation> {
        self.client
            .get_with(&simulation_path(id, ""), &[], Access::PublicIfAnonymous)
            .await
    }

    /// Create a simulation.
    pub async fn create(&self, data: &SimulationCreate) -> ApiResponse<Simulation> {
        self.client.post("/simulations", data).await
    }

    /// Partially update a simulation.
    pub async fn update(
        &self,
        id: SimulationId,
        data: &SimulationUpdate,
    ) -> ApiResponse<Simulation> {
        self.client.put(&simulation_path(id, ""), data).await
    }

    /// Delete a simulation, returning the removed record.
    pub async fn remove(&self, id: SimulationId) -> ApiResponse<Simulation> {
        self.client.delete(&simulation_path(id, "")).await
    }
}
