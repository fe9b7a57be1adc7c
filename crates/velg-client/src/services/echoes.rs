use tracing::info;
use velg_schemas::{EchoTrigger, Filter, Pagination};
use velg_types::{ApiResponse, EchoId, EventEcho, EventId, PaginatedResponse, SimulationId};

use super::{list_query, simulation_path};
use crate::client::{Access, ApiClient};

/// `/simulations/{id}/echoes`.
///
/// An echo starts `pending` when triggered and moves to `approved` or
/// `rejected`. The client does not check the current status before
/// calling [`EchoesApi::approve`] or [`EchoesApi::reject`]; the backend
/// owns the transition rules.
#[derive(Debug, Clone, Copy)]
pub struct EchoesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> EchoesApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Echoes targeting or leaving a simulation.
    pub async fn list_for_simulation(
        &self,
        simulation_id: SimulationId,
        page: Pagination,
        filter: &Filter,
    ) -> ApiResponse<PaginatedResponse<EventEcho>> {
        self.client
            .get_with(
                &simulation_path(simulation_id, "/echoes"),
                &list_query(page, filter),
                Access::PublicIfAnonymous,
            )
            .await
    }

    /// Echoes of one event.
    pub async fn list_for_event(
        &self,
        simulation_id: SimulationId,
        event_id: EventId,
    ) -> ApiResponse<Vec<EventEcho>> {
        self.client
            .get_with(
                &simulation_path(simulation_id, &format!("/events/{event_id}/echoes")),
                &[],
                Access::PublicIfAnonymous,
            )
            .await
    }

    /// Propagate an event into another simulation.
    pub async fn trigger_echo(
        &self,
        simulation_id: SimulationId,
        data: &EchoTrigger,
    ) -> ApiResponse<EventEcho> {
        info!(
            %simulation_id,
            target_simulation_id = %data.target_simulation_id,
            echo_vector = data.echo_vector.as_str(),
            "triggering echo"
        );
        self.client
            .post(&simulation_path(simulation_id, "/echoes"), data)
            .await
    }

    /// Approve a pending echo.
    pub async fn approve(
        &self,
        simulation_id: SimulationId,
        echo_id: EchoId,
    ) -> ApiResponse<EventEcho> {
        self.client
            .patch(
                &simulation_path(simulation_id, &format!("/echoes/{echo_id}/approve")),
                None,
            )
            .await
    }

    /// Reject a pending echo.
    pub async fn reject(
        &self,
        simulation_id: SimulationId,
        echo_id: EchoId,
    ) -> ApiResponse<EventEcho> {
        self.client
            .patch(
                &simulation_path(simulation_id, &format!("/echoes/{echo_id}/reject")),
                None,
            )
            .await
    }
}
