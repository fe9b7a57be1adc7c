use velg_types::{ApiResponse, MapData, SimulationConnection};

use crate::client::{Access, ApiClient};

/// Cross-simulation connections and the multiverse map.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ConnectionsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Every connection; public for anonymous visitors.
    pub async fn list_all(&self) -> ApiResponse<Vec<SimulationConnection>> {
        self.client
            .get_with("/connections", &[], Access::PublicIfAnonymous)
            .await
    }

    /// Aggregated map data. Always read from the public tree.
    pub async fn map_data(&self) -> ApiResponse<MapData> {
        self.client.get_public("/map-data", &[]).await
    }
}
