use velg_schemas::{
    CityCreate, CityUpdate, Filter, Pagination, StreetCreate, StreetUpdate, ZoneCreate, ZoneUpdate,
};
use velg_types::{
    ApiResponse, City, CityId, CityStreet, PaginatedResponse, SimulationId, StreetId, Zone, ZoneId,
};

use super::{list_query, simulation_path};
use crate::client::ApiClient;

/// Cities, zones and streets of a simulation.
#[derive(Debug, Clone, Copy)]
pub struct LocationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LocationsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    // -----------------------------------------------------------------------
    // Cities
    // -----------------------------------------------------------------------

    /// One page of cities.
    pub async fn list_cities(
        &self,
        simulation_id: SimulationId,
        page: Pagination,
        filter: &Filter,
    ) -> ApiResponse<PaginatedResponse<City>> {
        self.client
            .get(&simulation_path(simulation_id, "/cities"), &list_query(page, filter))
            .await
    }

    /// One city.
    pub async fn get_city(
        &self,
        simulation_id: SimulationId,
        city_id: CityId,
    ) -> ApiResponse<City> {
        self.client
            .get(&simulation_path(simulation_id, &format!("/cities/{city_id}")), &[])
            .await
    }

    /// Create a city.
    pub async fn create_city(
        &self,
        simulation_id: SimulationId,
        data: &CityCreate,
    ) -> ApiResponse<City> {
        self.client
            .post(&simulation_path(simulation_id, "/cities"), data)
            .await
    }

    /// Partially update a city.
    pub async fn update_city(
        &self,
        simulation_id: SimulationId,
        city_id: CityId,
        data: &CityUpdate,
    ) -> ApiResponse<City> {
        self.client
            .put(&simulation_path(simulation_id, &format!("/cities/{city_id}")), data)
            .await
    }

    // -----------------------------------------------------------------------
    // Zones
    // -----------------------------------------------------------------------

    /// One page of zones.
    pub async fn list_zones(
        &self,
        simulation_id: SimulationId,
        page: Pagination,
        filter: &Filter,
    ) -> ApiResponse<PaginatedResponse<Zone>> {
        self.client
            .get(&simulation_path(simulation_id, "/zones"), &list_query(page, filter))
            .await
    }

    /// One zone.
    pub async fn get_zone(
        &self,
        simulation_id: SimulationId,
        zone_id: ZoneId,
    ) -> ApiResponse<Zone> {
        self.client
            .get(&simulation_path(simulation_id, &format!("/zones/{zone_id}")), &[])
            .await
    }

    /// Create a zone.
    pub async fn create_zone(
        &self,
        simulation_id: SimulationId,
        data: &ZoneCreate,
    ) -> ApiResponse<Zone> {
        self.client
            .post(&simulation_path(simulation_id, "/zones"), data)
            .await
    }

    /// Partially update a zone.
    pub async fn update_zone(
        &self,
        simulation_id: SimulationId,
        zone_id: ZoneId,
        data: &ZoneUpdate,
    ) -> ApiResponse<Zone> {
        self.client
            .put(&simulation_path(simulation_id, &format!("/zones/{zone_id}")), data)
            .await
    }

    // -----------------------------------------------------------------------
    // Streets
    // -----------------------------------------------------------------------

    /// One page of streets.
    pub async fn list_streets(
        &self,
        simulation_id: SimulationId,
        page: Pagination,
        filter: &Filter,
    ) -> ApiResponse<PaginatedResponse<CityStreet>> {
        self.client
            .get(&simulation_path(simulation_id, "/streets"), &list_query(page, filter))
            .await
    }

    /// Create a street.
    pub async fn create_street(
        &self,
        simulation_id: SimulationId,
        data: &StreetCreate,
    ) -> ApiResponse<CityStreet> {
        self.client
            .post(&simulation_path(simulation_id, "/streets"), data)
            .await
    }

    /// Partially update a street.
    pub async fn update_street(
        &self,
        simulation_id: SimulationId,
        street_id: StreetId,
        data: &StreetUpdate,
    ) -> ApiResponse<CityStreet> {
        self.client
            .put(&simulation_path(simulation_id, &format!("/streets/{street_id}")), data)
            .await
    }
}
