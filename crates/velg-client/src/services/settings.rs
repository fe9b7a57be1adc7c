use serde_json::Value;
use velg_schemas::SettingUpsert;
use velg_types::{ApiResponse, SettingCategory, SettingId, SimulationId, SimulationSetting};

use super::simulation_path;
use crate::client::ApiClient;

/// `/simulations/{id}/settings`.
#[derive(Debug, Clone, Copy)]
pub struct SettingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SettingsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Settings, optionally narrowed to one category.
    pub async fn list(
        &self,
        simulation_id: SimulationId,
        category: Option<SettingCategory>,
    ) -> ApiResponse<Vec<SimulationSetting>> {
        let query: Vec<(String, String)> = category
            .map(|c| (String::from("category"), c.as_str().to_owned()))
            .into_iter()
            .collect();
        self.client
            .get(&simulation_path(simulation_id, "/settings"), &query)
            .await
    }

    /// Settings of one category.
    pub async fn get_by_category(
        &self,
        simulation_id: SimulationId,
        category: SettingCategory,
    ) -> ApiResponse<Vec<SimulationSetting>> {
        self.list(simulation_id, Some(category)).await
    }

    /// One setting.
    pub async fn get_by_id(
        &self,
        simulation_id: SimulationId,
        setting_id: SettingId,
    ) -> ApiResponse<SimulationSetting> {
        self.client
            .get(&simulation_path(simulation_id, &format!("/settings/{setting_id}")), &[])
            .await
    }

    /// Create or replace the setting keyed by `(category, setting_key)`.
    pub async fn upsert(
        &self,
        simulation_id: SimulationId,
        data: &SettingUpsert,
    ) -> ApiResponse<SimulationSetting> {
        self.client
            .post(&simulation_path(simulation_id, "/settings"), data)
            .await
    }

    /// Delete a setting.
    pub async fn remove(
        &self,
        simulation_id: SimulationId,
        setting_id: SettingId,
    ) -> ApiResponse<()> {
        self.client
            .delete::<Value>(&simulation_path(simulation_id, &format!("/settings/{setting_id}")))
            .await
            .map(drop)
    }
}
