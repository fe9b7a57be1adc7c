//! Simulation payloads.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;
use velg_types::SimulationTheme;

use crate::validation::Schema;

/// Slugs are lowercase alphanumerics and hyphens.
#[allow(clippy::expect_used)]
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("slug pattern is valid"));

fn default_content_locale() -> String {
    String::from("en")
}

/// Payload for creating a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimulationCreate {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// URL slug; derived from the name by the backend when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(max = 100),
        regex(path = *SLUG_RE, message = "Slug must be lowercase alphanumeric with hyphens")
    )]
    pub slug: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Theme preset.
    #[serde(default)]
    pub theme: SimulationTheme,
    /// Locale content is authored in.
    #[serde(default = "default_content_locale")]
    pub content_locale: String,
    /// Extra locales to translate into.
    #[serde(default)]
    pub additional_locales: Vec<String>,
}

impl Schema for SimulationCreate {
    const NAME: &'static str = "simulation_create";
}

/// Partial simulation update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimulationUpdate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        length(max = 100),
        regex(path = *SLUG_RE, message = "Slug must be lowercase alphanumeric with hyphens")
    )]
    pub slug: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Theme preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<SimulationTheme>,
    /// Locale content is authored in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_locale: Option<String>,
    /// Extra locales to translate into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_locales: Option<Vec<String>>,
}

impl Schema for SimulationUpdate {
    const NAME: &'static str = "simulation_update";
}
