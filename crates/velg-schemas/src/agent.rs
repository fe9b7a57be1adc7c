//! Agent payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{Schema, default_data_source, url_or_empty};

/// Payload for creating an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AgentCreate {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Political or social system the agent belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Character sketch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Backstory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Gender taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Profession taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_profession: Option<String>,
    /// Portrait image URL, or empty to clear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = url_or_empty))]
    pub portrait_image_url: Option<String>,
    /// Prompt used to generate the portrait.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_description: Option<String>,
    /// Origin of the record; set once at creation.
    #[serde(default = "default_data_source")]
    pub data_source: String,
}

impl Schema for AgentCreate {
    const NAME: &'static str = "agent_create";
}

/// Partial agent update. `data_source` is not accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AgentUpdate {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,
    /// Political or social system.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Character sketch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    /// Backstory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Gender taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Profession taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_profession: Option<String>,
    /// Portrait image URL, or empty to clear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = url_or_empty))]
    pub portrait_image_url: Option<String>,
    /// Prompt used to generate the portrait.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portrait_description: Option<String>,
}

impl Schema for AgentUpdate {
    const NAME: &'static str = "agent_update";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_fills_data_source() {
        let agent = AgentCreate::parse(json!({ "name": "Viktor Harlan" }));
        assert_eq!(agent.map(|a| a.data_source).ok().as_deref(), Some("manual"));
    }

    #[test]
    fn create_requires_name() {
        let err = AgentCreate::parse(json!({ "name": "" })).err();
        assert!(err.is_some_and(|e| e.messages_for("name") == vec!["Name is required"]));

        let missing = AgentCreate::parse(json!({ "gender": "female" })).err();
        assert!(missing.is_some_and(|e| e.has_field("name")));
    }

    #[test]
    fn portrait_url_may_be_blank_but_not_garbage() {
        assert!(AgentCreate::parse(json!({ "name": "A", "portrait_image_url": "" })).is_ok());
        let err = AgentCreate::parse(json!({ "name": "A", "portrait_image_url": "nope" })).err();
        assert!(err.is_some_and(|e| e.has_field("portrait_image_url")));
    }

    #[test]
    fn update_rejects_data_source() {
        let err = AgentUpdate::parse(json!({ "data_source": "import" })).err();
        assert!(err.is_some_and(|e| e.has_field("data_source")));
    }

    #[test]
    fn update_accepts_empty_patch() {
        assert_eq!(AgentUpdate::parse(json!({})).ok(), Some(AgentUpdate::default()));
    }
}
