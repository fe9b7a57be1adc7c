//! Event payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{Schema, default_data_source};

const fn default_impact_level() -> i32 {
    1
}

/// Payload for creating an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EventCreate {
    /// Headline.
    #[validate(length(min = 1, max = 500, message = "Title is required"))]
    pub title: String,
    /// Event type taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the event happened in-world.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Origin of the record; set once at creation.
    #[serde(default = "default_data_source")]
    pub data_source: String,
    /// Impact on a 1 to 10 scale.
    #[serde(default = "default_impact_level")]
    #[validate(range(min = 1, max = 10))]
    pub impact_level: i32,
    /// Where it happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Propaganda classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propaganda_type: Option<String>,
    /// Intended audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_demographic: Option<String>,
    /// Urgency label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<String>,
}

impl Schema for EventCreate {
    const NAME: &'static str = "event_create";
}

/// Partial event update. `data_source` is not accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EventUpdate {
    /// Headline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 500, message = "Title is required"))]
    pub title: Option<String>,
    /// Event type taxonomy value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When the event happened in-world.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
    /// Impact on a 1 to 10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 10))]
    pub impact_level: Option<i32>,
    /// Where it happened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Propaganda classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub propaganda_type: Option<String>,
    /// Intended audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_demographic: Option<String>,
    /// Urgency label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<String>,
}

impl Schema for EventUpdate {
    const NAME: &'static str = "event_update";
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_defaults() {
        let event = EventCreate::parse(json!({ "title": "Curfew extended" }));
        assert!(event.is_ok_and(|e| e.impact_level == 1 && e.tags.is_empty()));
    }

    #[test]
    fn impact_level_bounds() {
        for level in [0, 11] {
            let err = EventCreate::parse(json!({ "title": "x", "impact_level": level })).err();
            assert!(err.is_some_and(|e| e.has_field("impact_level")));
        }
        assert!(EventCreate::parse(json!({ "title": "x", "impact_level": 10 })).is_ok());
    }

    #[test]
    fn occurred_at_must_be_a_timestamp() {
        assert!(EventCreate::parse(json!({
            "title": "x",
            "occurred_at": "2026-03-01T12:00:00Z"
        }))
        .is_ok());
        assert!(
            EventCreate::parse(json!({ "title": "x", "occurred_at": "last tuesday" })).is_err()
        );
    }

    #[test]
    fn title_is_capped() {
        let long = "t".repeat(501);
        let err = EventCreate::parse(json!({ "title": long })).err();
        assert!(err.is_some_and(|e| e.has_field("title")));
    }
}
