//! Pagination, filtering and identifier checks shared by list endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::validation::{FieldIssue, Schema, SchemaError};

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest page size the backend serves.
pub const MAX_LIMIT: u32 = 100;

const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Page window for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Pagination {
    /// Page size.
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
    /// Items to skip.
    #[serde(default)]
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Schema for Pagination {
    const NAME: &'static str = "pagination";
}

impl Pagination {
    /// Build a page window, rejecting sizes outside `1..=100`.
    pub fn new(limit: u32, offset: u32) -> Result<Self, SchemaError> {
        let page = Self { limit, offset };
        page.check()?;
        Ok(page)
    }

    /// The window following this one.
    pub const fn next(self) -> Self {
        Self {
            limit: self.limit,
            offset: self.offset.saturating_add(self.limit),
        }
    }

    /// Query pairs for the request URL.
    pub fn to_query(self) -> Vec<(String, String)> {
        vec![
            (String::from("limit"), self.limit.to_string()),
            (String::from("offset"), self.offset.to_string()),
        ]
    }
}

/// Free-text search plus exact-match filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Filter {
    /// Free-text search term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Field to value filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<BTreeMap<String, String>>,
}

impl Schema for Filter {
    const NAME: &'static str = "filter";
}

impl Filter {
    /// Query pairs for the request URL; blank searches are dropped.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| (String::from("search"), s.to_owned()));
        let filters = self
            .filters
            .iter()
            .flatten()
            .map(|(k, v)| (k.clone(), v.clone()));
        search.into_iter().chain(filters).collect()
    }
}

/// Parse a UUID string coming from user input.
pub fn parse_uuid(field: &str, value: &str) -> Result<Uuid, SchemaError> {
    Uuid::parse_str(value).map_err(|err| {
        debug!(field, %err, "rejected uuid input");
        SchemaError {
            schema: "uuid",
            issues: vec![FieldIssue {
                field: field.to_owned(),
                message: String::from("Invalid UUID format"),
            }],
        }
    })
}
