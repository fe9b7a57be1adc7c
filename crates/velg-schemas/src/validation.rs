//! The [`Schema`] trait and the field-level failure channel.

use serde::de::DeserializeOwned;
use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors, ValidationErrorsKind};

/// Field name reported when a decoding failure cannot be tied to one field.
const PAYLOAD_FIELD: &str = "payload";

/// Value the platform stores in `data_source` for hand-authored records.
pub(crate) const MANUAL_DATA_SOURCE: &str = "manual";

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FieldIssue {
    /// Dotted path of the field (`location.lat`, `tags[2]`).
    pub field: String,
    /// Human-readable message.
    pub message: String,
}

impl core::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A payload rejected before it left the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{schema} payload rejected ({count} issue(s))", count = .issues.len())]
pub struct SchemaError {
    /// Name of the schema that rejected the payload.
    pub schema: &'static str,
    /// Every failing field, sorted by field path.
    pub issues: Vec<FieldIssue>,
}

impl SchemaError {
    /// Messages reported for one field.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.issues
            .iter()
            .filter(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
            .collect()
    }

    /// Whether any issue concerns the given field.
    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    fn from_serde(schema: &'static str, err: &serde_json::Error) -> Self {
        let message = err.to_string();
        let field = backticked_field(&message).unwrap_or(PAYLOAD_FIELD).to_owned();
        Self {
            schema,
            issues: vec![FieldIssue { field, message }],
        }
    }

    fn from_validation(schema: &'static str, errors: &ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_issues("", errors, &mut issues);
        issues.sort();
        Self { schema, issues }
    }
}

/// A validated request payload.
///
/// Implementors derive `Deserialize` (with their defaults) and `Validate`
/// (with their constraints); the provided methods do the rest.
pub trait Schema: DeserializeOwned + Validate + Sized {
    /// Name used in error reports and logs.
    const NAME: &'static str;

    /// Decode and validate a JSON payload.
    fn parse(payload: serde_json::Value) -> Result<Self, SchemaError> {
        let value: Self = serde_json::from_value(payload)
            .map_err(|err| SchemaError::from_serde(Self::NAME, &err))?;
        value.check()?;
        Ok(value)
    }

    /// Validate a payload built in code.
    fn check(&self) -> Result<(), SchemaError> {
        self.validate()
            .map_err(|errors| SchemaError::from_validation(Self::NAME, &errors))
    }
}

fn collect_issues(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldIssue>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|err| FieldIssue {
                    field: path.clone(),
                    message: describe(err),
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_issues(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_issues(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    let param = |name: &str| err.params.get(name).map(ToString::to_string);
    match err.code.as_ref() {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max} characters"),
            (Some(min), None) => format!("must be at least {min} characters"),
            (None, Some(max)) => format!("must be at most {max} characters"),
            (None, None) => String::from("has an invalid length"),
        },
        "range" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be at least {min}"),
            (None, Some(max)) => format!("must be at most {max}"),
            (None, None) => String::from("is out of range"),
        },
        "url" => String::from("must be a valid URL"),
        "regex" => String::from("has an invalid format"),
        other => format!("failed check `{other}`"),
    }
}

/// Extract the name in the first pair of backticks of a serde message
/// (`unknown field `data_source`, expected ...`).
fn backticked_field(message: &str) -> Option<&str> {
    if !(message.starts_with("unknown field") || message.starts_with("missing field")) {
        return None;
    }
    let (_, rest) = message.split_once('`')?;
    let (field, _) = rest.split_once('`')?;
    Some(field)
}

// ---------------------------------------------------------------------------
// Shared field checks and defaults
// ---------------------------------------------------------------------------

/// Accept an empty string (cleared field) or a valid URL.
pub(crate) fn url_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("must be a valid URL or empty".into()))
    }
}

pub(crate) fn default_data_source() -> String {
    String::from(MANUAL_DATA_SOURCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_unknown_and_missing_fields() {
        assert_eq!(
            backticked_field("unknown field `data_source`, expected one of `name`"),
            Some("data_source")
        );
        assert_eq!(backticked_field("missing field `name`"), Some("name"));
        assert_eq!(backticked_field("invalid type: integer `3`, expected a string"), None);
    }

    #[test]
    fn url_or_empty_accepts_blank() {
        assert!(url_or_empty("").is_ok());
        assert!(url_or_empty("https://cdn.example.org/a.png").is_ok());
        assert!(url_or_empty("not a url").is_err());
    }

    #[test]
    fn describe_uses_bounds() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &1);
        err.add_param("max".into(), &10);
        assert_eq!(describe(&err), "must be between 1 and 10");
    }
}
