//! Membership and settings payloads.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use velg_types::{SimulationRole, UserId};

use crate::validation::Schema;

/// Payload for adding a member to a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MemberAdd {
    /// User to add.
    pub user_id: UserId,
    /// Role granted.
    pub member_role: SimulationRole,
}

impl Schema for MemberAdd {
    const NAME: &'static str = "member_add";
}

/// Payload for overwriting a member's role.
///
/// No privilege check happens here: whether the caller may grant the role
/// is decided by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MemberRoleChange {
    /// New role.
    pub member_role: SimulationRole,
}

impl Schema for MemberRoleChange {
    const NAME: &'static str = "member_role_change";
}

/// Payload for creating or replacing a setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SettingUpsert {
    /// Category name.
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    /// Key within the category.
    #[validate(length(min = 1, max = 100))]
    pub setting_key: String,
    /// Value; any JSON except `null`.
    #[validate(custom(function = not_null))]
    pub setting_value: serde_json::Value,
}

impl Schema for SettingUpsert {
    const NAME: &'static str = "setting_upsert";
}

fn not_null(value: &serde_json::Value) -> Result<(), ValidationError> {
    if value.is_null() {
        Err(ValidationError::new("required").with_message("Value is required".into()))
    } else {
        Ok(())
    }
}
