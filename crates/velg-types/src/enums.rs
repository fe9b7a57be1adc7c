//! Enumeration types shared between the platform API and its clients.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Membership roles
// ---------------------------------------------------------------------------

/// Role of a user inside a single simulation.
///
/// Roles form a strict ladder `owner > admin > editor > viewer`. The
/// permission helpers below are advisory: they gate what the UI offers,
/// the backend remains the only authority on what a caller may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum SimulationRole {
    /// Created the simulation; may transfer or delete it.
    Owner,
    /// Manages members and settings.
    Admin,
    /// Creates and edits content.
    Editor,
    /// Read-only access.
    Viewer,
}

impl SimulationRole {
    /// All roles, highest privilege first.
    pub const ALL: [Self; 4] = [Self::Owner, Self::Admin, Self::Editor, Self::Viewer];

    /// True only for [`SimulationRole::Owner`].
    pub const fn is_owner(self) -> bool {
        matches!(self, Self::Owner)
    }

    /// True for owners and admins.
    pub const fn can_admin(self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// True for owners, admins and editors.
    pub const fn can_edit(self) -> bool {
        matches!(self, Self::Owner | Self::Admin | Self::Editor)
    }

    /// Wire name of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }
}

impl core::fmt::Display for SimulationRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Simulation presets
// ---------------------------------------------------------------------------

/// Theme preset chosen when a simulation is created.
///
/// Existing simulations may carry themes outside this set (imported
/// presets), which is why [`crate::Simulation::theme`] stays a string.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum SimulationTheme {
    /// Oppressive regimes and surveillance.
    Dystopian,
    /// Idealised societies.
    Utopian,
    /// Magic and myth.
    Fantasy,
    /// Science fiction.
    Scifi,
    /// Historical settings.
    Historical,
    /// Anything else.
    #[default]
    Custom,
}

impl SimulationTheme {
    /// Wire name of the theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dystopian => "dystopian",
            Self::Utopian => "utopian",
            Self::Fantasy => "fantasy",
            Self::Scifi => "scifi",
            Self::Historical => "historical",
            Self::Custom => "custom",
        }
    }
}

// ---------------------------------------------------------------------------
// Echoes
// ---------------------------------------------------------------------------

/// Channel through which an event bleeds into another simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum EchoVector {
    /// Trade goods and markets.
    Commerce,
    /// Words and phrases.
    Language,
    /// Shared recollection.
    Memory,
    /// Emotional resonance.
    Resonance,
    /// Built forms.
    Architecture,
    /// Dreams of the inhabitants.
    Dream,
    /// Wants and cravings.
    Desire,
}

impl EchoVector {
    /// Wire name of the vector.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commerce => "commerce",
            Self::Language => "language",
            Self::Memory => "memory",
            Self::Resonance => "resonance",
            Self::Architecture => "architecture",
            Self::Dream => "dream",
            Self::Desire => "desire",
        }
    }
}

/// Lifecycle state of an [`crate::EventEcho`].
///
/// The client never enforces transitions between these states; it only
/// displays what the backend reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum EchoStatus {
    /// Awaiting approval in the target simulation.
    Pending,
    /// Approved, target event is being generated.
    Generating,
    /// Target event generated.
    Completed,
    /// Approved by a target admin.
    Approved,
    /// Rejected by a target admin.
    Rejected,
    /// Generation failed.
    Failed,
}

impl EchoStatus {
    /// Wire name of the status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Generating => "generating",
            Self::Completed => "completed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Category a simulation setting is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum SettingCategory {
    /// Name, description, locales.
    General,
    /// World-building parameters.
    World,
    /// Model and prompt configuration.
    Ai,
    /// Third-party integrations.
    Integration,
    /// Theme overrides.
    Design,
    /// Visibility and membership policy.
    Access,
}

impl SettingCategory {
    /// Wire name of the category, used as the `category` query value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::World => "world",
            Self::Ai => "ai",
            Self::Integration => "integration",
            Self::Design => "design",
            Self::Access => "access",
        }
    }
}
