//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every backend resource carries a strongly-typed ID so a simulation id can
//! never be passed where a member id is expected. The backend generates ids;
//! the `new()` constructors exist for tests and fixtures.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl core::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

define_id! {
    /// Identifier of an authenticated platform user.
    UserId
}

define_id! {
    /// Identifier of a simulation (the tenant boundary).
    SimulationId
}

define_id! {
    /// Identifier of a simulation membership record.
    MemberId
}

define_id! {
    /// Identifier of a simulation setting row.
    SettingId
}

define_id! {
    /// Identifier of a taxonomy value.
    TaxonomyId
}

define_id! {
    /// Identifier of an agent.
    AgentId
}

define_id! {
    /// Identifier of a building.
    BuildingId
}

define_id! {
    /// Identifier of a simulation event.
    EventId
}

define_id! {
    /// Identifier of a cross-simulation event echo.
    EchoId
}

define_id! {
    /// Identifier of a city.
    CityId
}

define_id! {
    /// Identifier of a zone inside a city.
    ZoneId
}

define_id! {
    /// Identifier of a street.
    StreetId
}

define_id! {
    /// Identifier of a connection between two simulations.
    ConnectionId
}
