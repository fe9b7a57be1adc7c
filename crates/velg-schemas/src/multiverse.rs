//! Cross-simulation echo payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;
use velg_types::{EchoVector, EventId, SimulationId};

use crate::validation::Schema;

const fn default_echo_strength() -> f64 {
    1.0
}

/// Payload for manually triggering an echo of an event into another simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EchoTrigger {
    /// Event to echo.
    pub source_event_id: EventId,
    /// Simulation receiving the echo.
    pub target_simulation_id: SimulationId,
    /// Channel of propagation.
    pub echo_vector: EchoVector,
    /// Strength in `0.0..=1.0`.
    #[serde(default = "default_echo_strength")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub echo_strength: f64,
}

impl Schema for EchoTrigger {
    const NAME: &'static str = "echo_trigger";
}
