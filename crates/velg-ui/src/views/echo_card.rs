use velg_client::SessionState;
use velg_types::{EchoStatus, EventEcho, Simulation, SimulationId};

/// Maximum echo depth the platform propagates.
const MAX_ECHO_DEPTH: u8 = 3;

const UNKNOWN_SIMULATION: &str = "Unknown";

/// Colour variant of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    /// Accent colour.
    Primary,
    /// Needs attention.
    Warning,
    /// In progress.
    Info,
    /// Done.
    Success,
    /// Failed.
    Danger,
    /// Neutral.
    Default,
}

impl BadgeVariant {
    /// Variant for an echo status.
    pub const fn for_echo_status(status: EchoStatus) -> Self {
        match status {
            EchoStatus::Pending => Self::Warning,
            EchoStatus::Generating => Self::Info,
            EchoStatus::Completed => Self::Success,
            EchoStatus::Failed => Self::Danger,
            EchoStatus::Approved | EchoStatus::Rejected => Self::Default,
        }
    }

    /// CSS variant name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Default => "default",
        }
    }
}

/// Summary card of one echo.
#[derive(Debug, Clone, PartialEq)]
pub struct EchoCardView {
    /// Name of the simulation the echo leaves.
    pub source_name: String,
    /// Name of the simulation the echo enters.
    pub target_name: String,
    /// Capitalised vector name.
    pub vector_label: String,
    /// Status wire name.
    pub status_label: &'static str,
    /// Status badge colour.
    pub status_variant: BadgeVariant,
    /// Strength as a fraction in `0.0..=1.0` for the bar width.
    pub strength_fraction: f64,
    /// Strength as a whole percentage (`76%`).
    pub strength_label: String,
    /// `Depth n/3`.
    pub depth_label: String,
    /// Approve and reject are offered.
    pub can_moderate: bool,
}

impl EchoCardView {
    /// Build the card for `echo`, resolving simulation names from `simulations`.
    ///
    /// Moderation is offered only for pending echoes and only to owners or
    /// admins of the current simulation.
    pub fn new(
        echo: &EventEcho,
        simulations: &[Simulation],
        session: &SessionState,
    ) -> Self {
        let strength = echo.echo_strength.clamp(0.0, 1.0);
        Self {
            source_name: simulation_name(simulations, echo.source_simulation_id),
            target_name: simulation_name(simulations, echo.target_simulation_id),
            vector_label: capitalize(&echo.echo_vector),
            status_label: echo.status.as_str(),
            status_variant: BadgeVariant::for_echo_status(echo.status),
            strength_fraction: strength,
            strength_label: whole_percent(strength),
            depth_label: format!("Depth {}/{MAX_ECHO_DEPTH}", echo.echo_depth),
            can_moderate: echo.status == EchoStatus::Pending && session.can_admin(),
        }
    }
}

fn simulation_name(simulations: &[Simulation], id: SimulationId) -> String {
    simulations
        .iter()
        .find(|s| s.id == id)
        .map_or_else(|| UNKNOWN_SIMULATION.to_owned(), |s| s.name.clone())
}

fn whole_percent(fraction: f64) -> String {
    format!("{:.0}%", (fraction * 100.0).round())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_names_are_capitalised() {
        assert_eq!(capitalize("resonance"), "Resonance");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn strength_rounds_to_whole_percent() {
        assert_eq!(whole_percent(0.756), "76%");
        assert_eq!(whole_percent(0.745), "75%");
        assert_eq!(whole_percent(0.0), "0%");
        assert_eq!(whole_percent(1.0), "100%");
    }

    #[test]
    fn status_variants() {
        assert_eq!(BadgeVariant::for_echo_status(EchoStatus::Pending), BadgeVariant::Warning);
        assert_eq!(BadgeVariant::for_echo_status(EchoStatus::Failed).as_str(), "danger");
        assert_eq!(BadgeVariant::for_echo_status(EchoStatus::Rejected), BadgeVariant::Default);
    }
}
