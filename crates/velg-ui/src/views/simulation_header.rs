use velg_client::SessionState;
use velg_format::get_theme_color;
use velg_types::SimulationRole;

/// Status pill of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBadge {
    /// Running.
    Active,
    /// Being set up (`draft` or `configuring`).
    Draft,
    /// Anything else.
    Archived,
}

impl StatusBadge {
    /// Badge for a status string.
    pub fn for_status(status: &str) -> Self {
        match status {
            "active" => Self::Active,
            "draft" | "configuring" => Self::Draft,
            _ => Self::Archived,
        }
    }

    /// CSS class.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Active => "badge--active",
            Self::Draft => "badge--draft",
            Self::Archived => "badge--archived",
        }
    }
}

/// Header of the simulation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationHeaderView {
    /// Simulation name.
    pub name: String,
    /// Status wire value.
    pub status: String,
    /// Status pill.
    pub badge: StatusBadge,
    /// Accent colour of the simulation theme.
    pub theme_color: &'static str,
    /// The viewer's role, when they are a member.
    pub role_label: Option<&'static str>,
}

impl SimulationHeaderView {
    /// Header for the current simulation; `None` when no simulation is open.
    pub fn from_session(session: &SessionState) -> Option<Self> {
        let sim = session.current_simulation.as_ref()?;
        Some(Self {
            name: sim.name.clone(),
            status: sim.status.clone(),
            badge: StatusBadge::for_status(&sim.status),
            theme_color: get_theme_color(&sim.theme),
            role_label: session.current_role.map(SimulationRole::as_str),
        })
    }
}
