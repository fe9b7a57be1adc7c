use velg_client::SessionState;

/// A section of the simulation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationTab {
    /// World lore.
    Lore,
    /// Health dashboard.
    Health,
    /// Agents.
    Agents,
    /// Buildings.
    Buildings,
    /// Events.
    Events,
    /// Agent chat.
    Chat,
    /// Social media feed.
    Social,
    /// Cities, zones and streets.
    Locations,
    /// Simulation settings (admins only).
    Settings,
}

impl SimulationTab {
    /// Every tab in display order.
    pub const ALL: [Self; 9] = [
        Self::Lore,
        Self::Health,
        Self::Agents,
        Self::Buildings,
        Self::Events,
        Self::Chat,
        Self::Social,
        Self::Locations,
        Self::Settings,
    ];

    /// Path segment.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Lore => "lore",
            Self::Health => "health",
            Self::Agents => "agents",
            Self::Buildings => "buildings",
            Self::Events => "events",
            Self::Chat => "chat",
            Self::Social => "social",
            Self::Locations => "locations",
            Self::Settings => "settings",
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lore => "Lore",
            Self::Health => "Health",
            Self::Agents => "Agents",
            Self::Buildings => "Buildings",
            Self::Events => "Events",
            Self::Chat => "Chat",
            Self::Social => "Social",
            Self::Locations => "Locations",
            Self::Settings => "Settings",
        }
    }

    /// Tab whose path segment is exactly `segment`.
    pub fn from_path(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.path() == segment)
    }

    /// Tab addressed by a route such as `/simulations/{slug}/{tab}/...`.
    ///
    /// Whole segments are compared, and the slug itself is never
    /// considered, so `/simulations/lore-keepers/events` selects events.
    /// Routes naming no tab select lore.
    pub fn for_route(current_path: &str) -> Self {
        let mut segments = current_path
            .split(['/', '?', '#'])
            .filter(|s| !s.is_empty())
            .peekable();
        if segments.peek() == Some(&"simulations") {
            let _slug = segments.nth(1);
        }
        segments.find_map(Self::from_path).unwrap_or(Self::Lore)
    }

    /// Only shown to owners and admins.
    pub const fn requires_admin(self) -> bool {
        matches!(self, Self::Settings)
    }
}

/// One rendered tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    /// Which section.
    pub tab: SimulationTab,
    /// Link target, `/simulations/{slug}/{path}`.
    pub href: String,
    /// The section currently shown.
    pub active: bool,
}

/// Tab bar of the simulation shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationNavView {
    /// Visible tabs in display order.
    pub tabs: Vec<NavTab>,
    /// Label of the active tab, empty when it is hidden.
    pub active_label: &'static str,
}

impl SimulationNavView {
    /// Build the tab bar.
    ///
    /// Links use the current simulation's slug, or `fallback_slug` when
    /// none is open. The active tab comes from [`SimulationTab::for_route`].
    pub fn new(session: &SessionState, fallback_slug: &str, current_path: &str) -> Self {
        let slug = session
            .current_simulation
            .as_ref()
            .map_or(fallback_slug, |s| s.slug.as_str());
        let active = SimulationTab::for_route(current_path);
        let can_admin = session.can_admin();

        let tabs: Vec<NavTab> = SimulationTab::ALL
            .into_iter()
            .filter(|t| can_admin || !t.requires_admin())
            .map(|tab| NavTab {
                tab,
                href: format!("/simulations/{slug}/{}", tab.path()),
                active: tab == active,
            })
            .collect();
        let active_label = tabs
            .iter()
            .find(|t| t.active)
            .map_or("", |t| t.tab.label());

        Self { tabs, active_label }
    }
}

#[cfg(test)]
mod tests {
    use velg_types::SimulationRole;

    use super::*;

    fn session(role: Option<SimulationRole>) -> SessionState {
        let mut state = SessionState::default();
        state.current_role = role;
        state
    }

    #[test]
    fn settings_is_admin_only() {
        let viewer = SimulationNavView::new(&session(Some(SimulationRole::Editor)), "velg", "/");
        assert_eq!(viewer.tabs.len(), 8);
        assert!(viewer.tabs.iter().all(|t| t.tab != SimulationTab::Settings));

        let admin = SimulationNavView::new(&session(Some(SimulationRole::Admin)), "velg", "/");
        assert_eq!(admin.tabs.len(), 9);
    }

    #[test]
    fn active_tab_from_path() {
        let nav = SimulationNavView::new(&session(None), "velg", "/simulations/velg/events");
        assert_eq!(nav.active_label, "Events");
        assert!(nav.tabs.iter().any(|t| t.active && t.href == "/simulations/velg/events"));
    }

    #[test]
    fn defaults_to_lore() {
        let nav = SimulationNavView::new(&session(None), "velg", "/simulations/velg");
        assert_eq!(nav.active_label, "Lore");
    }

    #[test]
    fn slug_never_selects_a_tab() {
        let nav = SimulationNavView::new(
            &session(None),
            "lore-keepers",
            "/simulations/lore-keepers/events",
        );
        assert_eq!(nav.active_label, "Events");
        assert_eq!(
            SimulationTab::for_route("/simulations/agents/buildings"),
            SimulationTab::Buildings
        );
        assert_eq!(
            SimulationTab::for_route("/simulations/chat-room"),
            SimulationTab::Lore
        );
    }

    #[test]
    fn nested_routes_keep_their_tab() {
        assert_eq!(
            SimulationTab::for_route("/simulations/velg/agents/0190f5b6?tab=bio"),
            SimulationTab::Agents
        );
        assert_eq!(SimulationTab::for_route("/events/"), SimulationTab::Events);
        assert_eq!(SimulationTab::for_route(""), SimulationTab::Lore);
    }

    #[test]
    fn hidden_active_tab_has_no_label() {
        let nav = SimulationNavView::new(&session(None), "velg", "/simulations/velg/settings");
        assert_eq!(nav.active_label, "");
    }
}
