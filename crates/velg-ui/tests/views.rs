//! View models built from realistic session snapshots.

#![allow(clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use velg_client::AppState;
use velg_format::get_theme_color;
use velg_types::{
    EchoId, EchoStatus, EventEcho, EventId, Simulation, SimulationId, SimulationRole,
};
use velg_ui::{BadgeVariant, EchoCardView, SimulationHeaderView, SimulationNavView, StatusBadge};

fn simulation(name: &str, slug: &str, status: &str) -> Simulation {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    Simulation {
        id: SimulationId::new(),
        name: name.to_owned(),
        slug: slug.to_owned(),
        description: None,
        theme: String::from("dystopian"),
        status: status.to_owned(),
        content_locale: String::from("en"),
        additional_locales: Vec::new(),
        owner_id: None,
        created_at: at,
        updated_at: at,
    }
}

fn echo(source: SimulationId, target: SimulationId, status: EchoStatus) -> EventEcho {
    let at = Utc.with_ymd_and_hms(2026, 3, 2, 8, 30, 0).unwrap();
    EventEcho {
        id: EchoId::new(),
        source_event_id: EventId::new(),
        source_simulation_id: source,
        target_simulation_id: target,
        target_event_id: None,
        echo_vector: String::from("resonance"),
        echo_strength: 0.756,
        echo_depth: 2,
        root_event_id: None,
        status,
        bleed_metadata: None,
        created_at: at,
        updated_at: at,
    }
}

#[test]
fn echo_card_resolves_names_and_moderation() {
    let velg = simulation("Velgarien", "velgarien", "active");
    let other = simulation("The Gaslit Reach", "gaslit-reach", "active");
    let state = AppState::new();
    state.set_current_simulation(Some(velg.clone()));
    state.set_current_role(Some(SimulationRole::Admin));

    let card = EchoCardView::new(
        &echo(velg.id, other.id, EchoStatus::Pending),
        &[velg, other],
        &state.snapshot(),
    );

    assert_eq!(card.source_name, "Velgarien");
    assert_eq!(card.target_name, "The Gaslit Reach");
    assert_eq!(card.vector_label, "Resonance");
    assert_eq!(card.status_label, "pending");
    assert_eq!(card.status_variant, BadgeVariant::Warning);
    assert_eq!(card.strength_label, "76%");
    assert_eq!(card.depth_label, "Depth 2/3");
    assert!(card.can_moderate);
}

#[test]
fn echo_card_hides_moderation_from_viewers_and_settled_echoes() {
    let velg = simulation("Velgarien", "velgarien", "active");
    let state = AppState::new();
    state.set_current_simulation(Some(velg.clone()));
    state.set_current_role(Some(SimulationRole::Viewer));

    let pending = echo(velg.id, SimulationId::new(), EchoStatus::Pending);
    let card = EchoCardView::new(&pending, &[velg.clone()], &state.snapshot());
    assert!(!card.can_moderate);
    assert_eq!(card.target_name, "Unknown");

    state.set_current_role(Some(SimulationRole::Owner));
    let done = echo(velg.id, velg.id, EchoStatus::Completed);
    let card = EchoCardView::new(&done, &[velg], &state.snapshot());
    assert!(!card.can_moderate);
    assert_eq!(card.status_variant, BadgeVariant::Success);
}

#[test]
fn nav_uses_current_slug() {
    let state = AppState::new();
    state.set_current_simulation(Some(simulation("Velgarien", "velgarien", "active")));
    state.set_current_role(Some(SimulationRole::Owner));

    let nav = SimulationNavView::new(
        &state.snapshot(),
        "fallback",
        "/simulations/velgarien/settings",
    );
    assert_eq!(nav.active_label, "Settings");
    assert!(nav.tabs.iter().all(|t| t.href.starts_with("/simulations/velgarien/")));
}

#[test]
fn nav_falls_back_to_route_slug() {
    let nav = SimulationNavView::new(&AppState::new().snapshot(), "gaslit-reach", "/");
    assert_eq!(
        nav.tabs.first().map(|t| t.href.as_str()),
        Some("/simulations/gaslit-reach/lore")
    );
}

#[test]
fn header_reflects_simulation_and_role() {
    let state = AppState::new();
    state.set_current_simulation(Some(simulation("Velgarien", "velgarien", "draft")));
    state.set_current_role(Some(SimulationRole::Editor));

    let header = SimulationHeaderView::from_session(&state.snapshot()).unwrap();
    assert_eq!(header.name, "Velgarien");
    assert_eq!(header.badge, StatusBadge::Draft);
    assert_eq!(header.badge.class(), "badge--draft");
    assert_eq!(header.theme_color, get_theme_color("dystopian"));
    assert_eq!(header.role_label, Some("editor"));
}
