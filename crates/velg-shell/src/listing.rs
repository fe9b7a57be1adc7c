//! Plain-text rendering of the multiverse index.

use std::fmt::Write as _;

use velg_format::{DateStyle, FormatterContext, get_theme_color};
use velg_types::{Simulation, SimulationConnection, SimulationId};
use velg_ui::{EmptyStateView, StatusBadge};

const NO_SIMULATIONS: &str = "No simulations yet.";

/// Render simulations and the connections between them.
///
/// `total` is the server-side count, which may exceed the page shown.
pub fn render(
    simulations: &[Simulation],
    total: u64,
    connections: &[SimulationConnection],
    fmt: FormatterContext,
) -> String {
    let mut out = String::new();

    if simulations.is_empty() {
        let empty = EmptyStateView::new(NO_SIMULATIONS);
        let _ = writeln!(out, "{}", empty.message);
        return out;
    }

    let _ = writeln!(
        out,
        "Simulations ({} of {})",
        fmt.format_number(count_as_f64(simulations.len())),
        fmt.format_number(u64_as_f64(total))
    );
    for sim in simulations {
        let _ = writeln!(
            out,
            "  {name} [{class}] {color} /{slug} created {created}",
            name = sim.name,
            class = StatusBadge::for_status(&sim.status).class(),
            color = get_theme_color(&sim.theme),
            slug = sim.slug,
            created = fmt.format_date(sim.created_at, DateStyle::Medium),
        );
    }

    let active: Vec<&SimulationConnection> = connections.iter().filter(|c| c.is_active).collect();
    if !active.is_empty() {
        let _ = writeln!(out, "Connections");
        for conn in active {
            let _ = writeln!(
                out,
                "  {a} <-> {b}: {kind} at {strength}",
                a = name_of(simulations, conn.simulation_a_id),
                b = name_of(simulations, conn.simulation_b_id),
                kind = conn.connection_type,
                strength = fmt.format_percent(conn.strength),
            );
        }
    }
    out
}

fn name_of(simulations: &[Simulation], id: SimulationId) -> &str {
    simulations
        .iter()
        .find(|s| s.id == id)
        .map_or("Unknown", |s| s.name.as_str())
}

#[allow(clippy::cast_precision_loss)]
const fn count_as_f64(n: usize) -> f64 {
    n as f64
}

#[allow(clippy::cast_precision_loss)]
const fn u64_as_f64(n: u64) -> f64 {
    n as f64
}
