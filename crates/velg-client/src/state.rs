//! Session state shared by the services and the views.
//!
//! [`AppState`] owns one [`SessionState`] behind a `tokio::sync::watch`
//! channel. Every setter replaces the snapshot and notifies subscribers,
//! so views re-render from [`AppState::subscribe`] instead of polling.
//! Derived flags (`is_authenticated`, `can_edit`, ...) are methods on the
//! snapshot and cannot be set on their own.
//!
//! Each [`AppState::set_current_simulation`] bumps a context generation.
//! A request that loads simulation-scoped data captures a
//! [`ContextToken`] before it is sent and applies its result through a
//! `*_for` setter, which discards the result if the user switched or
//! cleared the simulation in the meantime.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;
use velg_types::{
    Simulation, SimulationId, SimulationRole, SimulationSetting, SimulationTaxonomy, User,
};

/// Point-in-time copy of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Signed-in user.
    pub user: Option<User>,
    /// Bearer token for authenticated requests.
    pub access_token: Option<String>,
    /// The simulation the user is working in.
    pub current_simulation: Option<Simulation>,
    /// Simulations visible to the user.
    pub simulations: Vec<Simulation>,
    /// The user's role in the current simulation.
    pub current_role: Option<SimulationRole>,
    /// Taxonomies of the current simulation, in backend order.
    pub taxonomies: Vec<SimulationTaxonomy>,
    /// Settings of the current simulation.
    pub settings: Vec<SimulationSetting>,
    /// Whether a page-level load is in flight.
    pub loading: bool,
    generation: u64,
}

impl SessionState {
    /// A user is signed in.
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Id of the current simulation.
    pub fn simulation_id(&self) -> Option<SimulationId> {
        self.current_simulation.as_ref().map(|sim| sim.id)
    }

    /// The user owns the current simulation.
    pub fn is_owner(&self) -> bool {
        self.current_role.is_some_and(SimulationRole::is_owner)
    }

    /// The user is an owner or admin of the current simulation.
    pub fn can_admin(&self) -> bool {
        self.current_role.is_some_and(SimulationRole::can_admin)
    }

    /// The user may edit content in the current simulation.
    pub fn can_edit(&self) -> bool {
        self.current_role.is_some_and(SimulationRole::can_edit)
    }

    /// Taxonomies of one type, keeping their relative order.
    pub fn taxonomies_by_type(&self, taxonomy_type: &str) -> Vec<SimulationTaxonomy> {
        self.taxonomies
            .iter()
            .filter(|t| t.taxonomy_type == taxonomy_type)
            .cloned()
            .collect()
    }

    /// Token for the simulation context as it is now.
    pub fn context_token(&self) -> ContextToken {
        ContextToken {
            simulation_id: self.simulation_id(),
            generation: self.generation,
        }
    }

    fn clear_context(&mut self) {
        self.current_role = None;
        self.taxonomies.clear();
        self.settings.clear();
    }
}

/// Identifies the simulation context a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextToken {
    /// Simulation that was current when the token was taken.
    pub simulation_id: Option<SimulationId>,
    generation: u64,
}

/// Process-wide session store.
///
/// Cloning is cheap and every clone observes the same state.
#[derive(Debug, Clone)]
pub struct AppState {
    tx: Arc<watch::Sender<SessionState>>,
}

impl AppState {
    /// Create an empty session.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SessionState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Receive a notification after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.tx.borrow())
    }

    // -----------------------------------------------------------------------
    // Setters
    // -----------------------------------------------------------------------

    /// Replace the signed-in user.
    pub fn set_user(&self, user: Option<User>) {
        self.tx.send_modify(|s| s.user = user);
    }

    /// Replace the bearer token.
    pub fn set_access_token(&self, token: Option<String>) {
        self.tx.send_modify(|s| s.access_token = token);
    }

    /// Replace the current simulation.
    ///
    /// Clearing it also clears the role, taxonomies and settings in the
    /// same update. Switching to another simulation leaves them in place,
    /// so callers must reload role, taxonomies and settings after a switch
    /// (through the `*_for` setters with a fresh [`Self::context_token`]).
    /// Any call invalidates outstanding [`ContextToken`]s.
    pub fn set_current_simulation(&self, simulation: Option<Simulation>) {
        self.tx.send_modify(|s| {
            let cleared = simulation.is_none();
            s.current_simulation = simulation;
            if cleared {
                s.clear_context();
            }
            s.generation = s.generation.wrapping_add(1);
        });
    }

    /// Replace the simulation list.
    pub fn set_simulations(&self, simulations: Vec<Simulation>) {
        self.tx.send_modify(|s| s.simulations = simulations);
    }

    /// Replace the role in the current simulation.
    pub fn set_current_role(&self, role: Option<SimulationRole>) {
        self.tx.send_modify(|s| s.current_role = role);
    }

    /// Replace the taxonomies.
    pub fn set_taxonomies(&self, taxonomies: Vec<SimulationTaxonomy>) {
        self.tx.send_modify(|s| s.taxonomies = taxonomies);
    }

    /// Replace the settings.
    pub fn set_settings(&self, settings: Vec<SimulationSetting>) {
        self.tx.send_modify(|s| s.settings = settings);
    }

    /// Mark a page-level load as started or finished.
    pub fn set_loading(&self, loading: bool) {
        self.tx.send_modify(|s| s.loading = loading);
    }

    // -----------------------------------------------------------------------
    // Context-guarded setters
    // -----------------------------------------------------------------------

    /// Token for the current simulation context.
    pub fn context_token(&self) -> ContextToken {
        self.read(SessionState::context_token)
    }

    /// Apply the role only if `token` is still current.
    pub fn set_role_for(&self, token: &ContextToken, role: Option<SimulationRole>) -> bool {
        self.apply_if_current(token, "role", |s| s.current_role = role)
    }

    /// Apply the taxonomies only if `token` is still current.
    pub fn set_taxonomies_for(
        &self,
        token: &ContextToken,
        taxonomies: Vec<SimulationTaxonomy>,
    ) -> bool {
        self.apply_if_current(token, "taxonomies", |s| s.taxonomies = taxonomies)
    }

    /// Apply the settings only if `token` is still current.
    pub fn set_settings_for(&self, token: &ContextToken, settings: Vec<SimulationSetting>) -> bool {
        self.apply_if_current(token, "settings", |s| s.settings = settings)
    }

    fn apply_if_current(
        &self,
        token: &ContextToken,
        what: &'static str,
        apply: impl FnOnce(&mut SessionState),
    ) -> bool {
        let applied = self.tx.send_if_modified(|s| {
            if s.context_token() == *token {
                apply(s);
                true
            } else {
                false
            }
        });
        if !applied {
            debug!(
                what,
                simulation_id = ?token.simulation_id,
                "discarded stale response for a previous simulation context"
            );
        }
        applied
    }

    // -----------------------------------------------------------------------
    // Derived reads
    // -----------------------------------------------------------------------

    /// A user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.read(SessionState::is_authenticated)
    }

    /// The user owns the current simulation.
    pub fn is_owner(&self) -> bool {
        self.read(SessionState::is_owner)
    }

    /// The user is an owner or admin of the current simulation.
    pub fn can_admin(&self) -> bool {
        self.read(SessionState::can_admin)
    }

    /// The user may edit content in the current simulation.
    pub fn can_edit(&self) -> bool {
        self.read(SessionState::can_edit)
    }

    /// Id of the current simulation.
    pub fn simulation_id(&self) -> Option<SimulationId> {
        self.read(SessionState::simulation_id)
    }

    /// The bearer token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.read(|s| s.access_token.clone())
    }

    /// Taxonomies of one type, keeping their relative order.
    pub fn get_taxonomies_by_type(&self, taxonomy_type: &str) -> Vec<SimulationTaxonomy> {
        self.read(|s| s.taxonomies_by_type(taxonomy_type))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
