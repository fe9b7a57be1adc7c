//! View models.
//!
//! Each view is a plain struct computed from props and the session
//! snapshot. Rendering code reads the fields; nothing here performs I/O
//! or holds state of its own.

mod avatar;
mod echo_card;
mod empty_state;
mod simulation_header;
mod simulation_nav;

pub use avatar::{AvatarContent, AvatarView};
pub use echo_card::{BadgeVariant, EchoCardView};
pub use empty_state::EmptyStateView;
pub use simulation_header::{SimulationHeaderView, StatusBadge};
pub use simulation_nav::{NavTab, SimulationNavView, SimulationTab};
