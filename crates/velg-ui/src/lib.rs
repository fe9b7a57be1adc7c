//! Presentation layer of the Velgarien client.
//!
//! Views are pure: each one is a struct computed from props and a
//! [`velg_client::SessionState`] snapshot. Side effects go through the
//! [`UiBus`], which carries toasts and navigation to whatever renders them.
//!
//! # Modules
//!
//! - [`bus`] -- [`UiBus`], [`UiEvent`], [`Toast`]
//! - [`error_handler`] -- [`ErrorHandler`]: API error codes to toasts and redirects
//! - [`views`] -- Avatar, empty state, echo card, simulation nav and header

pub mod bus;
pub mod error_handler;
pub mod views;

pub use bus::{LOGIN_ROUTE, Route, Toast, ToastType, UiBus, UiEvent};
pub use error_handler::ErrorHandler;
pub use views::{
    AvatarContent, AvatarView, BadgeVariant, EchoCardView, EmptyStateView, NavTab,
    SimulationHeaderView, SimulationNavView, SimulationTab, StatusBadge,
};
