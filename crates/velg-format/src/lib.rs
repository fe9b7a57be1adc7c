//! Display formatting for the Velgarien client.
//!
//! All functions are pure. The only piece of configuration, the active
//! display locale, lives in an explicit [`FormatterContext`] value owned by
//! whoever renders, so two views (or two tests) never race on a global.
//!
//! # Modules
//!
//! - [`locale`] -- Supported locales and their month/weekday names
//! - [`formatters`] -- [`FormatterContext`]: dates, relative time, numbers
//! - [`text`] -- Name initials
//! - [`theme_colors`] -- Accent colour per simulation theme

pub mod formatters;
pub mod locale;
pub mod text;
pub mod theme_colors;

pub use formatters::{DateStyle, FormatError, FormatterContext};
pub use locale::Locale;
pub use text::get_initials;
pub use theme_colors::{FALLBACK_THEME_COLOR, get_glow_color, get_theme_color};
