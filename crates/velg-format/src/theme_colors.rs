//! Accent colour per simulation theme preset.
//!
//! One table shared by cards, map nodes and headers.

/// Colour used for themes missing from [`THEME_COLORS`].
pub const FALLBACK_THEME_COLOR: &str = "#888888";

/// Hex accent per theme preset.
pub const THEME_COLORS: &[(&str, &str)] = &[
    ("dystopian", "#ef4444"),
    ("dark", "#ef4444"),
    ("fantasy", "#f59e0b"),
    ("utopian", "#22c55e"),
    ("scifi", "#06b6d4"),
    ("historical", "#a78bfa"),
    ("custom", "#a855f7"),
    ("deep-space-horror", "#06b6d4"),
    ("arc-raiders", "#d97706"),
];

/// Accent colour for a theme, or [`FALLBACK_THEME_COLOR`].
pub fn get_theme_color(theme: &str) -> &'static str {
    THEME_COLORS
        .iter()
        .find(|&&(name, _)| name == theme)
        .map_or(FALLBACK_THEME_COLOR, |&(_, color)| color)
}

/// Semi-transparent variant of the theme colour used for glow filters.
pub fn get_glow_color(theme: &str) -> String {
    format!("{}66", get_theme_color(theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_themes() {
        assert_eq!(get_theme_color("scifi"), "#06b6d4");
        assert_eq!(get_theme_color("noir"), FALLBACK_THEME_COLOR);
    }

    #[test]
    fn glow_appends_alpha() {
        assert_eq!(get_glow_color("utopian"), "#22c55e66");
        assert_eq!(get_glow_color(""), "#88888866");
    }
}
