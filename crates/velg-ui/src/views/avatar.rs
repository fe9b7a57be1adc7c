use velg_format::{get_initials, get_theme_color};

/// What an avatar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarContent {
    /// A portrait image.
    Image {
        /// Image URL.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// Initials on a coloured disc.
    Initials(String),
}

/// A portrait, falling back to initials when no image is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarView {
    /// Image or initials.
    pub content: AvatarContent,
    /// Disc colour for the simulation theme.
    pub color: &'static str,
}

impl AvatarView {
    /// Avatar for `name`; an empty `src` counts as no image.
    pub fn new(name: &str, src: Option<&str>, theme: &str) -> Self {
        let content = match src.filter(|s| !s.is_empty()) {
            Some(src) => AvatarContent::Image {
                src: src.to_owned(),
                alt: name.to_owned(),
            },
            None => AvatarContent::Initials(get_initials(name)),
        };
        Self {
            content,
            color: get_theme_color(theme),
        }
    }
}
