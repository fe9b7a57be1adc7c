//! Theme override configuration.
//!
//! Every key is optional: a partial config overrides only the tokens it
//! names and the base theme supplies the rest. Unknown keys are ignored.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::{Validate, ValidationError};

use crate::validation::Schema;

#[allow(clippy::expect_used)]
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex colour pattern is valid"));

#[allow(clippy::expect_used)]
static CSS_LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d+(\.\d+)?(px|em|rem|%)$").expect("css length pattern is valid")
});

#[allow(clippy::expect_used)]
static FONT_WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]00$").expect("font weight pattern is valid"));

/// Slowest and fastest allowed animation multipliers.
const ANIMATION_SPEED_RANGE: core::ops::RangeInclusive<f64> = 0.5..=2.0;

/// Shadow rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowStyle {
    /// Hard offset shadow.
    Offset,
    /// Soft blurred shadow.
    Blur,
    /// Coloured glow.
    Glow,
    /// No shadow.
    None,
}

/// Hover feedback style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverEffect {
    /// Nudge the element.
    Translate,
    /// Grow the element.
    Scale,
    /// Light up the element.
    Glow,
}

/// Heading text transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    /// ALL CAPS.
    Uppercase,
    /// Title Case.
    Capitalize,
    /// As written.
    None,
}

/// Theme token overrides stored under the `design` settings category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ThemeConfig {
    /// Primary colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_primary: Option<String>,

    /// Primary hover colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_primary_hover: Option<String>,

    /// Primary active colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_primary_active: Option<String>,

    /// Secondary colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_secondary: Option<String>,

    /// Accent colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_accent: Option<String>,

    /// Background colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_background: Option<String>,

    /// Surface colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_surface: Option<String>,

    /// Surface sunken colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_surface_sunken: Option<String>,

    /// Surface header colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_surface_header: Option<String>,

    /// Text colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_text: Option<String>,

    /// Text secondary colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_text_secondary: Option<String>,

    /// Text muted colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_text_muted: Option<String>,

    /// Border colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_border: Option<String>,

    /// Border light colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_border_light: Option<String>,

    /// Danger colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_danger: Option<String>,

    /// Success colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_success: Option<String>,

    /// Primary bg colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_primary_bg: Option<String>,

    /// Info bg colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_info_bg: Option<String>,

    /// Danger bg colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_danger_bg: Option<String>,

    /// Success bg colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_success_bg: Option<String>,

    /// Warning bg colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub color_warning_bg: Option<String>,

    /// Heading font stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Font stack must be 1 to 200 characters"))]
    pub font_heading: Option<String>,

    /// Body font stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Font stack must be 1 to 200 characters"))]
    pub font_body: Option<String>,

    /// Mono font stack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200, message = "Font stack must be 1 to 200 characters"))]
    pub font_mono: Option<String>,

    /// Heading font weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *FONT_WEIGHT_RE, message = "Must be a font weight (100-900)"))]
    pub heading_weight: Option<String>,

    /// Heading text transform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_transform: Option<TextTransform>,

    /// Heading letter spacing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = *CSS_LENGTH_RE,
        message = "Must be a CSS length value (e.g. 6px, 0.05em)"
    ))]
    pub heading_tracking: Option<String>,

    /// Base font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = *CSS_LENGTH_RE,
        message = "Must be a CSS length value (e.g. 6px, 0.05em)"
    ))]
    pub font_base_size: Option<String>,

    /// Corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = *CSS_LENGTH_RE,
        message = "Must be a CSS length value (e.g. 6px, 0.05em)"
    ))]
    pub border_radius: Option<String>,

    /// Emphasised border width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = *CSS_LENGTH_RE,
        message = "Must be a CSS length value (e.g. 6px, 0.05em)"
    ))]
    pub border_width: Option<String>,

    /// Default border width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(
        path = *CSS_LENGTH_RE,
        message = "Must be a CSS length value (e.g. 6px, 0.05em)"
    ))]
    pub border_width_default: Option<String>,

    /// Shadow rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_style: Option<ShadowStyle>,

    /// Shadow colour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub shadow_color: Option<String>,

    /// Hover feedback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_effect: Option<HoverEffect>,

    /// Animation speed multiplier as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = self::animation_speed))]
    pub animation_speed: Option<String>,

    /// CSS easing function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub animation_easing: Option<String>,

    /// Text colour on primary backgrounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(regex(path = *HEX_COLOR_RE, message = "Must be a 6-digit hex color (e.g. #0d7377)"))]
    pub text_inverse: Option<String>,
}

impl Schema for ThemeConfig {
    const NAME: &'static str = "theme_config";
}

/// Every key [`ThemeConfig`] understands, in declaration order.
pub const THEME_SETTING_KEYS: &[&str] = &[
    "color_primary",
    "color_primary_hover",
    "color_primary_active",
    "color_secondary",
    "color_accent",
    "color_background",
    "color_surface",
    "color_surface_sunken",
    "color_surface_header",
    "color_text",
    "color_text_secondary",
    "color_text_muted",
    "color_border",
    "color_border_light",
    "color_danger",
    "color_success",
    "color_primary_bg",
    "color_info_bg",
    "color_danger_bg",
    "color_success_bg",
    "color_warning_bg",
    "font_heading",
    "font_body",
    "font_mono",
    "heading_weight",
    "heading_transform",
    "heading_tracking",
    "font_base_size",
    "border_radius",
    "border_width",
    "border_width_default",
    "shadow_style",
    "shadow_color",
    "hover_effect",
    "animation_speed",
    "animation_easing",
    "text_inverse",
];

fn animation_speed(value: &str) -> Result<(), ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(speed) if ANIMATION_SPEED_RANGE.contains(&speed) => Ok(()),
        _ => Err(ValidationError::new("range")
            .with_message("Must be a number between 0.5 and 2.0".into())),
    }
}

/// Validate a partial theme config read from settings.
///
/// Returns `None` and logs the field issues when any value is invalid, so
/// a bad override never reaches the renderer.
pub fn validate_theme_config(config: &BTreeMap<String, String>) -> Option<ThemeConfig> {
    let payload = serde_json::Value::Object(
        config
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect(),
    );
    match ThemeConfig::parse(payload) {
        Ok(theme) => Some(theme),
        Err(err) => {
            let issues: Vec<String> = err.issues.iter().map(ToString::to_string).collect();
            warn!(?issues, "invalid theme config");
            None
        }
    }
}
