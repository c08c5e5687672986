//! Profile font: backend `FontConfig` vs UI `FontStyle`.

use serde::{Deserialize, Serialize};

use super::color::to_valid_color;

/// Font used when none is configured or a family sanitizes to nothing.
pub const DEFAULT_FONT: &str = "Poppins";
/// Default text fill.
pub const DEFAULT_FONT_FILL: &str = "#000000";
/// Default text stroke.
pub const DEFAULT_FONT_STROKE: &str = "#000000";

/// Backend representation of the profile font.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontConfig {
    pub name: Option<String>,
    pub fill_color: Option<String>,
    pub stroke_color: Option<String>,
}

/// UI representation of the profile font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyle {
    /// CSS `font-family`; may be a full font stack.
    pub font_family: String,
    pub fill_color: String,
    pub stroke_color: String,
    pub opacity: f64,
}

impl Default for FontStyle {
    fn default() -> Self {
        font_config_to_font_style(&FontConfig::default())
    }
}

/// Maps a backend font config to the UI font style.
#[must_use]
pub fn font_config_to_font_style(config: &FontConfig) -> FontStyle {
    let font_family = config
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_FONT)
        .to_owned();

    FontStyle {
        font_family,
        fill_color: to_valid_color(config.fill_color.as_deref().unwrap_or_default(), DEFAULT_FONT_FILL),
        stroke_color: to_valid_color(
            config.stroke_color.as_deref().unwrap_or_default(),
            DEFAULT_FONT_STROKE,
        ),
        opacity: 1.0,
    }
}

/// Maps a UI font style back to the backend font config.
#[must_use]
pub fn font_style_to_font_config(style: &FontStyle) -> FontConfig {
    FontConfig {
        name: Some(font_family_to_api_name(&style.font_family)),
        fill_color: Some(to_valid_color(&style.fill_color, DEFAULT_FONT_FILL)),
        stroke_color: Some(to_valid_color(&style.stroke_color, DEFAULT_FONT_STROKE)),
    }
}

/// Reduces a CSS font stack to the single family name the backend stores.
///
/// Keeps the text before the first comma, strips surrounding quotes and drops
/// every character outside `[A-Za-z0-9-]`.
///
/// ```
/// use linkpage_core::style::font_family_to_api_name;
///
/// assert_eq!(font_family_to_api_name("'Merriweather', 'Merriweather Fallback'"), "Merriweather");
/// assert_eq!(font_family_to_api_name("!!!"), "Poppins");
/// ```
#[must_use]
pub fn font_family_to_api_name(font_family: &str) -> String {
    let first = font_family.split(',').next().unwrap_or_default().trim();
    let unquoted = first.trim_matches(|c| c == '\'' || c == '"');
    let sanitized: String = unquoted
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    if sanitized.is_empty() {
        DEFAULT_FONT.to_owned()
    } else {
        sanitized
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_defaults() {
        let style = font_config_to_font_style(&FontConfig::default());
        assert_eq!(style.font_family, DEFAULT_FONT);
        assert_eq!(style.fill_color, DEFAULT_FONT_FILL);
        assert!((style.opacity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blank_name_defaults() {
        let config = FontConfig {
            name: Some("   ".to_owned()),
            ..FontConfig::default()
        };
        assert_eq!(font_config_to_font_style(&config).font_family, DEFAULT_FONT);
    }

    #[test]
    fn test_font_stack_to_name() {
        assert_eq!(
            font_family_to_api_name("'Merriweather', 'Merriweather Fallback'"),
            "Merriweather"
        );
        assert_eq!(font_family_to_api_name("\"Space Mono\", monospace"), "SpaceMono");
        assert_eq!(font_family_to_api_name("Noto-Sans"), "Noto-Sans");
    }

    #[test]
    fn test_empty_sanitization_falls_back() {
        assert_eq!(font_family_to_api_name("!!!"), DEFAULT_FONT);
        assert_eq!(font_family_to_api_name(""), DEFAULT_FONT);
        assert_eq!(font_family_to_api_name(", serif"), DEFAULT_FONT);
    }

    #[test]
    fn test_reverse_mapping() {
        let style = FontStyle {
            font_family: "'Inter', sans-serif".to_owned(),
            fill_color: "none".to_owned(),
            stroke_color: "#333333".to_owned(),
            opacity: 0.5,
        };
        let config = font_style_to_font_config(&style);
        assert_eq!(config.name.as_deref(), Some("Inter"));
        assert_eq!(config.fill_color.as_deref(), Some(DEFAULT_FONT_FILL));
        assert_eq!(config.stroke_color.as_deref(), Some("#333333"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let config: FontConfig =
            serde_json::from_str(r##"{"name":"Lora","fillColor":"#222222"}"##).unwrap();
        assert_eq!(config.name.as_deref(), Some("Lora"));
        assert_eq!(config.fill_color.as_deref(), Some("#222222"));
        assert_eq!(config.stroke_color, None);
    }
}
