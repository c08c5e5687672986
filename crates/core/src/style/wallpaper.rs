//! Profile background: backend `WallpaperConfig` and the preview theme string.
//!
//! The preview identifies a background by a single string: a theme asset path,
//! an image URL, or one of the synthetic encodings `fill:<color>` and
//! `gradient:<color1>:<color2>`. The synthetic strings only exist for preview
//! and are decoded back with [`selected_theme_to_wallpaper`] before saving.

use serde::{Deserialize, Serialize};

use super::color::to_valid_color;

/// Stop amount used when the backend omits it or sends a negative value.
pub const DEFAULT_AMOUNT: f64 = 100.0;
/// Stop color used for malformed entries.
pub const DEFAULT_STOP_COLOR: &str = "#000000";

const FILL_THEME_PREFIX: &str = "fill:";
const GRADIENT_THEME_PREFIX: &str = "gradient:";

/// Backend representation of the profile background, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WallpaperConfig {
    Fill {
        #[serde(default, rename = "backgroundColor")]
        background_color: Vec<ColorStopEntry>,
    },
    Gradient {
        #[serde(default, rename = "backgroundColor")]
        background_color: Vec<ColorStopEntry>,
    },
    Image {
        #[serde(default)]
        image: WallpaperImage,
    },
    /// Any `type` this client does not know.
    #[serde(other)]
    Unknown,
}

/// One entry of a backend `backgroundColor` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorStopEntry {
    Stop(ColorStop),
    /// Entry that is not a `{color, amount}` object.
    Malformed(serde_json::Value),
}

/// A color and its share of the background.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// A hosted background image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WallpaperImage {
    #[serde(alias = "url")]
    pub image_url: Option<String>,
    pub public_id: Option<String>,
}

/// Color-based background kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillType {
    Fill,
    Gradient,
}

/// A normalized color stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAmount {
    pub color: String,
    pub amount: f64,
}

/// A fill or gradient background with every stop normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillGradientWallpaperConfig {
    #[serde(rename = "type")]
    pub fill_type: FillType,
    #[serde(rename = "backgroundColor")]
    pub background_color: Vec<ColorAmount>,
}

impl ColorStopEntry {
    /// Normalizes the entry, substituting defaults for anything unusable.
    #[must_use]
    pub fn normalize(&self) -> ColorAmount {
        match self {
            Self::Stop(stop) => ColorAmount {
                color: to_valid_color(stop.color.as_deref().unwrap_or_default(), DEFAULT_STOP_COLOR),
                amount: stop
                    .amount
                    .filter(|amount| amount.is_finite() && *amount >= 0.0)
                    .unwrap_or(DEFAULT_AMOUNT),
            },
            Self::Malformed(_) => ColorAmount {
                color: DEFAULT_STOP_COLOR.to_owned(),
                amount: DEFAULT_AMOUNT,
            },
        }
    }
}

impl From<&ColorAmount> for ColorStopEntry {
    fn from(stop: &ColorAmount) -> Self {
        Self::Stop(ColorStop {
            color: Some(stop.color.clone()),
            amount: Some(stop.amount),
        })
    }
}

/// Extracts a fill or gradient background from the backend config.
///
/// Returns `None` for images, unknown types and empty color lists.
#[must_use]
pub fn wallpaper_config_from_backend(
    wallpaper: Option<&WallpaperConfig>,
) -> Option<FillGradientWallpaperConfig> {
    let (fill_type, entries) = match wallpaper? {
        WallpaperConfig::Fill { background_color } => (FillType::Fill, background_color),
        WallpaperConfig::Gradient { background_color } => (FillType::Gradient, background_color),
        WallpaperConfig::Image { .. } | WallpaperConfig::Unknown => return None,
    };
    if entries.is_empty() {
        return None;
    }

    Some(FillGradientWallpaperConfig {
        fill_type,
        background_color: entries.iter().map(ColorStopEntry::normalize).collect(),
    })
}

/// Builds the backend config for a fill or gradient background.
#[must_use]
pub fn wallpaper_config_to_backend(config: &FillGradientWallpaperConfig) -> WallpaperConfig {
    let background_color = config.background_color.iter().map(ColorStopEntry::from).collect();
    match config.fill_type {
        FillType::Fill => WallpaperConfig::Fill { background_color },
        FillType::Gradient => WallpaperConfig::Gradient { background_color },
    }
}

/// Derives the preview theme string from the backend config.
///
/// A gradient needs two stops and a fill needs one; with fewer the result is
/// `None`, as it is for images without a URL.
///
/// ```
/// use linkpage_core::style::{ColorStop, ColorStopEntry, WallpaperConfig, selected_theme_from_wallpaper};
///
/// let fill = WallpaperConfig::Fill {
///     background_color: vec![ColorStopEntry::Stop(ColorStop {
///         color: Some("#FF0000".to_owned()),
///         amount: Some(100.0),
///     })],
/// };
/// assert_eq!(selected_theme_from_wallpaper(Some(&fill)).as_deref(), Some("fill:#FF0000"));
/// ```
#[must_use]
pub fn selected_theme_from_wallpaper(wallpaper: Option<&WallpaperConfig>) -> Option<String> {
    match wallpaper? {
        WallpaperConfig::Fill { background_color } => background_color
            .first()
            .map(|first| format!("{FILL_THEME_PREFIX}{}", first.normalize().color)),
        WallpaperConfig::Gradient { background_color } => match background_color.as_slice() {
            [first, second, ..] => Some(format!(
                "{GRADIENT_THEME_PREFIX}{}:{}",
                first.normalize().color,
                second.normalize().color
            )),
            _ => None,
        },
        WallpaperConfig::Image { image } => image
            .image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_owned),
        WallpaperConfig::Unknown => None,
    }
}

/// Decodes a synthetic `fill:`/`gradient:` theme string.
///
/// Theme asset paths and image URLs are not color backgrounds and yield `None`.
#[must_use]
pub fn selected_theme_to_wallpaper(theme: &str) -> Option<FillGradientWallpaperConfig> {
    let stop = |color: &str| {
        let color = color.trim();
        (!color.is_empty()).then(|| ColorAmount {
            color: color.to_owned(),
            amount: DEFAULT_AMOUNT,
        })
    };

    if let Some(color) = theme.strip_prefix(FILL_THEME_PREFIX) {
        return Some(FillGradientWallpaperConfig {
            fill_type: FillType::Fill,
            background_color: vec![stop(color)?],
        });
    }
    if let Some(colors) = theme.strip_prefix(GRADIENT_THEME_PREFIX) {
        let (first, second) = colors.split_once(':')?;
        return Some(FillGradientWallpaperConfig {
            fill_type: FillType::Gradient,
            background_color: vec![stop(first)?, stop(second)?],
        });
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> WallpaperConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_fill_theme() {
        let wallpaper = parse(json!({
            "type": "fill",
            "backgroundColor": [{"color": "#FF0000", "amount": 100}]
        }));
        assert_eq!(
            selected_theme_from_wallpaper(Some(&wallpaper)).as_deref(),
            Some("fill:#FF0000")
        );
    }

    #[test]
    fn test_gradient_needs_two_stops() {
        let wallpaper = parse(json!({
            "type": "gradient",
            "backgroundColor": [{"color": "#FF0000"}]
        }));
        assert_eq!(selected_theme_from_wallpaper(Some(&wallpaper)), None);

        let wallpaper = parse(json!({
            "type": "gradient",
            "backgroundColor": [{"color": "#FF0000"}, {"color": "#0000FF"}, {"color": "#00FF00"}]
        }));
        assert_eq!(
            selected_theme_from_wallpaper(Some(&wallpaper)).as_deref(),
            Some("gradient:#FF0000:#0000FF")
        );
    }

    #[test]
    fn test_image_theme() {
        let wallpaper = parse(json!({
            "type": "image",
            "image": {"url": "https://cdn.example.com/bg.jpg", "publicId": "bg_1"}
        }));
        assert_eq!(
            selected_theme_from_wallpaper(Some(&wallpaper)).as_deref(),
            Some("https://cdn.example.com/bg.jpg")
        );
        assert_eq!(selected_theme_from_wallpaper(Some(&parse(json!({"type": "image"})))), None);
    }

    #[test]
    fn test_unknown_and_absent() {
        let wallpaper = parse(json!({"type": "video", "src": "x.mp4"}));
        assert_eq!(wallpaper, WallpaperConfig::Unknown);
        assert_eq!(selected_theme_from_wallpaper(Some(&wallpaper)), None);
        assert_eq!(selected_theme_from_wallpaper(None), None);
        assert_eq!(wallpaper_config_from_backend(None), None);
    }

    #[test]
    fn test_from_backend_defaults() {
        let wallpaper = parse(json!({
            "type": "gradient",
            "backgroundColor": [
                {"color": "#111111", "amount": -5},
                {"amount": 40},
                "oops",
                {"color": 42}
            ]
        }));
        let config = wallpaper_config_from_backend(Some(&wallpaper)).unwrap();
        assert_eq!(config.fill_type, FillType::Gradient);
        let stops: Vec<(&str, f64)> = config
            .background_color
            .iter()
            .map(|s| (s.color.as_str(), s.amount))
            .collect();
        assert_eq!(
            stops,
            vec![
                ("#111111", 100.0),
                ("#000000", 40.0),
                ("#000000", 100.0),
                ("#000000", 100.0),
            ]
        );
    }

    #[test]
    fn test_from_backend_requires_colors() {
        assert_eq!(wallpaper_config_from_backend(Some(&parse(json!({"type": "fill"})))), None);
        let image = parse(json!({"type": "image", "image": {"imageUrl": "a.png"}}));
        assert_eq!(wallpaper_config_from_backend(Some(&image)), None);
    }

    #[test]
    fn test_theme_string_decodes() {
        let fill = selected_theme_to_wallpaper("fill:#ABCDEF").unwrap();
        assert_eq!(fill.fill_type, FillType::Fill);
        assert_eq!(fill.background_color.len(), 1);

        let gradient = selected_theme_to_wallpaper("gradient:#111111:#222222").unwrap();
        assert_eq!(gradient.fill_type, FillType::Gradient);
        assert_eq!(
            gradient.background_color.last().map(|s| s.color.as_str()),
            Some("#222222")
        );

        assert_eq!(selected_theme_to_wallpaper("/images/themes/sunset.png"), None);
        assert_eq!(selected_theme_to_wallpaper("gradient:#111111"), None);
        assert_eq!(selected_theme_to_wallpaper("fill:"), None);
    }

    #[test]
    fn test_to_backend_serializes_tagged() {
        let config = selected_theme_to_wallpaper("fill:#ABCDEF").unwrap();
        let json = serde_json::to_value(wallpaper_config_to_backend(&config)).unwrap();
        assert_eq!(
            json,
            json!({"type": "fill", "backgroundColor": [{"color": "#ABCDEF", "amount": 100.0}]})
        );
    }
}
