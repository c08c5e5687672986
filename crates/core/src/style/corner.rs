//! Button corner treatment: backend `CornerConfig` vs UI `ButtonStyle`.

use serde::{Deserialize, Serialize};

use super::color::{format_hex_rgb, parse_hex_rgb, to_valid_color, usable_color};

/// Radius for `sharp` corners.
pub const SHARP_RADIUS: &str = "0px";
/// Radius for `round` (pill) corners.
pub const ROUND_RADIUS: &str = "9999px";
/// Radius for `curved` corners. Any other radius maps back to `curved`.
pub const CURVED_RADIUS: &str = "12px";

/// Default button fill.
pub const DEFAULT_FILL_COLOR: &str = "#FFFFFF";
/// Default button border.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";
/// Default shadow color for hard shadows.
pub const DEFAULT_SHADOW_COLOR: &str = "#000000";

const HARD_SHADOW_PREFIX: &str = "4px 4px 0px 0px ";
const HARD_SHADOW_MARKER: &str = "4px 4px 0px";
const SOFT_SHADOW_PREFIX: &str = "0px 4px 12px 0px ";
const SOFT_SHADOW_ALPHA: &str = "0.25";
const SOFT_SHADOW_MIX: &str = "25%";

/// Corner shape of a link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum CornerType {
    Sharp,
    #[default]
    Round,
    Curved,
}

impl From<Option<String>> for CornerType {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("sharp") => Self::Sharp,
            Some("curved") => Self::Curved,
            _ => Self::Round,
        }
    }
}

impl CornerType {
    /// The CSS radius for this corner type.
    #[must_use]
    pub const fn radius(self) -> &'static str {
        match self {
            Self::Sharp => SHARP_RADIUS,
            Self::Round => ROUND_RADIUS,
            Self::Curved => CURVED_RADIUS,
        }
    }

    /// Infers the corner type from a CSS radius.
    #[must_use]
    pub fn from_radius(radius: &str) -> Self {
        match radius.trim() {
            SHARP_RADIUS => Self::Sharp,
            ROUND_RADIUS | "50%" => Self::Round,
            _ => Self::Curved,
        }
    }
}

/// Shadow weight of a link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum ShadowSize {
    Hard,
    #[default]
    Soft,
}

impl From<Option<String>> for ShadowSize {
    fn from(value: Option<String>) -> Self {
        match value.as_deref().map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("hard") => Self::Hard,
            _ => Self::Soft,
        }
    }
}

/// Backend representation of the button treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CornerConfig {
    #[serde(rename = "type")]
    pub corner_type: CornerType,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    pub fill_color: String,
    pub shadow_size: ShadowSize,
    pub shadow_color: String,
    pub stroke_color: String,
}

impl Default for CornerConfig {
    fn default() -> Self {
        Self {
            corner_type: CornerType::default(),
            opacity: 1.0,
            fill_color: DEFAULT_FILL_COLOR.to_owned(),
            shadow_size: ShadowSize::default(),
            shadow_color: DEFAULT_SHADOW_COLOR.to_owned(),
            stroke_color: DEFAULT_STROKE_COLOR.to_owned(),
        }
    }
}

/// A button shadow, serialized as its CSS `box-shadow` value.
///
/// Shadows built by [`corner_config_to_button_style`] keep their size and
/// color, so mapping them back is exact. Arbitrary CSS strings become
/// [`BoxShadow::Custom`], whose size can only be guessed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BoxShadow {
    #[default]
    None,
    Hard {
        color: String,
    },
    Soft {
        color: String,
    },
    Custom(String),
}

impl BoxShadow {
    /// The CSS `box-shadow` value.
    ///
    /// Soft shadows are drawn at quarter strength: hex colors through
    /// `rgba()`, any other color through `color-mix()` with `transparent`.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::None => "none".to_owned(),
            Self::Hard { color } => format!("{HARD_SHADOW_PREFIX}{color}"),
            Self::Soft { color } => {
                let shadow = parse_hex_rgb(color).map_or_else(
                    || format!("color-mix(in srgb, {color} {SOFT_SHADOW_MIX}, transparent)"),
                    |(r, g, b)| format!("rgba({r}, {g}, {b}, {SOFT_SHADOW_ALPHA})"),
                );
                format!("{SOFT_SHADOW_PREFIX}{shadow}")
            }
            Self::Custom(css) => css.clone(),
        }
    }

    /// Parses a CSS `box-shadow` value.
    ///
    /// Strings in the shapes produced by [`Self::to_css`] become structured
    /// shadows (soft `rgba()` colors come back as `#RRGGBB`); anything else
    /// is kept verbatim as [`BoxShadow::Custom`].
    #[must_use]
    pub fn from_css(css: &str) -> Self {
        let css = css.trim();
        if css.is_empty() || css.eq_ignore_ascii_case("none") {
            return Self::None;
        }
        if let Some(color) = css.strip_prefix(HARD_SHADOW_PREFIX).and_then(usable_color) {
            return Self::Hard { color };
        }
        if let Some(rest) = css.strip_prefix(SOFT_SHADOW_PREFIX) {
            if let Some(color) = parse_soft_rgba(rest).or_else(|| parse_soft_mix(rest)) {
                return Self::Soft { color };
            }
            if let Some(color) = usable_color(rest).filter(|c| !c.contains(' ')) {
                return Self::Soft { color };
            }
        }
        Self::Custom(css.to_owned())
    }

    /// The shadow size, inferring it for custom CSS.
    ///
    /// A custom shadow is considered hard when it contains `4px 4px 0px`.
    /// Shadows written by hand may be misclassified.
    #[must_use]
    pub fn size(&self) -> ShadowSize {
        match self {
            Self::Hard { .. } => ShadowSize::Hard,
            Self::None | Self::Soft { .. } => ShadowSize::Soft,
            Self::Custom(css) if css.contains(HARD_SHADOW_MARKER) => ShadowSize::Hard,
            Self::Custom(_) => ShadowSize::Soft,
        }
    }

    /// The shadow color, when structured.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match self {
            Self::Hard { color } | Self::Soft { color } => Some(color),
            Self::None | Self::Custom(_) => None,
        }
    }
}

impl From<String> for BoxShadow {
    fn from(css: String) -> Self {
        Self::from_css(&css)
    }
}

impl From<BoxShadow> for String {
    fn from(shadow: BoxShadow) -> Self {
        shadow.to_css()
    }
}

/// Parses `rgba(r, g, b, 0.25)` back to `#RRGGBB`.
fn parse_soft_rgba(css: &str) -> Option<String> {
    let inner = css.strip_prefix("rgba(")?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [r, g, b, alpha] if *alpha == SOFT_SHADOW_ALPHA => {
            let rgb = (r.parse().ok()?, g.parse().ok()?, b.parse().ok()?);
            Some(format_hex_rgb(rgb))
        }
        _ => None,
    }
}

/// Parses `color-mix(in srgb, <color> 25%, transparent)` back to `<color>`.
fn parse_soft_mix(css: &str) -> Option<String> {
    let inner = css
        .strip_prefix("color-mix(in srgb,")?
        .strip_suffix(", transparent)")?;
    let color = inner.trim().strip_suffix(SOFT_SHADOW_MIX)?;
    usable_color(color)
}

/// UI representation of the button treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyle {
    pub border_radius: String,
    pub background_color: String,
    pub border_color: String,
    pub opacity: f64,
    pub box_shadow: BoxShadow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        corner_config_to_button_style(&CornerConfig::default())
    }
}

/// Clamps opacity into `[0, 1]`; non-finite values become fully opaque.
fn normalize_opacity(opacity: f64) -> f64 {
    if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        1.0
    }
}

/// Maps a backend corner config to the button style used by display components.
#[must_use]
pub fn corner_config_to_button_style(config: &CornerConfig) -> ButtonStyle {
    let shadow_color = usable_color(&config.shadow_color);
    let box_shadow = match config.shadow_size {
        ShadowSize::Hard => BoxShadow::Hard {
            color: shadow_color.unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_owned()),
        },
        ShadowSize::Soft => shadow_color.map_or(BoxShadow::None, |color| BoxShadow::Soft { color }),
    };

    ButtonStyle {
        border_radius: config.corner_type.radius().to_owned(),
        background_color: to_valid_color(&config.fill_color, DEFAULT_FILL_COLOR),
        border_color: to_valid_color(&config.stroke_color, DEFAULT_STROKE_COLOR),
        opacity: normalize_opacity(config.opacity),
        shadow_color: box_shadow.color().map(str::to_owned),
        box_shadow,
    }
}

/// Maps a UI button style back to the backend corner config.
///
/// Radii other than `0px`, `9999px` and `50%` all become `curved`.
#[must_use]
pub fn button_style_to_corner_config(style: &ButtonStyle) -> CornerConfig {
    let shadow_color = style
        .box_shadow
        .color()
        .and_then(usable_color)
        .or_else(|| style.shadow_color.as_deref().and_then(usable_color))
        .unwrap_or_else(|| DEFAULT_SHADOW_COLOR.to_owned());

    CornerConfig {
        corner_type: CornerType::from_radius(&style.border_radius),
        opacity: normalize_opacity(style.opacity),
        fill_color: to_valid_color(&style.background_color, DEFAULT_FILL_COLOR),
        shadow_size: style.box_shadow.size(),
        shadow_color,
        stroke_color: to_valid_color(&style.border_color, DEFAULT_STROKE_COLOR),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config(corner_type: CornerType, shadow_size: ShadowSize, shadow_color: &str) -> CornerConfig {
        CornerConfig {
            corner_type,
            shadow_size,
            shadow_color: shadow_color.to_owned(),
            ..CornerConfig::default()
        }
    }

    #[test]
    fn test_radius_is_one_of_three() {
        let allowed = [SHARP_RADIUS, ROUND_RADIUS, CURVED_RADIUS];
        for corner_type in [CornerType::Sharp, CornerType::Round, CornerType::Curved] {
            for shadow_size in [ShadowSize::Hard, ShadowSize::Soft] {
                for color in ["", "none", "#123456", "red"] {
                    let style = corner_config_to_button_style(&config(corner_type, shadow_size, color));
                    assert!(allowed.contains(&style.border_radius.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_hard_shadow() {
        let style = corner_config_to_button_style(&config(CornerType::Sharp, ShadowSize::Hard, "#FF0000"));
        assert_eq!(style.box_shadow.to_css(), "4px 4px 0px 0px #FF0000");
        assert_eq!(style.shadow_color.as_deref(), Some("#FF0000"));
    }

    #[test]
    fn test_hard_shadow_without_color_uses_default() {
        let style = corner_config_to_button_style(&config(CornerType::Sharp, ShadowSize::Hard, ""));
        assert_eq!(style.box_shadow.to_css(), "4px 4px 0px 0px #000000");
    }

    #[test]
    fn test_soft_shadow_reduces_alpha() {
        let style = corner_config_to_button_style(&config(CornerType::Round, ShadowSize::Soft, "#FF0000"));
        assert_eq!(style.box_shadow.to_css(), "0px 4px 12px 0px rgba(255, 0, 0, 0.25)");
    }

    #[test]
    fn test_soft_shadow_named_color_reduces_alpha() {
        let style = corner_config_to_button_style(&config(CornerType::Round, ShadowSize::Soft, "rebeccapurple"));
        let css = style.box_shadow.to_css();
        assert_eq!(
            css,
            "0px 4px 12px 0px color-mix(in srgb, rebeccapurple 25%, transparent)"
        );
        assert_eq!(
            BoxShadow::from_css(&css),
            BoxShadow::Soft {
                color: "rebeccapurple".to_owned()
            }
        );

        let rgb = BoxShadow::Soft {
            color: "rgb(10, 20, 30)".to_owned(),
        };
        assert_eq!(BoxShadow::from_css(&rgb.to_css()), rgb);
    }

    #[test]
    fn test_soft_shadow_without_color_is_none() {
        let style = corner_config_to_button_style(&config(CornerType::Round, ShadowSize::Soft, "transparent"));
        assert_eq!(style.box_shadow, BoxShadow::None);
        assert_eq!(style.box_shadow.to_css(), "none");
        assert_eq!(style.shadow_color, None);
    }

    #[test]
    fn test_opacity_clamped() {
        let mut c = CornerConfig::default();
        c.opacity = 3.5;
        assert!((corner_config_to_button_style(&c).opacity - 1.0).abs() < f64::EPSILON);
        c.opacity = f64::NAN;
        assert!((corner_config_to_button_style(&c).opacity - 1.0).abs() < f64::EPSILON);
        c.opacity = -1.0;
        assert!(corner_config_to_button_style(&c).opacity.abs() < f64::EPSILON);
    }

    #[test]
    fn test_curved_collapses_to_fixed_radius() {
        let style = ButtonStyle {
            border_radius: "20px".to_owned(),
            ..ButtonStyle::default()
        };
        let back = button_style_to_corner_config(&style);
        assert_eq!(back.corner_type, CornerType::Curved);
        assert_eq!(corner_config_to_button_style(&back).border_radius, CURVED_RADIUS);
    }

    #[test]
    fn test_radius_inference() {
        assert_eq!(CornerType::from_radius("0px"), CornerType::Sharp);
        assert_eq!(CornerType::from_radius("9999px"), CornerType::Round);
        assert_eq!(CornerType::from_radius("50%"), CornerType::Round);
        assert_eq!(CornerType::from_radius("0"), CornerType::Curved);
    }

    #[test]
    fn test_structured_shadow_maps_back_exactly() {
        let original = config(CornerType::Sharp, ShadowSize::Hard, "#00FF00");
        let back = button_style_to_corner_config(&corner_config_to_button_style(&original));
        assert_eq!(back, original);
    }

    #[test]
    fn test_custom_shadow_uses_substring_heuristic() {
        let hard = BoxShadow::from_css("inset 4px 4px 0px 2px blue");
        assert_eq!(hard, BoxShadow::Custom("inset 4px 4px 0px 2px blue".to_owned()));
        assert_eq!(hard.size(), ShadowSize::Hard);
        assert_eq!(BoxShadow::from_css("2px 2px 8px black").size(), ShadowSize::Soft);
    }

    #[test]
    fn test_shadow_css_parses_own_output() {
        assert_eq!(
            BoxShadow::from_css("0px 4px 12px 0px rgba(255, 0, 0, 0.25)"),
            BoxShadow::Soft {
                color: "#FF0000".to_owned()
            }
        );
        assert_eq!(
            BoxShadow::from_css("4px 4px 0px 0px red"),
            BoxShadow::Hard {
                color: "red".to_owned()
            }
        );
        assert_eq!(BoxShadow::from_css(" NONE "), BoxShadow::None);
    }

    #[test]
    fn test_reverse_uses_shadow_color_field_for_custom() {
        let style = ButtonStyle {
            box_shadow: BoxShadow::Custom("4px 4px 0px 0px var(--shadow)".to_owned()),
            shadow_color: Some("#ABCDEF".to_owned()),
            ..ButtonStyle::default()
        };
        let back = button_style_to_corner_config(&style);
        assert_eq!(back.shadow_size, ShadowSize::Hard);
        assert_eq!(back.shadow_color, "#ABCDEF");
    }

    #[test]
    fn test_lenient_deserialize() {
        let c: CornerConfig = serde_json::from_str(
            r##"{"type":"SHARP","shadowSize":"huge","fillColor":"#111111"}"##,
        )
        .unwrap();
        assert_eq!(c.corner_type, CornerType::Sharp);
        assert_eq!(c.shadow_size, ShadowSize::Soft);
        assert_eq!(c.fill_color, "#111111");
        assert_eq!(c.stroke_color, DEFAULT_STROKE_COLOR);

        let c: CornerConfig = serde_json::from_str(r#"{"type":null}"#).unwrap();
        assert_eq!(c.corner_type, CornerType::Round);
    }

    #[test]
    fn test_button_style_serializes_css() {
        let style = corner_config_to_button_style(&config(CornerType::Sharp, ShadowSize::Hard, "#FF0000"));
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["borderRadius"], "0px");
        assert_eq!(json["boxShadow"], "4px 4px 0px 0px #FF0000");
        assert_eq!(json["shadowColor"], "#FF0000");
    }
}
