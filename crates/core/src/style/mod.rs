//! Appearance translation between backend configuration and UI styles.
//!
//! The backend stores a profile's appearance as three configs (corner, font,
//! wallpaper). Display components consume a different, CSS-oriented shape.
//! Every function here is pure and total: malformed or absent input falls back
//! to a documented default so a preview can always render.
//!
//! The two shapes do not round-trip exactly. `curved` corners collapse to a
//! fixed radius, font stacks keep only their first sanitized family, and soft
//! shadow colors pass through an `rgba()` encoding.

pub mod color;
pub mod corner;
pub mod font;
pub mod wallpaper;

pub use color::{to_valid_color, usable_color};
pub use corner::{
    BoxShadow, ButtonStyle, CornerConfig, CornerType, ShadowSize, button_style_to_corner_config,
    corner_config_to_button_style,
};
pub use font::{
    DEFAULT_FONT, FontConfig, FontStyle, font_config_to_font_style, font_family_to_api_name,
    font_style_to_font_config,
};
pub use wallpaper::{
    ColorAmount, ColorStop, ColorStopEntry, FillGradientWallpaperConfig, FillType,
    WallpaperConfig, WallpaperImage, selected_theme_from_wallpaper, selected_theme_to_wallpaper,
    wallpaper_config_from_backend, wallpaper_config_to_backend,
};
