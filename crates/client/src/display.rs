//! Display props for the public profile preview.
//!
//! Combines the settings payload, the links payload and the current user into
//! the single bundle the profile renderer consumes. Every input may be absent
//! or partially malformed; the result is always complete.

use linkpage_core::style::{
    ButtonStyle, CornerConfig, FontConfig, FontStyle, WallpaperConfig,
    corner_config_to_button_style, font_config_to_font_style, selected_theme_from_wallpaper,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::{ProfileLink, UserRecord};

/// Theme asset used when neither the wallpaper nor the legacy theme yields one.
pub const DEFAULT_THEME: &str = "/images/themes/default.png";
/// Avatar used when no profile image is known.
pub const DEFAULT_AVATAR: &str = "/images/avatar-placeholder.png";
/// Display name used when neither the profile nor the user has one.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// Profile header fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub profile_image: String,
    pub display_name: String,
    pub user_name: String,
    pub bio: String,
    pub location: String,
}

/// Everything the profile renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProps {
    pub button_style: ButtonStyle,
    pub font_style: FontStyle,
    pub selected_theme: String,
    pub profile: ProfileSummary,
    pub links: Vec<ProfileLink>,
}

impl Default for DisplayProps {
    fn default() -> Self {
        build_display_props(None, None, None)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SettingsProfile {
    display_name: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    profile_image: Option<String>,
}

/// Decode one named part of the settings payload, treating failures as absent.
fn decode_part<T: DeserializeOwned>(settings: Option<&Value>, key: &str) -> Option<T> {
    let value = settings?.get(key)?;
    if value.is_null() {
        return None;
    }
    match T::deserialize(value) {
        Ok(part) => Some(part),
        Err(err) => {
            warn!(part = key, error = %err, "Ignoring malformed settings part");
            None
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn decode_links(links: Option<&Value>) -> Vec<ProfileLink> {
    let Some(Value::Array(items)) = links else {
        if let Some(other) = links {
            warn!(kind = json_kind(other), "Links payload is not an array");
        }
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match ProfileLink::deserialize(item) {
            Ok(link) => Some(link),
            Err(err) => {
                warn!(index, error = %err, "Skipping malformed link");
                None
            }
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Build the display props from whatever inputs are available.
///
/// Theme precedence is the wallpaper-derived theme, then a non-empty legacy
/// `selected_theme`, then [`DEFAULT_THEME`]. Profile fields prefer the
/// settings profile over the user record.
#[must_use]
pub fn build_display_props(
    settings: Option<&Value>,
    links: Option<&Value>,
    user: Option<&UserRecord>,
) -> DisplayProps {
    let corner: CornerConfig = decode_part(settings, "corner").unwrap_or_default();
    let font: FontConfig = decode_part(settings, "font").unwrap_or_default();
    let wallpaper: Option<WallpaperConfig> = decode_part(settings, "wallpaper");
    let legacy_theme: Option<String> = decode_part(settings, "selected_theme");
    let profile: SettingsProfile = decode_part(settings, "profile").unwrap_or_default();

    let selected_theme = selected_theme_from_wallpaper(wallpaper.as_ref())
        .or_else(|| non_empty(legacy_theme.as_deref()).map(str::to_owned))
        .unwrap_or_else(|| DEFAULT_THEME.to_owned());

    let profile = ProfileSummary {
        profile_image: non_empty(profile.profile_image.as_deref())
            .or_else(|| non_empty(user.and_then(|u| u.profile_image.as_deref())))
            .unwrap_or(DEFAULT_AVATAR)
            .to_owned(),
        display_name: non_empty(profile.display_name.as_deref())
            .or_else(|| non_empty(user.and_then(|u| u.name.as_deref())))
            .unwrap_or(DEFAULT_DISPLAY_NAME)
            .to_owned(),
        user_name: user
            .and_then(|u| u.username.clone())
            .unwrap_or_default(),
        bio: non_empty(profile.bio.as_deref())
            .or_else(|| non_empty(user.and_then(|u| u.bio.as_deref())))
            .unwrap_or_default()
            .to_owned(),
        location: non_empty(profile.location.as_deref())
            .or_else(|| non_empty(user.and_then(|u| u.location.as_deref())))
            .unwrap_or_default()
            .to_owned(),
    };

    DisplayProps {
        button_style: corner_config_to_button_style(&corner),
        font_style: font_config_to_font_style(&font),
        selected_theme,
        profile,
        links: decode_links(links),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use linkpage_core::style::BoxShadow;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_all_absent() {
        let props = build_display_props(None, None, None);
        assert_eq!(props.profile.display_name, "User");
        assert_eq!(props.profile.profile_image, DEFAULT_AVATAR);
        assert_eq!(props.profile.user_name, "");
        assert_eq!(props.selected_theme, DEFAULT_THEME);
        assert!(props.links.is_empty());
        assert_eq!(props.button_style, ButtonStyle::default());
        assert_eq!(props.font_style, FontStyle::default());
        assert_eq!(props, DisplayProps::default());
    }

    #[test]
    fn test_wallpaper_beats_legacy_theme() {
        let settings = json!({
            "wallpaper": {"type": "gradient", "backgroundColor": [
                {"color": "#111111", "amount": 50}, {"color": "#222222", "amount": 50}
            ]},
            "selected_theme": "/images/themes/ocean.png"
        });
        let props = build_display_props(Some(&settings), None, None);
        assert_eq!(props.selected_theme, "gradient:#111111:#222222");
    }

    #[test]
    fn test_legacy_theme_used_without_wallpaper() {
        let settings = json!({"selected_theme": "/images/themes/ocean.png"});
        let props = build_display_props(Some(&settings), None, None);
        assert_eq!(props.selected_theme, "/images/themes/ocean.png");

        let settings = json!({"selected_theme": ""});
        let props = build_display_props(Some(&settings), None, None);
        assert_eq!(props.selected_theme, DEFAULT_THEME);
    }

    #[test]
    fn test_profile_precedence() {
        let user = UserRecord {
            username: Some("jane".to_owned()),
            name: Some("Jane Doe".to_owned()),
            bio: Some("from user".to_owned()),
            profile_image: Some("/uploads/user.png".to_owned()),
            ..UserRecord::default()
        };
        let settings = json!({"profile": {"displayName": "Janie", "location": "Jakarta"}});
        let props = build_display_props(Some(&settings), None, Some(&user));
        assert_eq!(props.profile.display_name, "Janie");
        assert_eq!(props.profile.user_name, "jane");
        assert_eq!(props.profile.bio, "from user");
        assert_eq!(props.profile.location, "Jakarta");
        assert_eq!(props.profile.profile_image, "/uploads/user.png");

        let props = build_display_props(None, None, Some(&user));
        assert_eq!(props.profile.display_name, "Jane Doe");
    }

    #[test]
    fn test_blank_settings_bio_falls_back_to_user() {
        let user = UserRecord {
            bio: Some("from user".to_owned()),
            location: Some("Jakarta".to_owned()),
            ..UserRecord::default()
        };
        let settings = json!({"profile": {"bio": "", "location": "   "}});
        let props = build_display_props(Some(&settings), None, Some(&user));
        assert_eq!(props.profile.bio, "from user");
        assert_eq!(props.profile.location, "Jakarta");

        let props = build_display_props(Some(&settings), None, None);
        assert_eq!(props.profile.bio, "");
        assert_eq!(props.profile.location, "");
    }

    #[test]
    fn test_corner_and_font_mapped() {
        let settings = json!({
            "corner": {"type": "sharp", "shadowSize": "hard", "shadowColor": "#FF0000"},
            "font": {"name": "Inter"}
        });
        let props = build_display_props(Some(&settings), None, None);
        assert_eq!(props.button_style.border_radius, "0px");
        assert_eq!(
            props.button_style.box_shadow,
            BoxShadow::Hard {
                color: "#FF0000".to_owned()
            }
        );
        assert_eq!(props.font_style.font_family, "Inter");
    }

    #[test]
    fn test_malformed_part_is_absent() {
        let settings = json!({"corner": "rounded please", "font": {"name": "Inter"}});
        let props = build_display_props(Some(&settings), None, None);
        assert_eq!(props.button_style, ButtonStyle::default());
        assert_eq!(props.font_style.font_family, "Inter");
    }

    #[test]
    fn test_links_non_array() {
        let links = json!({"url": "https://example.com"});
        assert!(build_display_props(None, Some(&links), None).links.is_empty());
    }

    #[test]
    fn test_links_skip_malformed_keep_order() {
        let links = json!([
            {"title": "Blog", "url": "https://blog.example"},
            {"title": "No url"},
            42,
            {"title": "Shop", "url": "https://shop.example", "active": false}
        ]);
        let props = build_display_props(None, Some(&links), None);
        let titles: Vec<_> = props.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Blog", "Shop"]);
        assert!(!props.links.get(1).unwrap().is_active);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(DisplayProps::default()).unwrap();
        assert!(value.get("buttonStyle").is_some());
        assert!(value.get("selectedTheme").is_some());
        assert_eq!(value["profile"]["displayName"], "User");
    }
}
