//! Profile template catalog.
//!
//! A template is an opaque JSON document describing a ready-made appearance.
//! The client never depends on its shape; it only reads `id` and `name` for
//! listing when they are present.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// An opaque template configuration, persisted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateConfig(Value);

impl TemplateConfig {
    /// The template's `id` field, if it has a string one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// The template's `name` field, if it has a string one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The raw JSON document.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for TemplateConfig {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The templates shipped with the client. The first entry is the default.
#[must_use]
pub fn builtin_catalog() -> Vec<TemplateConfig> {
    [
        json!({
            "id": "classic",
            "name": "Classic",
            "corner": {"type": "round", "fillColor": "#FFFFFF", "strokeColor": "#000000",
                       "shadowSize": "soft", "shadowColor": "#000000", "opacity": 1},
            "font": {"name": "Poppins", "fillColor": "#000000", "strokeColor": "#000000"},
            "wallpaper": {"type": "fill", "backgroundColor": [{"color": "#F5F5F5", "amount": 100}]}
        }),
        json!({
            "id": "brutalist",
            "name": "Brutalist",
            "corner": {"type": "sharp", "fillColor": "#FFE600", "strokeColor": "#000000",
                       "shadowSize": "hard", "shadowColor": "#000000", "opacity": 1},
            "font": {"name": "SpaceMono", "fillColor": "#000000", "strokeColor": "#000000"},
            "wallpaper": {"type": "fill", "backgroundColor": [{"color": "#FFFFFF", "amount": 100}]}
        }),
        json!({
            "id": "sunset",
            "name": "Sunset",
            "corner": {"type": "curved", "fillColor": "#FFFFFF", "strokeColor": "#FFFFFF",
                       "shadowSize": "soft", "shadowColor": "#7A1F3D", "opacity": 0.9},
            "font": {"name": "Merriweather", "fillColor": "#2B0A14", "strokeColor": "#2B0A14"},
            "wallpaper": {"type": "gradient", "backgroundColor": [
                {"color": "#FF7E5F", "amount": 50}, {"color": "#FEB47B", "amount": 50}
            ]}
        }),
        json!({
            "id": "midnight",
            "name": "Midnight",
            "corner": {"type": "round", "fillColor": "#1E1E2E", "strokeColor": "#89B4FA",
                       "shadowSize": "soft", "shadowColor": "none", "opacity": 1},
            "font": {"name": "Inter", "fillColor": "#CDD6F4", "strokeColor": "#CDD6F4"},
            "wallpaper": {"type": "gradient", "backgroundColor": [
                {"color": "#11111B", "amount": 60}, {"color": "#313244", "amount": 40}
            ]}
        }),
    ]
    .into_iter()
    .map(TemplateConfig)
    .collect()
}

/// Find a template by its `id`.
#[must_use]
pub fn find_template<'a>(catalog: &'a [TemplateConfig], id: &str) -> Option<&'a TemplateConfig> {
    catalog.iter().find(|template| template.id() == Some(id))
}
