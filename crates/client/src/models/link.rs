//! A link shown on the public profile.

use linkpage_core::LinkId;
use serde::{Deserialize, Serialize};

/// One entry of the profile's link list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLink {
    #[serde(default, alias = "_id")]
    pub id: Option<LinkId>,
    #[serde(default)]
    pub title: String,
    pub url: String,
    #[serde(default, alias = "icon")]
    pub icon_url: Option<String>,
    #[serde(default = "default_active", alias = "active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}
