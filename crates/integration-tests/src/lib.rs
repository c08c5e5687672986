//! Integration tests for Linkpage.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p linkpage-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_persistence` - Stores over `FileStorage` across instances
//! - `display_props` - Aggregation of backend-shaped payloads
//! - `appearance` - Backend config and UI style conversions
//!
//! Every test gets its own state directory under the system temp dir.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;
use std::path::PathBuf;

use linkpage_client::storage::FileStorage;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A fresh state directory, removed when dropped.
#[derive(Debug)]
pub struct TempStateDir {
    dir: TempDir,
}

impl TempStateDir {
    /// Create an empty directory under the system temp dir.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created.
    pub fn new() -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("linkpage-it-").tempdir()?;
        Ok(Self { dir })
    }

    /// A file storage rooted at this directory.
    #[must_use]
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.dir.path())
    }

    /// Path of the snapshot file for `key`.
    #[must_use]
    pub fn snapshot_path(&self, key: &str) -> PathBuf {
        self.dir.path().join(format!("{key}.json"))
    }
}

/// Settings payload as the backend returns it for a fully configured profile.
#[must_use]
pub fn settings_fixture() -> Value {
    json!({
        "corner": {
            "type": "curved",
            "opacity": 0.8,
            "fillColor": "#fafafa",
            "shadowSize": "soft",
            "shadowColor": "#336699",
            "strokeColor": "#222222"
        },
        "font": {
            "name": "Merriweather",
            "fillColor": "#111111",
            "strokeColor": "transparent"
        },
        "wallpaper": {
            "type": "gradient",
            "backgroundColor": [
                {"color": "#FF7E5F", "amount": 50},
                {"color": "#FEB47B", "amount": 50}
            ]
        },
        "selected_theme": "/images/themes/ocean.png",
        "profile": {
            "displayName": "Jane D.",
            "bio": "Maker of things",
            "profileImage": "/uploads/jane.png"
        }
    })
}

/// Links payload with one entry the client cannot use.
#[must_use]
pub fn links_fixture() -> Value {
    json!([
        {"_id": "l1", "title": "Portfolio", "url": "https://jane.example"},
        {"_id": "l2", "title": "Broken"},
        {"_id": "l3", "title": "Shop", "url": "https://shop.example", "icon": "/icons/shop.svg"}
    ])
}

/// User record as returned by `users/me`.
#[must_use]
pub fn user_fixture() -> Value {
    json!({
        "_id": "u1",
        "username": "jane",
        "name": "Jane Doe",
        "email": "jane@example.com",
        "bio": "From the account",
        "location": "Jakarta"
    })
}
