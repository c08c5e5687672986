//! Onboarding wizard draft.
//!
//! Holds everything the multi-step sign-up flow collects before the account is
//! created. Setters overwrite without validation; the caller collecting input
//! is responsible for that.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Persisted, PersistedState};
use crate::storage::KeyValueStorage;

/// Number of custom link slots offered during onboarding.
pub const CUSTOM_LINK_SLOTS: usize = 3;

/// First wizard step.
pub const FIRST_STEP: u32 = 1;

/// A social platform the user picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: String,
    pub name: String,
}

/// One of the fixed custom link slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLink {
    pub id: u8,
    pub url: String,
    pub icon_url: String,
}

impl CustomLink {
    /// An empty slot with the given id.
    #[must_use]
    pub const fn empty(id: u8) -> Self {
        Self {
            id,
            url: String::new(),
            icon_url: String::new(),
        }
    }
}

fn empty_custom_links() -> [CustomLink; CUSTOM_LINK_SLOTS] {
    [CustomLink::empty(1), CustomLink::empty(2), CustomLink::empty(3)]
}

/// The onboarding draft.
///
/// `Debug` output redacts the password.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserData {
    pub email: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub account_type: String,
    pub selected_platforms: Vec<Platform>,
    pub custom_links: [CustomLink; CUSTOM_LINK_SLOTS],
    pub bio: String,
    pub location: String,
    pub profile_image: String,
    pub current_step: u32,
}

impl Default for UserData {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            username: String::new(),
            password: String::new(),
            account_type: String::new(),
            selected_platforms: Vec::new(),
            custom_links: empty_custom_links(),
            bio: String::new(),
            location: String::new(),
            profile_image: String::new(),
            current_step: FIRST_STEP,
        }
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserData")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("account_type", &self.account_type)
            .field("selected_platforms", &self.selected_platforms)
            .field("custom_links", &self.custom_links)
            .field("bio", &self.bio)
            .field("location", &self.location)
            .field("profile_image", &self.profile_image)
            .field("current_step", &self.current_step)
            .finish()
    }
}

impl PersistedState for UserData {
    const KEY: &'static str = "onboarding-storage";
    const VERSION: u32 = 0;

    fn sanitize(&mut self) {
        self.current_step = self.current_step.max(FIRST_STEP);
    }
}

/// The onboarding wizard store.
#[derive(Debug)]
pub struct OnboardingStore<S> {
    inner: Persisted<UserData, S>,
}

impl<S: KeyValueStorage> OnboardingStore<S> {
    /// Rehydrate the draft from `storage`.
    pub fn load(storage: S) -> Self {
        Self {
            inner: Persisted::load(storage),
        }
    }

    /// The current draft.
    pub fn data(&self) -> &UserData {
        self.inner.state()
    }

    pub fn current_step(&self) -> u32 {
        self.data().current_step
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        let email = email.into();
        self.inner.update(|data| data.email = email);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.inner.update(|data| data.name = name);
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        let username = username.into();
        self.inner.update(|data| data.username = username);
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        let password = password.into();
        self.inner.update(|data| data.password = password);
    }

    pub fn set_account_type(&mut self, account_type: impl Into<String>) {
        let account_type = account_type.into();
        self.inner.update(|data| data.account_type = account_type);
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        let bio = bio.into();
        self.inner.update(|data| data.bio = bio);
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        let location = location.into();
        self.inner.update(|data| data.location = location);
    }

    pub fn set_profile_image(&mut self, profile_image: impl Into<String>) {
        let profile_image = profile_image.into();
        self.inner.update(|data| data.profile_image = profile_image);
    }

    /// Replace all custom link slots.
    pub fn set_custom_links(&mut self, links: [CustomLink; CUSTOM_LINK_SLOTS]) {
        self.inner.update(|data| data.custom_links = links);
    }

    /// Set the URL of one slot (0-based). Returns `false` for a slot that
    /// does not exist.
    pub fn set_custom_link_url(&mut self, slot: usize, url: impl Into<String>) -> bool {
        if slot >= CUSTOM_LINK_SLOTS {
            return false;
        }
        let url = url.into();
        self.inner.update(|data| {
            data.custom_links
                .get_mut(slot)
                .map(|link| link.url = url)
                .is_some()
        })
    }

    /// Select `platform`, or deselect it if a platform with the same id is
    /// already selected. Returns whether it is selected afterwards.
    pub fn toggle_platform(&mut self, platform: Platform) -> bool {
        self.inner.update(|data| {
            let existing = data
                .selected_platforms
                .iter()
                .position(|selected| selected.id == platform.id);
            match existing {
                Some(index) => {
                    data.selected_platforms.remove(index);
                    false
                }
                None => {
                    data.selected_platforms.push(platform);
                    true
                }
            }
        })
    }

    pub fn next_step(&mut self) {
        self.inner
            .update(|data| data.current_step = data.current_step.saturating_add(1));
    }

    /// Go back one step, never below the first.
    pub fn prev_step(&mut self) {
        self.inner.update(|data| {
            data.current_step = data.current_step.saturating_sub(1).max(FIRST_STEP);
        });
    }

    /// Jump to `step`, clamped to the first step.
    pub fn set_step(&mut self, step: u32) {
        self.inner
            .update(|data| data.current_step = step.max(FIRST_STEP));
    }

    /// Restore every field, including the step and link slots, to its initial value.
    pub fn reset_store(&mut self) {
        self.inner.update(|data| *data = UserData::default());
    }
}
