//! Onboarding draft commands.
//!
//! The store accepts any value; email and username are checked here before
//! they are written.
//!
//! # Usage
//!
//! ```bash
//! lp-cli onboarding set email jane@example.com
//! lp-cli onboarding toggle-platform instagram Instagram
//! lp-cli onboarding link 1 https://jane.example
//! lp-cli onboarding next
//! lp-cli onboarding show
//! ```

use clap::ValueEnum;
use linkpage_client::storage::FileStorage;
use linkpage_client::stores::onboarding::CUSTOM_LINK_SLOTS;
use linkpage_client::stores::{OnboardingStore, Platform};
use linkpage_core::{Email, Username};

use super::{CommandError, print_json};

/// Draft fields settable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Email,
    Name,
    Username,
    Password,
    AccountType,
    Bio,
    Location,
    ProfileImage,
}

pub fn show(storage: &FileStorage) -> Result<(), CommandError> {
    let store = OnboardingStore::load(storage);
    let mut data = store.data().clone();
    if !data.password.is_empty() {
        data.password = "[REDACTED]".to_owned();
    }
    print_json(&data)
}

pub fn next(storage: &FileStorage) {
    let mut store = OnboardingStore::load(storage);
    store.next_step();
    tracing::info!("Now on step {}", store.current_step());
}

pub fn prev(storage: &FileStorage) {
    let mut store = OnboardingStore::load(storage);
    store.prev_step();
    tracing::info!("Now on step {}", store.current_step());
}

pub fn reset(storage: &FileStorage) {
    OnboardingStore::load(storage).reset_store();
    tracing::info!("Onboarding draft cleared");
}

pub fn set(storage: &FileStorage, field: Field, value: &str) -> Result<(), CommandError> {
    let mut store = OnboardingStore::load(storage);
    match field {
        Field::Email => store.set_email(Email::parse(value)?.into_inner()),
        Field::Username => store.set_username(Username::parse(value)?.into_inner()),
        Field::Name => store.set_name(value),
        Field::Password => store.set_password(value),
        Field::AccountType => store.set_account_type(value),
        Field::Bio => store.set_bio(value),
        Field::Location => store.set_location(value),
        Field::ProfileImage => store.set_profile_image(value),
    }
    tracing::info!("Updated {field:?}");
    Ok(())
}

pub fn toggle_platform(storage: &FileStorage, id: String, name: String) {
    let mut store = OnboardingStore::load(storage);
    let selected = store.toggle_platform(Platform { id, name });
    tracing::info!(
        "{} ({} platforms selected)",
        if selected { "Selected" } else { "Deselected" },
        store.data().selected_platforms.len()
    );
}

/// Set a custom link; `slot` is 1-based.
pub fn link(storage: &FileStorage, slot: usize, url: String) -> Result<(), CommandError> {
    let out_of_range =
        || CommandError::InvalidArgument(format!("slot must be 1-{CUSTOM_LINK_SLOTS}, got {slot}"));

    let index = slot.checked_sub(1).ok_or_else(out_of_range)?;
    if !OnboardingStore::load(storage).set_custom_link_url(index, url) {
        return Err(out_of_range());
    }
    Ok(())
}
