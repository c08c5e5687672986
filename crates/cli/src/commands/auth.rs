//! Session commands.
//!
//! # Environment Variables
//!
//! - `LINKPAGE_API_URL` - Required for `login`

use linkpage_client::api::ApiClient;
use linkpage_client::config::ClientConfig;
use linkpage_client::storage::FileStorage;
use linkpage_client::stores::AuthStore;
use secrecy::SecretString;
use serde_json::json;

use super::{CommandError, print_json};

/// Check `token` against `users/me` and store the session on success.
pub async fn login(
    config: &ClientConfig,
    storage: &FileStorage,
    token: String,
) -> Result<(), CommandError> {
    let token = SecretString::from(token);
    let client = ApiClient::new(
        config.require_api_url()?.clone(),
        Some(&token),
        config.http_timeout,
    )?;

    let user = client.fetch_current_user().await?;
    AuthStore::load(storage).login(token, user);
    Ok(())
}

pub fn logout(storage: &FileStorage) {
    AuthStore::load(storage).logout();
}

pub fn status(storage: &FileStorage) -> Result<(), CommandError> {
    let store = AuthStore::load(storage);
    print_json(&json!({
        "authenticated": store.is_authenticated(),
        "user": store.user(),
    }))
}
