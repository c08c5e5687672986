//! Profile preview.
//!
//! # Usage
//!
//! ```bash
//! # From exported payloads; any of the three may be omitted
//! lp-cli preview --settings settings.json --links links.json --user me.json
//!
//! # From the live API, using the stored session
//! lp-cli preview --remote
//! ```
//!
//! # Environment Variables
//!
//! - `LINKPAGE_API_URL` - Required for `--remote`

use std::path::Path;

use linkpage_client::api::{ApiClient, load_display_props};
use linkpage_client::config::ClientConfig;
use linkpage_client::display::build_display_props;
use linkpage_client::models::UserRecord;
use linkpage_client::storage::FileStorage;
use linkpage_client::stores::AuthStore;
use serde_json::Value;

use super::{CommandError, print_json, read_json};

/// Build display props from local JSON files.
pub fn from_files(
    settings: Option<&Path>,
    links: Option<&Path>,
    user: Option<&Path>,
) -> Result<(), CommandError> {
    let settings: Option<Value> = settings.map(read_json::<Value>).transpose()?;
    let links: Option<Value> = links.map(read_json::<Value>).transpose()?;
    let user: Option<UserRecord> = user.map(read_json::<UserRecord>).transpose()?;

    let props = build_display_props(settings.as_ref(), links.as_ref(), user.as_ref());
    print_json(&props)
}

/// Build display props from the API.
pub async fn remote(config: &ClientConfig, storage: &FileStorage) -> Result<(), CommandError> {
    let auth = AuthStore::load(storage);
    let client = ApiClient::from_config(config, auth.token())?;

    tracing::info!("Fetching profile from {}", client.base_url());
    let props = load_display_props(&client).await;
    print_json(&props)
}
