//! Appearance export.
//!
//! Reads the editor's `ButtonStyle` and `FontStyle` and prints the payload the
//! backend stores. With `--push` the payload is also saved through the API.

use std::path::Path;

use linkpage_client::api::{ApiClient, AppearanceUpdate};
use linkpage_client::config::ClientConfig;
use linkpage_client::storage::FileStorage;
use linkpage_client::stores::AuthStore;
use linkpage_core::style::{ButtonStyle, FontStyle};

use super::{CommandError, print_json, read_json};

pub async fn export(
    config: &ClientConfig,
    storage: &FileStorage,
    button_style: &Path,
    font_style: &Path,
    theme: Option<&str>,
    push: bool,
) -> Result<(), CommandError> {
    let button_style: ButtonStyle = read_json(button_style)?;
    let font_style: FontStyle = read_json(font_style)?;

    let update = AppearanceUpdate::from_styles(&button_style, &font_style, theme);
    print_json(&update)?;

    if push {
        let auth = AuthStore::load(storage);
        let client = ApiClient::from_config(config, auth.token())?;
        client.update_appearance(&update).await?;
        tracing::info!("Appearance saved");
    }
    Ok(())
}
