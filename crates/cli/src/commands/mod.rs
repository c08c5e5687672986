//! Command implementations.
//!
//! Every command opens the stores it needs over the shared [`FileStorage`],
//! applies one action and prints the result to stdout.
//!
//! [`FileStorage`]: linkpage_client::storage::FileStorage

pub mod appearance;
pub mod auth;
pub mod cart;
pub mod onboarding;
pub mod preview;
pub mod template;

use std::fs;
use std::path::Path;

use linkpage_client::api::ApiError;
use linkpage_client::config::ConfigError;
use linkpage_core::{EmailError, UsernameError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Input file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// Input or output JSON was invalid.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Invalid username.
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Argument out of range or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read and decode a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CommandError> {
    let raw = fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
