//! Linkpage Core - Shared types and appearance mapping.
//!
//! This crate provides the pieces shared by every Linkpage component:
//! - `client` - Persisted client stores, display props and the REST wrapper
//! - `cli` - Command-line front end over the client library
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage,
//! no HTTP clients. Every mapping function is total: missing or malformed input
//! degrades to a documented default instead of an error.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers, prices, emails and usernames
//! - [`style`] - Translation between backend appearance configs and UI styles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod style;
pub mod types;

pub use types::*;
