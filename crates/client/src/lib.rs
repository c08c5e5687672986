//! Linkpage client library.
//!
//! Persisted client stores (cart, template, onboarding draft, session), the
//! profile display props aggregator and a thin REST wrapper over the Linkpage
//! backend. Front ends build one store per concern around a shared
//! [`storage::KeyValueStorage`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod display;
pub mod models;
pub mod storage;
pub mod stores;
pub mod templates;
