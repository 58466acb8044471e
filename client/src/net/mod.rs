//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the object-safe seam every screen talks through,
//! `rest` implements it over the PostgREST/GoTrue HTTP surface, and
//! `config` resolves where that surface lives.

pub mod backend;
pub mod config;
#[cfg(test)]
pub mod mock;
pub mod rest;

use std::sync::Arc;

pub use backend::{
    Backend, BackendError, Query, Session, SharedBackend, create, delete_row, fetch_all, fetch_where,
    update_row,
};

/// Backend provided by the app shell.
///
/// # Panics
///
/// Panics when called outside the component tree rooted at `App`.
pub fn use_backend() -> SharedBackend {
    leptos::prelude::expect_context::<SharedBackend>()
}

/// Build the production backend from build-time configuration.
///
/// A missing or malformed configuration is logged and replaced by the local
/// development endpoint so the shell still renders.
pub fn default_backend() -> SharedBackend {
    let config = config::BackendConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::error!("backend configuration: {e}; using local endpoint");
        config::BackendConfig::local()
    });
    Arc::new(rest::RestBackend::new(config))
}
