//! # client
//!
//! Leptos + WASM frontend for the Karibu Safariz booking site.
//!
//! This crate contains the public marketing pages, the customer auth flows
//! and the admin console. Every screen reads and writes through the
//! [`net::Backend`] seam, which is provided through Leptos context so state
//! machines can be exercised against an in-memory backend in tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
