//! Application state modules.
//!
//! ARCHITECTURE
//! ============
//! Each module holds plain state types plus the async operations that move
//! them, written against the injected backend so they can be driven in
//! tests without a browser. Pages wrap these in `RwSignal`s.

pub mod actions;
pub mod auth;
pub mod dashboard;
pub mod fetch;
pub mod filters;
pub mod form;
pub mod hero;
pub mod listing;
pub mod settings;
pub mod showcase;
