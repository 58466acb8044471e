//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic so the state layer stays testable without a browser.

pub mod auth;
pub mod breadcrumbs;
pub mod browser;
pub mod format;
pub mod markdown;
pub mod parallax;
pub mod reveal;
