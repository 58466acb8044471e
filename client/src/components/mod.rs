//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render cards, editors and page chrome. They take plain values
//! or signals as props and report edits through callbacks; fetching and
//! writing stay in the pages that own them.

pub mod admin_layout;
pub mod animated_section;
pub mod breadcrumbs;
pub mod cta_banner;
pub mod destination_card;
pub mod form_field;
pub mod hero_slider;
pub mod list_editor;
pub mod loading;
pub mod parallax_banner;
pub mod site_layout;
pub mod stat_card;
pub mod status_badge;
pub mod table_toolbar;
pub mod tour_card;
pub mod trust_badges;
