use super::*;

#[test]
fn section_matches_nested_routes() {
    assert!(is_active_section("/admin/tours", "/admin/tours"));
    assert!(is_active_section("/admin/tours/edit/42", "/admin/tours"));
}

#[test]
fn section_does_not_match_prefix_words() {
    assert!(!is_active_section("/admin/tours-archive", "/admin/tours"));
    assert!(!is_active_section("/admin/dashboard", "/admin/tours"));
}

#[test]
fn every_nav_entry_is_an_admin_route() {
    assert!(ADMIN_NAV.iter().all(|(href, _)| href.starts_with("/admin/")));
}
