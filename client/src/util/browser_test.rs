#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn confirm_declines_without_browser() {
    assert!(!confirm("Delete?"));
}

#[test]
fn origin_and_scroll_default_outside_browser() {
    assert_eq!(origin(), "");
    assert!(scroll_y().abs() < f64::EPSILON);
    assert!(viewport_height().abs() < f64::EPSILON);
}

#[test]
fn now_iso_is_fixed_outside_browser() {
    assert_eq!(now_iso(), "1970-01-01T00:00:00.000Z");
}

#[test]
fn sleep_and_alert_are_callable() {
    futures::executor::block_on(sleep_ms(1200));
    alert("saved");
}
