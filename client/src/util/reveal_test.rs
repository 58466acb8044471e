use super::*;

// =============================================================
// Visible fraction
// =============================================================

#[test]
fn fully_inside_viewport_is_one() {
    assert!((visible_fraction(100.0, 200.0, 800.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn below_the_fold_is_zero() {
    assert!(visible_fraction(900.0, 200.0, 800.0).abs() < f64::EPSILON);
}

#[test]
fn partially_scrolled_in_from_below() {
    assert!((visible_fraction(750.0, 200.0, 800.0) - 0.25).abs() < f64::EPSILON);
}

#[test]
fn partially_scrolled_out_above() {
    assert!((visible_fraction(-150.0, 200.0, 800.0) - 0.25).abs() < f64::EPSILON);
}

#[test]
fn zero_height_counts_by_position() {
    assert!((visible_fraction(10.0, 0.0, 800.0) - 1.0).abs() < f64::EPSILON);
    assert!(visible_fraction(-10.0, 0.0, 800.0).abs() < f64::EPSILON);
}

// =============================================================
// State transitions
// =============================================================

#[test]
fn appears_once_threshold_is_reached() {
    let mut state = RevealState::new(DEFAULT_THRESHOLD, true);
    assert!(!state.observe(0.05));
    assert!(!state.visible);
    assert!(state.observe(0.1));
    assert!(state.visible);
    assert!(state.is_settled());
}

#[test]
fn one_shot_stays_visible_after_leaving() {
    let mut state = RevealState::new(DEFAULT_THRESHOLD, true);
    state.observe(0.5);
    assert!(!state.observe(0.0));
    assert!(state.visible);
}

#[test]
fn repeating_section_hides_again() {
    let mut state = RevealState::new(DEFAULT_THRESHOLD, false);
    state.observe(0.5);
    assert!(!state.is_settled());
    assert!(state.observe(0.0));
    assert!(!state.visible);
}

#[test]
fn zero_threshold_still_needs_some_overlap() {
    let mut state = RevealState::new(0.0, true);
    assert!(!state.observe(0.0));
    assert!(state.observe(0.01));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn hidden_class_follows_pose() {
    let state = RevealState::new(DEFAULT_THRESHOLD, true);
    assert_eq!(state.class(Reveal::SlideUp), "reveal reveal--slide-up");
    assert_eq!(state.class(Reveal::None), "reveal reveal--shown");
}

#[test]
fn delay_only_applies_when_shown() {
    let mut state = RevealState::new(DEFAULT_THRESHOLD, true);
    assert_eq!(state.style(200), "transition-delay: 0ms");
    state.observe(1.0);
    assert_eq!(state.class(Reveal::Fade), "reveal reveal--shown");
    assert_eq!(state.style(200), "transition-delay: 200ms");
}
