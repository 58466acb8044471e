use super::*;

// =============================================================
// FetchState
// =============================================================

#[test]
fn fetch_state_starts_loading() {
    let state = FetchState::<u32>::default();
    assert!(state.is_loading);
    assert_eq!(state.data, None);
    assert_eq!(state.error, None);
}

#[test]
fn settle_success_sets_only_data() {
    let mut state = FetchState::default();
    state.settle(Ok(vec![1, 2, 3]));
    assert!(!state.is_loading);
    assert_eq!(state.data, Some(vec![1, 2, 3]));
    assert_eq!(state.error, None);
}

#[test]
fn settle_failure_sets_only_error() {
    let mut state = FetchState {
        data: Some(7),
        is_loading: false,
        error: None,
    };
    state.begin();
    assert!(state.is_loading);
    state.settle(Err(BackendError::Request("offline".to_owned())));
    assert_eq!(state.data, None);
    assert_eq!(state.error.as_deref(), Some("request failed: offline"));
}

// =============================================================
// FetchTracker
// =============================================================

#[test]
fn tracker_issues_increasing_tags() {
    let tracker = FetchTracker::default();
    let first = tracker.issue();
    let second = tracker.issue();
    assert!(second > first);
    assert!(tracker.is_current(second));
    assert!(!tracker.is_current(first));
}

#[test]
fn stale_response_is_discarded() {
    let tracker = FetchTracker::default();
    let mut state = FetchState::default();

    let slow = tracker.issue();
    let fast = tracker.issue();

    // The newer request resolves first.
    assert!(tracker.settle_if_current(fast, &mut state, Ok("fresh")));
    // The older one resolves late and must not clobber it.
    assert!(!tracker.settle_if_current(slow, &mut state, Ok("stale")));
    assert_eq!(state.data, Some("fresh"));
    assert!(!state.is_loading);
}

#[test]
fn stale_failure_does_not_replace_data() {
    let tracker = FetchTracker::default();
    let mut state = FetchState::default();

    let slow = tracker.issue();
    let fast = tracker.issue();

    assert!(tracker.settle_if_current(fast, &mut state, Ok(3)));
    assert!(!tracker.settle_if_current(slow, &mut state, Err(BackendError::Unauthorized)));
    assert_eq!(state.data, Some(3));
    assert_eq!(state.error, None);
}
