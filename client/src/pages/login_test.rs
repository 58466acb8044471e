use super::*;

#[test]
fn submit_label_tracks_submission() {
    assert_eq!(submit_label(&FlowState::Idle), "Sign In");
    assert_eq!(submit_label(&FlowState::Submitting), "Signing in...");
    assert_eq!(submit_label(&FlowState::Rejected("bad".to_owned())), "Sign In");
}
