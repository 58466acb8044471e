use super::*;
use crate::net::mock::{Call, MockBackend};
use futures::executor::block_on;

fn login_form() -> LoginForm {
    LoginForm {
        email: "guide@example.com".to_owned(),
        password: "kilimanjaro".to_owned(),
    }
}

fn reset_form(password: &str, confirm: &str) -> ResetPasswordForm {
    ResetPasswordForm {
        password: password.to_owned(),
        confirm: confirm.to_owned(),
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn customer_login_redirects_home() {
    let mock = MockBackend::new();
    let path = block_on(login(&mock, &login_form(), LoginRole::Customer)).expect("login");
    assert_eq!(path, "/");
    assert_eq!(mock.calls(), vec![Call::SignIn("guide@example.com".to_owned())]);
}

#[test]
fn invalid_form_never_reaches_backend() {
    let mock = MockBackend::new();
    let form = LoginForm {
        email: "not-an-email".to_owned(),
        password: "123".to_owned(),
    };
    let Err(LoginError::Invalid(errors)) = block_on(login(&mock, &form, LoginRole::Customer)) else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.len(), 2);
    assert!(mock.calls().is_empty());
}

#[test]
fn remote_rejection_shows_backend_message() {
    let mock = MockBackend::new().rejecting_sign_in(BackendError::Status {
        status: 400,
        message: "Invalid login credentials".to_owned(),
    });
    let err = block_on(login(&mock, &login_form(), LoginRole::Customer)).expect_err("rejected");
    assert_eq!(err, LoginError::Rejected("Invalid login credentials".to_owned()));
}

#[test]
fn transport_failure_shows_generic_message() {
    let mock = MockBackend::new().rejecting_sign_in(BackendError::Request("offline".to_owned()));
    let err = block_on(login(&mock, &login_form(), LoginRole::Admin)).expect_err("rejected");
    assert_eq!(err, LoginError::Rejected(UNEXPECTED.to_owned()));
}

#[test]
fn admin_login_lands_on_dashboard() {
    let mock = MockBackend::new().with_admin(Ok(true));
    let path = block_on(login(&mock, &login_form(), LoginRole::Admin)).expect("admin");
    assert_eq!(path, "/admin/dashboard");
    assert!(mock.is_signed_in());
}

#[test]
fn non_admin_is_signed_out_and_refused() {
    for answer in [Ok(false), Err(BackendError::Unauthorized)] {
        let mock = MockBackend::new().with_admin(answer);
        let err = block_on(login(&mock, &login_form(), LoginRole::Admin)).expect_err("refused");
        assert_eq!(err, LoginError::Rejected(NOT_ADMIN.to_owned()));
        assert!(!mock.is_signed_in());
        assert_eq!(mock.calls().last(), Some(&Call::SignOut));
    }
}

// =============================================================
// Password recovery
// =============================================================

#[test]
fn reset_request_uses_origin_redirect() {
    let mock = MockBackend::new();
    let state = block_on(request_reset(&mock, " guest@example.com ", "https://karibu.example"));
    assert_eq!(state.message(), Some(RESET_MAIL_SENT));
    assert_eq!(
        mock.calls(),
        vec![Call::ResetPasswordForEmail(
            "guest@example.com".to_owned(),
            "https://karibu.example/reset-password".to_owned()
        )]
    );
}

#[test]
fn reset_request_failure_still_reads_neutral() {
    let mock = MockBackend::new().rejecting_reset(BackendError::Status {
        status: 429,
        message: "rate limited".to_owned(),
    });
    let state = block_on(request_reset(&mock, "guest@example.com", ""));
    assert_eq!(state, FlowState::Resolved(RESET_MAIL_SENT.to_owned()));
}

#[test]
fn mismatched_confirmation_never_calls_backend() {
    let mock = MockBackend::new();
    let state = block_on(reset_password(&mock, &reset_form("serengeti", "serengetti")));
    assert_eq!(state.error(), Some(PASSWORDS_DIFFER));
    assert!(mock.calls().is_empty());
}

#[test]
fn short_password_rejected_locally() {
    let mock = MockBackend::new();
    let state = block_on(reset_password(&mock, &reset_form("abc", "abc")));
    assert_eq!(state.error(), Some("Password must be at least 6 characters"));
    assert!(mock.calls().is_empty());
}

#[test]
fn matching_passwords_update_remote() {
    let mock = MockBackend::new();
    let state = block_on(reset_password(&mock, &reset_form("serengeti", "serengeti")));
    assert_eq!(state.message(), Some(PASSWORD_UPDATED));
    assert_eq!(mock.calls(), vec![Call::UpdatePassword("serengeti".to_owned())]);
}

#[test]
fn update_failure_is_shown() {
    let mock = MockBackend::new().rejecting_password_update(BackendError::Status {
        status: 422,
        message: "New password should be different from the old password.".to_owned(),
    });
    let state = block_on(reset_password(&mock, &reset_form("serengeti", "serengeti")));
    assert_eq!(state.error(), Some("New password should be different from the old password."));
}

// =============================================================
// Admin gate
// =============================================================

#[test]
fn admin_gate_from_check() {
    assert_eq!(AdminGate::default(), AdminGate::Checking);
    assert_eq!(AdminGate::from(block_on(is_admin(&MockBackend::new()))), AdminGate::Denied);
    let admin = MockBackend::new().with_admin(Ok(true));
    assert_eq!(AdminGate::from(block_on(is_admin(&admin))), AdminGate::Allowed);
}

#[test]
fn flow_state_accessors() {
    assert!(FlowState::Submitting.is_submitting());
    assert_eq!(FlowState::Idle.message(), None);
    assert_eq!(FlowState::Rejected("x".to_owned()).error(), Some("x"));
}
