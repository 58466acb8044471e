//! Sign-in, password recovery and admin gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login pages, the password-recovery pair and the admin layout all run
//! through these functions. Each takes the injected backend and returns the
//! next UI state; pages only render it and navigate.
//!
//! ERROR HANDLING
//! ==============
//! Remote messages from the identity service are shown verbatim. Transport
//! and decode failures collapse into one generic message. Recovery-mail
//! failures are logged and never shown, so the page does not reveal which
//! addresses have accounts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::forms::{LoginForm, ResetPasswordForm};
use records::{FieldErrors, check};

use crate::net::{Backend, BackendError};

pub const NOT_ADMIN: &str = "You do not have administrator privileges";
pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
pub const RESET_MAIL_SENT: &str = "Check your email for the password reset link.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const PASSWORD_UPDATED: &str = "Password updated successfully. You can now sign in.";

/// Delay before leaving the reset page after a successful update.
pub const RESET_REDIRECT_MS: u32 = 1200;

/// Progress of one auth form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Resolved(String),
    Rejected(String),
}

impl FlowState {
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Resolved(msg) => Some(msg),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Rejected(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Which login page is submitting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginRole {
    Customer,
    Admin,
}

impl LoginRole {
    /// Where a successful sign-in lands.
    #[must_use]
    pub fn redirect_path(self) -> &'static str {
        match self {
            Self::Customer => "/",
            Self::Admin => "/admin/dashboard",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginError {
    /// Client-side validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The backend refused, or the account is not an admin.
    Rejected(String),
}

fn remote_message(err: &BackendError) -> String {
    match err {
        BackendError::Status { message, .. } => message.clone(),
        other => {
            leptos::logging::error!("auth request failed: {other}");
            UNEXPECTED.to_owned()
        }
    }
}

/// Sign in and, for the admin page, confirm the role.
///
/// Returns the path to navigate to.
///
/// # Errors
///
/// [`LoginError::Invalid`] before any remote call when the form is
/// malformed; [`LoginError::Rejected`] with the message to show otherwise.
pub async fn login(backend: &dyn Backend, form: &LoginForm, role: LoginRole) -> Result<&'static str, LoginError> {
    check(form).map_err(LoginError::Invalid)?;
    backend
        .sign_in(form.email.trim(), &form.password)
        .await
        .map_err(|e| LoginError::Rejected(remote_message(&e)))?;

    if role == LoginRole::Admin && !is_admin(backend).await {
        if let Err(e) = backend.sign_out().await {
            leptos::logging::warn!("sign-out after failed admin check: {e}");
        }
        return Err(LoginError::Rejected(NOT_ADMIN.to_owned()));
    }
    Ok(role.redirect_path())
}

/// Whether the current session is an admin. Errors count as "no".
pub async fn is_admin(backend: &dyn Backend) -> bool {
    match backend.is_admin().await {
        Ok(admin) => admin,
        Err(e) => {
            leptos::logging::warn!("admin check failed: {e}");
            false
        }
    }
}

/// Mail a recovery link that lands on `{origin}/reset-password`.
pub async fn request_reset(backend: &dyn Backend, email: &str, origin: &str) -> FlowState {
    let redirect = format!("{origin}/reset-password");
    if let Err(e) = backend.reset_password_for_email(email.trim(), &redirect).await {
        leptos::logging::error!("password reset request failed: {e}");
    }
    FlowState::Resolved(RESET_MAIL_SENT.to_owned())
}

/// Set a new password on the recovery session.
///
/// A mismatched confirmation is rejected without contacting the backend.
pub async fn reset_password(backend: &dyn Backend, form: &ResetPasswordForm) -> FlowState {
    if form.password != form.confirm {
        return FlowState::Rejected(PASSWORDS_DIFFER.to_owned());
    }
    if let Err(errors) = check(form) {
        let message = errors.iter().next().map_or(UNEXPECTED, |(_, msg)| msg);
        return FlowState::Rejected(message.to_owned());
    }
    match backend.update_password(&form.password).await {
        Ok(()) => FlowState::Resolved(PASSWORD_UPDATED.to_owned()),
        Err(BackendError::Unauthorized) => {
            FlowState::Rejected("Your reset link has expired. Please request a new one.".to_owned())
        }
        Err(e) => FlowState::Rejected(remote_message(&e)),
    }
}

/// Admin layout access while the role check is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminGate {
    #[default]
    Checking,
    Allowed,
    Denied,
}

impl From<bool> for AdminGate {
    fn from(admin: bool) -> Self {
        if admin { Self::Allowed } else { Self::Denied }
    }
}

/// Sign out of the current session.
pub async fn sign_out(backend: &dyn Backend) {
    if let Err(e) = backend.sign_out().await {
        leptos::logging::warn!("sign-out failed: {e}");
    }
}
