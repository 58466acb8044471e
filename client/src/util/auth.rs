//! Admin route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen under the admin layout shares one role check. The layout
//! installs it once on mount; non-admins are sent to the admin login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::SharedBackend;
use crate::state::auth::{self, AdminGate};

pub const ADMIN_LOGIN: &str = "/admin/login";

/// Whether the gate has settled on "not an admin".
#[must_use]
pub fn should_redirect(gate: AdminGate) -> bool {
    gate == AdminGate::Denied
}

/// Run the admin check into `gate` and redirect once it denies access.
pub fn install_admin_guard<F>(backend: SharedBackend, gate: RwSignal<AdminGate>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let admin = auth::is_admin(backend.as_ref()).await;
            gate.set(AdminGate::from(admin));
        });
    });

    Effect::new(move || {
        if should_redirect(gate.get()) {
            navigate(
                ADMIN_LOGIN,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
