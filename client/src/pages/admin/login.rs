//! `/admin/login`: the sign-in card outside the admin layout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::use_backend;
use crate::pages::login::LoginCard;
use crate::state::auth::{self, LoginRole};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let backend = use_backend();
    let navigate = use_navigate();

    // An admin session skips the form.
    Effect::new(move || {
        let backend = backend.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if auth::is_admin(backend.as_ref()).await {
                navigate(
                    LoginRole::Admin.redirect_path(),
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                );
            }
        });
    });

    view! {
        <div class="login-page login-page--admin">
            <LoginCard role=LoginRole::Admin title="Admin Sign In"/>
            <a class="login-card__link" href="/">"← Back to site"</a>
        </div>
    }
}
