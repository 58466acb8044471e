//! Sign-in card shared by the customer and admin login pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both pages run `state::auth::login`; the role decides the redirect and
//! whether the admin check follows sign-in. The admin page also skips the
//! form entirely when the current session is already an admin.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::FieldErrors;
use records::forms::LoginForm;

use crate::components::loading::FieldError;
use crate::components::site_layout::SiteLayout;
use crate::net::use_backend;
use crate::state::auth::{self, FlowState, LoginError, LoginRole};

/// Button caption for the current submission state.
#[must_use]
pub fn submit_label(flow: &FlowState) -> &'static str {
    if flow.is_submitting() { "Signing in..." } else { "Sign In" }
}

/// Message for one field, if validation flagged it.
pub(crate) fn field_message(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
}

#[component]
pub fn LoginCard(role: LoginRole, title: &'static str) -> impl IntoView {
    let backend = use_backend();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let flow = RwSignal::new(FlowState::Idle);
    let errors = RwSignal::new(FieldErrors::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.get_untracked().is_submitting() {
            return;
        }
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        flow.set(FlowState::Submitting);
        errors.set(FieldErrors::default());

        let backend = backend.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(backend.as_ref(), &form, role).await {
                Ok(path) => {
                    flow.set(FlowState::Idle);
                    navigate(path, NavigateOptions::default());
                }
                Err(LoginError::Invalid(fields)) => {
                    errors.set(fields);
                    flow.set(FlowState::Idle);
                }
                Err(LoginError::Rejected(message)) => flow.set(FlowState::Rejected(message)),
            }
        });
    };

    view! {
        <div class="login-card">
            <h1>{title}</h1>
            <form class="login-form" on:submit=on_submit novalidate>
                <input
                    class="login-input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <FieldError message=field_message(errors, "email")/>
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <FieldError message=field_message(errors, "password")/>
                <button class="login-button" type="submit" disabled=move || flow.with(FlowState::is_submitting)>
                    {move || flow.with(submit_label)}
                </button>
            </form>
            <Show when=move || flow.with(|f| f.error().is_some())>
                <p class="login-message login-message--error">
                    {move || flow.with(|f| f.error().map(str::to_owned)).unwrap_or_default()}
                </p>
            </Show>
            <a class="login-card__link" href="/forgot-password">"Forgot your password?"</a>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <SiteLayout>
            <div class="login-page">
                <LoginCard role=LoginRole::Customer title="Welcome Back"/>
            </div>
        </SiteLayout>
    }
}
