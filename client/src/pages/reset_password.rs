//! Choose a new password from a recovery link.
//!
//! The recovery token in the link fragment was adopted by the backend when
//! it was constructed, so this page only submits the new password. A
//! successful update returns to `/login` after a short pause.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::forms::ResetPasswordForm;

use crate::components::site_layout::SiteLayout;
use crate::net::use_backend;
use crate::state::auth::{self, FlowState, RESET_REDIRECT_MS};
use crate::util::browser::sleep_ms;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let backend = use_backend();
    let navigate = use_navigate();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let flow = RwSignal::new(FlowState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.get_untracked().is_submitting() {
            return;
        }
        let form = ResetPasswordForm {
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        flow.set(FlowState::Submitting);
        let backend = backend.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = auth::reset_password(backend.as_ref(), &form).await;
            let succeeded = outcome.message().is_some();
            flow.set(outcome);
            if succeeded {
                sleep_ms(RESET_REDIRECT_MS).await;
                navigate("/login", NavigateOptions::default());
            }
        });
    };

    view! {
        <SiteLayout>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Set a New Password"</h1>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="New password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || flow.with(FlowState::is_submitting)>
                            {move || if flow.with(FlowState::is_submitting) { "Updating..." } else { "Update Password" }}
                        </button>
                    </form>
                    {move || flow.with(|f| f.message().map(str::to_owned)).map(|msg| view! { <p class="login-message">{msg}</p> })}
                    {move || {
                        flow.with(|f| f.error().map(str::to_owned))
                            .map(|msg| view! { <p class="login-message login-message--error">{msg}</p> })
                    }}
                </div>
            </div>
        </SiteLayout>
    }
}
