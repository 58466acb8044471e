//! Request a password-reset email.

use leptos::prelude::*;

use crate::components::site_layout::SiteLayout;
use crate::net::use_backend;
use crate::state::auth::{self, FlowState};
use crate::util::browser;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let backend = use_backend();
    let email = RwSignal::new(String::new());
    let flow = RwSignal::new(FlowState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if flow.get_untracked().is_submitting() {
            return;
        }
        flow.set(FlowState::Submitting);
        let backend = backend.clone();
        let address = email.get_untracked();
        leptos::task::spawn_local(async move {
            let outcome = auth::request_reset(backend.as_ref(), &address, &browser::origin()).await;
            flow.set(outcome);
        });
    };

    view! {
        <SiteLayout>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Reset Password"</h1>
                    <p class="login-card__subtitle">"Enter your email and we will send you a reset link."</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="email"
                            required
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || flow.with(FlowState::is_submitting)>
                            {move || if flow.with(FlowState::is_submitting) { "Sending..." } else { "Send Reset Link" }}
                        </button>
                    </form>
                    {move || flow.with(|f| f.message().map(str::to_owned)).map(|msg| view! { <p class="login-message">{msg}</p> })}
                    <a class="login-card__link" href="/login">"Back to sign in"</a>
                </div>
            </div>
        </SiteLayout>
    }
}
