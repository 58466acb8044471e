//! Loading and error placeholders shared by every fetching screen.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_owned());
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}

/// Inline error box with an optional retry button.
#[component]
pub fn ErrorNotice(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(default = "Try Again")] retry_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="error-notice" role="alert">
            <p class="error-notice__message">{message}</p>
            {on_retry.map(|retry| {
                view! {
                    <button class="btn error-notice__retry" on:click=move |_| retry.run(())>
                        {retry_label}
                    </button>
                }
            })}
        </div>
    }
}

/// Per-field validation message, rendered only when `message` is set.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|msg| view! { <p class="field-error">{msg}</p> })
}
