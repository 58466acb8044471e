//! Labelled inputs for the admin create/edit forms.
//!
//! DESIGN
//! ======
//! A field never owns its value. It is handed a [`Binding`]: a read signal
//! projected out of the form's draft and a callback that writes one field
//! back. Validation messages arrive the same way, as an optional signal.

use std::str::FromStr;

use leptos::prelude::*;
use records::forms::lines_to_entries;

use super::loading::FieldError;

/// Read/write projection of one draft field.
pub struct Binding<V: 'static> {
    pub value: Signal<V>,
    pub set: Callback<V>,
}

impl<V: 'static> Clone for Binding<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: 'static> Copy for Binding<V> {}

fn error_line(error: Option<Signal<Option<String>>>) -> impl IntoView {
    error.map(|message| view! { <FieldError message=message/> })
}

#[component]
pub fn TextField(
    label: &'static str,
    bind: Binding<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || bind.value.get()
                on:input=move |ev| bind.set.run(event_target_value(&ev))
            />
            {error_line(error)}
        </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    bind: Binding<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input form-field__input--multiline"
                rows=rows
                placeholder=placeholder
                prop:value=move || bind.value.get()
                on:input=move |ev| bind.set.run(event_target_value(&ev))
            ></textarea>
            {error_line(error)}
        </label>
    }
}

/// One entry per line. Commits on blur so blank lines survive while typing.
#[component]
pub fn LinesField(
    label: &'static str,
    bind: Binding<Vec<String>>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <textarea
                class="form-field__input form-field__input--multiline"
                rows=rows
                placeholder="One entry per line"
                prop:value=move || bind.value.with(|entries| entries.join("\n"))
                on:change=move |ev| bind.set.run(lines_to_entries(&event_target_value(&ev)))
            ></textarea>
            {error_line(error)}
        </label>
    }
}

/// Numeric input. Text that does not parse leaves the draft unchanged.
#[component]
pub fn NumberField<V>(
    label: &'static str,
    bind: Binding<V>,
    #[prop(default = "1")] step: &'static str,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView
where
    V: FromStr + ToString + Clone + Send + Sync + 'static,
{
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type="number"
                step=step
                prop:value=move || bind.value.with(ToString::to_string)
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).trim().parse::<V>() {
                        bind.set.run(value);
                    }
                }
            />
            {error_line(error)}
        </label>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    bind: Binding<String>,
    options: Vec<(String, String)>,
    #[prop(optional)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                prop:value=move || bind.value.get()
                on:change=move |ev| bind.set.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(value, text)| view! { <option value=value>{text}</option> })
                    .collect_view()}
            </select>
            {error_line(error)}
        </label>
    }
}

#[component]
pub fn CheckboxField(label: &'static str, bind: Binding<bool>) -> impl IntoView {
    view! {
        <label class="form-field form-field--inline">
            <input
                type="checkbox"
                prop:checked=move || bind.value.get()
                on:change=move |ev| bind.set.run(event_target_checked(&ev))
            />
            <span class="form-field__label">{label}</span>
        </label>
    }
}
