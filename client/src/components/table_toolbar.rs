//! Search box, filter selects and the result counter above admin tables.
//!
//! DESIGN
//! ======
//! Controls are stateless: each takes the current value as a signal and
//! reports edits through a callback, so a screen keeps its whole filter in
//! one `RwSignal` and the table re-derives from it.

use leptos::prelude::*;

use crate::state::filters::ALL;
use crate::state::listing::showing_label;

#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="table-toolbar__search"
            type="search"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}

/// `<select>` with a leading "All" option that reports [`ALL`].
#[component]
pub fn FilterSelect(
    #[prop(into)] value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
    #[prop(default = "All")] all_label: &'static str,
) -> impl IntoView {
    view! {
        <select
            class="table-toolbar__select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value=ALL>{all_label}</option>
            {options
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn FlagCheckbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="table-toolbar__flag">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

/// "Showing X of Y" plus a clear-filters button.
#[component]
pub fn ShowingCount(
    #[prop(into)] shown: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    noun: &'static str,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="table-toolbar__count">
            <span>{move || showing_label(shown.get(), total.get(), noun)}</span>
            <button class="btn btn--link" on:click=move |_| on_clear.run(())>
                "Clear filters"
            </button>
        </div>
    }
}

/// Option list from a wire enum's `ALL` table.
pub fn enum_options<E: Copy + ToString>(all: &[E], label: impl Fn(E) -> &'static str) -> Vec<(String, String)> {
    all.iter().map(|e| (e.to_string(), label(*e).to_owned())).collect()
}
