//! Repeated-entry editors used by the admin forms.
//!
//! DESIGN
//! ======
//! The editors never own their rows. They read the current list from a
//! signal and hand every edit back as a whole new list, built with the
//! `state::form` helpers, so the parent draft stays the single source of
//! truth. Rows are keyed by index and read their value reactively, so typing
//! into one input does not rebuild the others.

use leptos::prelude::*;
use records::{DayItinerary, QuickFact};

use crate::state::form::{add_day, add_entry, remove_day, remove_entry, update_day, update_entry};

fn apply<T>(items: Signal<Vec<T>>, on_change: Callback<Vec<T>>, change: impl FnOnce(&mut Vec<T>))
where
    T: Clone + Send + Sync + 'static,
{
    let mut list = items.get_untracked();
    change(&mut list);
    on_change.run(list);
}

fn read<T, R>(items: Signal<Vec<T>>, index: usize, field: impl Fn(&T) -> R) -> R
where
    T: Send + Sync + 'static,
    R: Default,
{
    items.with(|list| list.get(index).map(field).unwrap_or_default())
}

/// One text input per entry plus add/remove buttons.
#[component]
pub fn ListEditor(
    #[prop(into)] label: String,
    #[prop(into)] items: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = "Add")] add_label: &'static str,
) -> impl IntoView {
    view! {
        <fieldset class="list-editor">
            <legend class="list-editor__label">{label}</legend>
            <For
                each=move || 0..items.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="list-editor__row">
                            <input
                                class="list-editor__input"
                                type="text"
                                placeholder=placeholder
                                prop:value=move || read(items, index, String::clone)
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    apply(items, on_change, move |list| update_entry(list, index, text));
                                }
                            />
                            <button
                                type="button"
                                class="btn list-editor__remove"
                                aria-label="Remove entry"
                                on:click=move |_| apply(items, on_change, move |list| remove_entry(list, index))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="btn list-editor__add"
                on:click=move |_| apply(items, on_change, add_entry::<String>)
            >
                {add_label}
            </button>
        </fieldset>
    }
}

/// Label/value pairs for travel guide quick facts.
#[component]
pub fn QuickFactsEditor(
    #[prop(into)] facts: Signal<Vec<QuickFact>>,
    on_change: Callback<Vec<QuickFact>>,
) -> impl IntoView {
    let set = move |index: usize, edit: fn(&mut QuickFact, String), text: String| {
        apply(facts, on_change, move |list| {
            if let Some(fact) = list.get(index) {
                let mut next = fact.clone();
                edit(&mut next, text);
                update_entry(list, index, next);
            }
        });
    };

    view! {
        <fieldset class="list-editor">
            <legend class="list-editor__label">"Quick Facts"</legend>
            <For
                each=move || 0..facts.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="list-editor__row">
                            <input
                                class="list-editor__input"
                                placeholder="Label"
                                prop:value=move || read(facts, index, |f| f.label.clone())
                                on:input=move |ev| set(index, |f, text| f.label = text, event_target_value(&ev))
                            />
                            <input
                                class="list-editor__input"
                                placeholder="Value"
                                prop:value=move || read(facts, index, |f| f.value.clone())
                                on:input=move |ev| set(index, |f, text| f.value = text, event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="btn list-editor__remove"
                                aria-label="Remove fact"
                                on:click=move |_| apply(facts, on_change, move |list| remove_entry(list, index))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="btn list-editor__add"
                on:click=move |_| apply(facts, on_change, add_entry::<QuickFact>)
            >
                "Add Fact"
            </button>
        </fieldset>
    }
}

/// Day-by-day itinerary editor. Days renumber after a removal.
#[component]
pub fn ItineraryEditor(
    #[prop(into)] days: Signal<Vec<DayItinerary>>,
    on_change: Callback<Vec<DayItinerary>>,
) -> impl IntoView {
    let set = move |index: usize, edit: fn(&mut DayItinerary, String), text: String| {
        apply(days, on_change, move |list| update_day(list, index, |day| edit(day, text)));
    };

    view! {
        <fieldset class="itinerary-editor">
            <legend class="list-editor__label">"Itinerary"</legend>
            <For
                each=move || 0..days.with(Vec::len)
                key=|index| *index
                children=move |index| {
                    view! {
                        <div class="itinerary-editor__day">
                            <div class="itinerary-editor__header">
                                <span class="itinerary-editor__number">
                                    {move || format!("Day {}", read(days, index, |d| d.day))}
                                </span>
                                <button
                                    type="button"
                                    class="btn list-editor__remove"
                                    on:click=move |_| apply(days, on_change, move |list| remove_day(list, index))
                                >
                                    "Remove Day"
                                </button>
                            </div>
                            <input
                                class="list-editor__input"
                                placeholder="Title"
                                prop:value=move || read(days, index, |d| d.title.clone())
                                on:input=move |ev| set(index, |d, text| d.title = text, event_target_value(&ev))
                            />
                            <textarea
                                class="list-editor__textarea"
                                placeholder="Description"
                                prop:value=move || read(days, index, |d| d.description.clone())
                                on:input=move |ev| set(index, |d, text| d.description = text, event_target_value(&ev))
                            ></textarea>
                            <textarea
                                class="list-editor__textarea"
                                placeholder="Activities (one per line)"
                                prop:value=move || read(days, index, |d| d.activities.join("\n"))
                                on:input=move |ev| {
                                    set(
                                        index,
                                        |d, text| d.activities = text.lines().map(str::to_owned).collect(),
                                        event_target_value(&ev),
                                    );
                                }
                            ></textarea>
                            <input
                                class="list-editor__input"
                                placeholder="Accommodation"
                                prop:value=move || read(days, index, |d| d.accommodation.clone())
                                on:input=move |ev| set(index, |d, text| d.accommodation = text, event_target_value(&ev))
                            />
                            <input
                                class="list-editor__input"
                                placeholder="Meals (comma separated)"
                                prop:value=move || read(days, index, |d| d.meals.join(", "))
                                on:input=move |ev| {
                                    set(
                                        index,
                                        |d, text| d.meals = text.split(',').map(|m| m.trim().to_owned()).collect(),
                                        event_target_value(&ev),
                                    );
                                }
                            />
                        </div>
                    }
                }
            />
            <button type="button" class="btn list-editor__add" on:click=move |_| apply(days, on_change, add_day)>
                "Add Day"
            </button>
        </fieldset>
    }
}
