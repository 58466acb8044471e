//! `/admin/tours/new` and `/admin/tours/edit/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::forms::TourDraft;
use records::{Difficulty, TourCategory};

use super::{FormActions, ScreenHeader, use_draft_form};
use crate::components::form_field::{CheckboxField, NumberField, SelectField, TextArea, TextField};
use crate::components::list_editor::{ItineraryEditor, ListEditor};
use crate::components::loading::{FieldError, Loading};
use crate::components::table_toolbar::enum_options;
use crate::net::use_backend;
use crate::state::form::Draft;

#[component]
pub fn TourFormPage() -> impl IntoView {
    let form = use_draft_form::<TourDraft>();
    let backend = use_backend();
    let navigate = use_navigate();

    let title = form.bind(|d| d.title.clone(), |d, v| d.title = v);
    let short_description = form.bind(|d| d.short_description.clone(), |d, v| d.short_description = v);
    let description = form.bind(|d| d.description.clone(), |d, v| d.description = v);
    let category = form.bind(
        |d| d.category.to_string(),
        |d, v: String| {
            if let Ok(category) = v.parse() {
                d.category = category;
            }
        },
    );
    let difficulty = form.bind(
        |d| d.difficulty.to_string(),
        |d, v: String| {
            if let Ok(difficulty) = v.parse() {
                d.difficulty = difficulty;
            }
        },
    );
    let duration = form.bind(|d| d.duration, |d, v| d.duration = v);
    let price_usd = form.bind(|d| d.price_usd, |d, v| d.price_usd = v);
    let price_tzs = form.bind(|d| d.price_tzs, |d, v| d.price_tzs = v);
    let min_participants = form.bind(|d| d.min_participants, |d, v| d.min_participants = v);
    let max_participants = form.bind(|d| d.max_participants, |d, v| d.max_participants = v);
    let best_time = form.bind(|d| d.best_time.clone(), |d, v| d.best_time = v);
    let images = form.bind(|d| d.images.clone(), |d, v| d.images = v);
    let includes = form.bind(|d| d.includes.clone(), |d, v| d.includes = v);
    let excludes = form.bind(|d| d.excludes.clone(), |d, v| d.excludes = v);
    let requirements = form.bind(|d| d.requirements.clone(), |d, v| d.requirements = v);
    let itinerary = form.bind(|d| d.itinerary.clone(), |d, v| d.itinerary = v);
    let featured = form.bind(|d| d.featured, |d, v| d.featured = v);
    let active = form.bind(|d| d.active, |d, v| d.active = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit(backend.clone(), navigate.clone());
    };
    let heading = move || if form.is_editing() { "Edit Tour Package" } else { "Create New Tour Package" };
    let submit_label = Signal::derive(move || if form.is_editing() { "Update Tour" } else { "Create Tour" });

    view! {
        <div class="admin-screen">
            <ScreenHeader title="Tour Packages"/>
            <h2 class="admin-form__heading">{heading}</h2>
            {move || form.loading.get().then(|| view! { <Loading label="Loading tour..."/> })}
            <form class="admin-form" class:admin-form--hidden=move || form.loading.get() on:submit=on_submit novalidate>
                <fieldset class="admin-form__section">
                    <legend>"Basics"</legend>
                    <TextField label="Title" bind=title error=form.error("title")/>
                    <TextField
                        label="Short Description"
                        bind=short_description
                        error=form.error("short_description")
                    />
                    <TextArea label="Description" bind=description rows=6 error=form.error("description")/>
                    <SelectField
                        label="Category"
                        bind=category
                        options=enum_options(&TourCategory::ALL, TourCategory::label)
                    />
                    <SelectField
                        label="Difficulty"
                        bind=difficulty
                        options=enum_options(&Difficulty::ALL, Difficulty::label)
                    />
                    <TextField
                        label="Best Time to Visit"
                        bind=best_time
                        placeholder="e.g. June to October"
                        error=form.error("best_time")
                    />
                </fieldset>
                <fieldset class="admin-form__section">
                    <legend>"Pricing & Group"</legend>
                    <NumberField label="Duration (days)" bind=duration error=form.error("duration")/>
                    <NumberField label="Price (USD)" bind=price_usd step="0.01" error=form.error("price_usd")/>
                    <NumberField label="Price (TZS)" bind=price_tzs step="0.01" error=form.error("price_tzs")/>
                    <NumberField
                        label="Min Participants"
                        bind=min_participants
                        error=form.error("min_participants")
                    />
                    <NumberField
                        label="Max Participants"
                        bind=max_participants
                        error=form.error("max_participants")
                    />
                </fieldset>
                <fieldset class="admin-form__section">
                    <legend>"Details"</legend>
                    <ListEditor
                        label="Images"
                        items=images.value
                        on_change=images.set
                        placeholder="https://..."
                        add_label="Add Image"
                    />
                    <FieldError message=form.error("images")/>
                    <ListEditor label="Included" items=includes.value on_change=includes.set add_label="Add Item"/>
                    <FieldError message=form.error("includes")/>
                    <ListEditor label="Not Included" items=excludes.value on_change=excludes.set add_label="Add Item"/>
                    <FieldError message=form.error("excludes")/>
                    <ListEditor
                        label="Requirements"
                        items=requirements.value
                        on_change=requirements.set
                        add_label="Add Requirement"
                    />
                    <FieldError message=form.error("requirements")/>
                    <ItineraryEditor days=itinerary.value on_change=itinerary.set/>
                </fieldset>
                <fieldset class="admin-form__section admin-form__section--flags">
                    <CheckboxField label="Featured" bind=featured/>
                    <CheckboxField label="Active" bind=active/>
                </fieldset>
                <FormActions
                    list_route=TourDraft::COPY.list_route
                    saving=form.saving
                    submit_label=submit_label
                />
            </form>
        </div>
    }
}
