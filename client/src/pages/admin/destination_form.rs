//! `/admin/destinations/new` and `/admin/destinations/edit/:id`.
//!
//! List-valued fields are edited as one entry per line.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::forms::DestinationDraft;
use records::{DestinationCategory, Difficulty};

use super::{FormActions, ScreenHeader, use_draft_form};
use crate::components::form_field::{CheckboxField, LinesField, NumberField, SelectField, TextArea, TextField};
use crate::components::loading::{FieldError, Loading};
use crate::components::table_toolbar::enum_options;
use crate::net::use_backend;
use crate::state::form::Draft;

#[component]
pub fn DestinationFormPage() -> impl IntoView {
    let form = use_draft_form::<DestinationDraft>();
    let backend = use_backend();
    let navigate = use_navigate();

    let name = form.bind(|d| d.name.clone(), |d, v| d.name = v);
    let slug = form.bind(|d| d.slug.clone(), |d, v| d.slug = v);
    let short_description = form.bind(|d| d.short_description.clone(), |d, v| d.short_description = v);
    let description = form.bind(|d| d.description.clone(), |d, v| d.description = v);
    let featured_image = form.bind(|d| d.featured_image.clone(), |d, v| d.featured_image = v);
    let images = form.bind(|d| d.images.clone(), |d, v| d.images = v);
    let category = form.bind(|d| d.category.clone(), |d, v| d.category = v);
    let difficulty = form.bind(
        |d| d.difficulty_level.to_string(),
        |d, v: String| {
            if let Ok(level) = v.parse() {
                d.difficulty_level = level;
            }
        },
    );
    let latitude = form.bind(|d| d.location.latitude, |d, v| d.location.latitude = v);
    let longitude = form.bind(|d| d.location.longitude, |d, v| d.location.longitude = v);
    let region = form.bind(|d| d.location.region.clone(), |d, v| d.location.region = v);
    let district = form.bind(|d| d.location.district.clone(), |d, v| d.location.district = v);
    let best_time = form.bind(|d| d.best_time_to_visit.clone(), |d, v| d.best_time_to_visit = v);
    let duration = form.bind(|d| d.duration_recommended.clone(), |d, v| d.duration_recommended = v);
    let activities = form.bind(|d| d.activities.clone(), |d, v| d.activities = v);
    let highlights = form.bind(|d| d.highlights.clone(), |d, v| d.highlights = v);
    let entry_requirements = form.bind(|d| d.entry_requirements.clone(), |d, v| d.entry_requirements = v);
    let accommodation = form.bind(|d| d.accommodation_options.clone(), |d, v| d.accommodation_options = v);
    let transportation = form.bind(|d| d.transportation.clone(), |d, v| d.transportation = v);
    let featured = form.bind(|d| d.featured, |d, v| d.featured = v);
    let active = form.bind(|d| d.active, |d, v| d.active = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit(backend.clone(), navigate.clone());
    };
    let heading = move || if form.is_editing() { "Edit Destination" } else { "Add New Destination" };
    let submit_label =
        Signal::derive(move || if form.is_editing() { "Update Destination" } else { "Create Destination" });

    view! {
        <div class="admin-screen">
            <ScreenHeader title="Destinations"/>
            <h2 class="admin-form__heading">{heading}</h2>
            {move || form.loading.get().then(|| view! { <Loading label="Loading destination..."/> })}
            <form class="admin-form" class:admin-form--hidden=move || form.loading.get() on:submit=on_submit novalidate>
                <fieldset class="admin-form__section">
                    <legend>"Basics"</legend>
                    <TextField label="Name" bind=name error=form.error("name")/>
                    <TextField label="Slug" bind=slug placeholder="Leave blank to derive from the name"/>
                    <SelectField
                        label="Category"
                        bind=category
                        options=enum_options(&DestinationCategory::ALL, DestinationCategory::label)
                    />
                    <TextField label="Short Description" bind=short_description/>
                    <TextArea label="Description" bind=description rows=6 error=form.error("description")/>
                    <TextField
                        label="Featured Image URL"
                        bind=featured_image
                        kind="url"
                        placeholder="https://..."
                        error=form.error("featured_image")
                    />
                    <LinesField label="Gallery Image URLs" bind=images error=form.error("images")/>
                </fieldset>
                <fieldset class="admin-form__section">
                    <legend>"Location"</legend>
                    <NumberField label="Latitude" bind=latitude step="any"/>
                    <NumberField label="Longitude" bind=longitude step="any"/>
                    <FieldError message=form.error("location")/>
                    <TextField label="Region" bind=region/>
                    <TextField label="District" bind=district/>
                </fieldset>
                <fieldset class="admin-form__section">
                    <legend>"Visiting"</legend>
                    <TextField label="Best Time to Visit" bind=best_time/>
                    <TextField label="Recommended Duration" bind=duration placeholder="e.g. 2-3 days"/>
                    <SelectField
                        label="Difficulty"
                        bind=difficulty
                        options=enum_options(&Difficulty::ALL, Difficulty::label)
                    />
                    <LinesField label="Activities" bind=activities/>
                    <LinesField label="Highlights" bind=highlights/>
                    <LinesField label="Entry Requirements" bind=entry_requirements/>
                    <LinesField label="Accommodation Options" bind=accommodation/>
                    <LinesField label="Transportation" bind=transportation/>
                </fieldset>
                <fieldset class="admin-form__section admin-form__section--flags">
                    <CheckboxField label="Featured" bind=featured/>
                    <CheckboxField label="Active" bind=active/>
                </fieldset>
                <FormActions
                    list_route=DestinationDraft::COPY.list_route
                    saving=form.saving
                    submit_label=submit_label
                />
            </form>
        </div>
    }
}
