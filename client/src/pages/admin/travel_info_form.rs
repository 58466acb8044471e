//! `/admin/travel-info/new` and `/admin/travel-info/edit/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::TravelInfoCategory;
use records::forms::TravelInfoDraft;

use super::{FormActions, ScreenHeader, use_draft_form};
use crate::components::form_field::{CheckboxField, SelectField, TextArea, TextField};
use crate::components::list_editor::{ListEditor, QuickFactsEditor};
use crate::components::loading::{FieldError, Loading};
use crate::components::table_toolbar::enum_options;
use crate::net::use_backend;
use crate::state::form::Draft;

#[component]
pub fn TravelInfoFormPage() -> impl IntoView {
    let form = use_draft_form::<TravelInfoDraft>();
    let backend = use_backend();
    let navigate = use_navigate();

    let title = form.bind(|d| d.title.clone(), |d, v| d.title = v);
    let excerpt = form.bind(|d| d.excerpt.clone(), |d, v| d.excerpt = v);
    let content = form.bind(|d| d.content.clone(), |d, v| d.content = v);
    let featured_image = form.bind(|d| d.featured_image.clone(), |d, v| d.featured_image = v);
    let category = form.bind(
        |d| d.category.to_string(),
        |d, v: String| {
            if let Ok(category) = v.parse() {
                d.category = category;
            }
        },
    );
    let tags = form.bind(|d| d.tags.clone(), |d, v| d.tags = v);
    let quick_facts = form.bind(|d| d.quick_facts.clone(), |d, v| d.quick_facts = v);
    let checklist = form.bind(|d| d.checklist_items.clone(), |d, v| d.checklist_items = v);
    let featured = form.bind(|d| d.featured, |d, v| d.featured = v);
    let active = form.bind(|d| d.active, |d, v| d.active = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit(backend.clone(), navigate.clone());
    };
    let heading = move || {
        if form.is_editing() {
            "Edit Travel Information"
        } else {
            "Add Travel Information"
        }
    };
    let submit_label = Signal::derive(move || if form.is_editing() { "Update" } else { "Create" });

    view! {
        <div class="admin-screen">
            <ScreenHeader title="Travel Information"/>
            <h2 class="admin-form__heading">{heading}</h2>
            {move || form.loading.get().then(|| view! { <Loading label="Loading travel information..."/> })}
            <form class="admin-form" class:admin-form--hidden=move || form.loading.get() on:submit=on_submit novalidate>
                <fieldset class="admin-form__section">
                    <TextField label="Title" bind=title error=form.error("title")/>
                    <SelectField
                        label="Category"
                        bind=category
                        options=enum_options(&TravelInfoCategory::ALL, TravelInfoCategory::label)
                    />
                    <TextArea label="Excerpt" bind=excerpt rows=3 error=form.error("excerpt")/>
                    <TextArea label="Content (Markdown)" bind=content rows=14 error=form.error("content")/>
                    <TextField
                        label="Featured Image URL"
                        bind=featured_image
                        kind="url"
                        placeholder="https://..."
                        error=form.error("featured_image")
                    />
                </fieldset>
                <fieldset class="admin-form__section">
                    <QuickFactsEditor facts=quick_facts.value on_change=quick_facts.set/>
                    <FieldError message=form.error("quick_facts")/>
                    <ListEditor
                        label="Checklist"
                        items=checklist.value
                        on_change=checklist.set
                        add_label="Add Checklist Item"
                    />
                    <ListEditor label="Tags" items=tags.value on_change=tags.set add_label="Add Tag"/>
                    <FieldError message=form.error("tags")/>
                </fieldset>
                <fieldset class="admin-form__section admin-form__section--flags">
                    <CheckboxField label="Featured" bind=featured/>
                    <CheckboxField label="Active" bind=active/>
                </fieldset>
                <FormActions
                    list_route=TravelInfoDraft::COPY.list_route
                    saving=form.saving
                    submit_label=submit_label
                />
            </form>
        </div>
    }
}
