//! `/admin/blog/new` and `/admin/blog/edit/:id`.
//!
//! The body is markdown; a live preview renders it through the same
//! sanitizing path as the public post page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::BLOG_CATEGORIES;
use records::forms::BlogDraft;

use super::{FormActions, ScreenHeader, use_draft_form};
use crate::components::form_field::{CheckboxField, SelectField, TextArea, TextField};
use crate::components::list_editor::ListEditor;
use crate::components::loading::{FieldError, Loading};
use crate::net::use_backend;
use crate::state::form::Draft;
use crate::util::markdown;

fn category_options() -> Vec<(String, String)> {
    std::iter::once((String::new(), "Select a category".to_owned()))
        .chain(BLOG_CATEGORIES.iter().map(|c| ((*c).to_owned(), (*c).to_owned())))
        .collect()
}

#[component]
pub fn BlogFormPage() -> impl IntoView {
    let form = use_draft_form::<BlogDraft>();
    let backend = use_backend();
    let navigate = use_navigate();
    let preview = RwSignal::new(false);

    let title = form.bind(|d| d.title.clone(), |d, v| d.title = v);
    let excerpt = form.bind(|d| d.excerpt.clone(), |d, v| d.excerpt = v);
    let content = form.bind(|d| d.content.clone(), |d, v| d.content = v);
    let featured_image = form.bind(|d| d.featured_image.clone(), |d, v| d.featured_image = v);
    let author = form.bind(|d| d.author.clone(), |d, v| d.author = v);
    let category = form.bind(|d| d.category.clone(), |d, v| d.category = v);
    let tags = form.bind(|d| d.tags.clone(), |d, v| d.tags = v);
    let published = form.bind(|d| d.published, |d, v| d.published = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form.submit(backend.clone(), navigate.clone());
    };
    let heading = move || if form.is_editing() { "Edit Blog Post" } else { "Write New Blog Post" };
    let submit_label = Signal::derive(move || if form.is_editing() { "Update Post" } else { "Create Post" });
    let rendered = move || content.value.with(|text| markdown::to_html(text));

    view! {
        <div class="admin-screen">
            <ScreenHeader title="Blog Posts"/>
            <h2 class="admin-form__heading">{heading}</h2>
            {move || form.loading.get().then(|| view! { <Loading label="Loading post..."/> })}
            <form class="admin-form" class:admin-form--hidden=move || form.loading.get() on:submit=on_submit novalidate>
                <fieldset class="admin-form__section">
                    <TextField label="Title" bind=title error=form.error("title")/>
                    <TextArea label="Excerpt" bind=excerpt rows=3 error=form.error("excerpt")/>
                    <TextField
                        label="Featured Image URL"
                        bind=featured_image
                        kind="url"
                        placeholder="https://..."
                        error=form.error("featured_image")
                    />
                    <TextField label="Author" bind=author error=form.error("author")/>
                    <SelectField
                        label="Category"
                        bind=category
                        options=category_options()
                        error=form.error("category")
                    />
                </fieldset>
                <fieldset class="admin-form__section">
                    <div class="admin-form__tabs">
                        <button type="button" class="chip" class:chip--active=move || !preview.get() on:click=move |_| preview.set(false)>
                            "Write"
                        </button>
                        <button type="button" class="chip" class:chip--active=move || preview.get() on:click=move |_| preview.set(true)>
                            "Preview"
                        </button>
                    </div>
                    <div class:admin-form--hidden=move || preview.get()>
                        <TextArea
                            label="Content (Markdown)"
                            bind=content
                            rows=16
                            error=form.error("content")
                        />
                    </div>
                    <div
                        class="admin-form__preview blog-post__content"
                        class:admin-form--hidden=move || !preview.get()
                        inner_html=rendered
                    ></div>
                </fieldset>
                <fieldset class="admin-form__section">
                    <ListEditor label="Tags" items=tags.value on_change=tags.set add_label="Add Tag"/>
                    <FieldError message=form.error("tags")/>
                    <CheckboxField label="Published" bind=published/>
                </fieldset>
                <FormActions list_route=BlogDraft::COPY.list_route saving=form.saving submit_label=submit_label/>
            </form>
        </div>
    }
}
