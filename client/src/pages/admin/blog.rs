//! `/admin/blog`: post table with category and published filters and a
//! publish/unpublish toggle.

use leptos::prelude::*;
use records::{BLOG_CATEGORIES, BlogPost, Record};

use super::{RowActions, ScreenHeader, placeholder, retry, run_action};
use crate::components::status_badge::{StatusBadge, flag_tone};
use crate::components::table_toolbar::{FilterSelect, FlagCheckbox, SearchInput, ShowingCount};
use crate::net::{SharedBackend, use_backend};
use crate::state::actions::set_published;
use crate::state::filters::{ALL, BlogFilter};
use crate::state::listing::{ListState, RowFilter, use_list};
use crate::util::browser::now_iso;
use crate::util::format;

fn toggle_published(backend: SharedBackend, list: RwSignal<ListState<BlogPost>>, post: BlogPost) {
    let id = post.id;
    let action = if post.published { "unpublish post" } else { "publish post" };
    run_action(
        list,
        action.to_owned(),
        async move { set_published(backend.as_ref(), &post, &now_iso()).await },
        move |state, publication| {
            state.patch(id, |p| publication.apply(p));
        },
    );
}

#[component]
pub fn AdminBlogPage() -> impl IntoView {
    let backend = use_backend();
    let reload = RwSignal::new(0_u32);
    let list = use_list::<BlogPost>(backend.clone(), reload);
    let filter = RwSignal::new(BlogFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);
    let categories: Vec<(String, String)> = BLOG_CATEGORIES
        .iter()
        .map(|c| ((*c).to_owned(), (*c).to_owned()))
        .collect();

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "blog posts", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Author"</th>
                        <th>"Status"</th>
                        <th>"Published"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|post| {
                            let id = post.id();
                            let date = format::date(post.published_date());
                            let published = post.published;
                            let title = post.title.clone();
                            let category = post.category.clone();
                            let author = post.author.clone();
                            let backend = backend.clone();
                            view! {
                                <tr>
                                    <td class="admin-table__title">{title}</td>
                                    <td>{category}</td>
                                    <td>{author}</td>
                                    <td>
                                        <button
                                            class="admin-table__toggle"
                                            on:click=move |_| toggle_published(backend.clone(), list, post.clone())
                                        >
                                            <StatusBadge
                                                label=if published { "Published" } else { "Draft" }
                                                tone=flag_tone(published)
                                            />
                                        </button>
                                    </td>
                                    <td>{date}</td>
                                    <RowActions list=list id=id noun="blog post" edit_href=format!("/admin/blog/edit/{id}")/>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="admin-screen">
            <ScreenHeader title="Blog Posts" action=("/admin/blog/new", "Write New Post")/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search posts..."
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| f.category.clone().unwrap_or_else(|| ALL.to_owned())))
                    options=categories
                    on_change=Callback::new(move |value: String| {
                        filter.update(|f| f.category = (value != ALL).then_some(value));
                    })
                    all_label="All categories"
                />
                <FlagCheckbox
                    label="Published only"
                    checked=Signal::derive(move || filter.with(|f| f.published_only))
                    on_toggle=Callback::new(move |on| filter.update(|f| f.published_only = on))
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="posts"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
