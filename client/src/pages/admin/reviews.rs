//! `/admin/reviews`: review moderation with verify and delete.

use leptos::prelude::*;
use records::{Record, Review};

use super::{RowActions, ScreenHeader, placeholder, retry, run_action};
use crate::components::status_badge::{StatusBadge, flag_tone};
use crate::components::table_toolbar::{FlagCheckbox, SearchInput, ShowingCount};
use crate::net::{SharedBackend, use_backend};
use crate::state::actions::set_verified;
use crate::state::filters::ReviewFilter;
use crate::state::listing::{ListState, RowFilter, use_list};
use crate::util::format;

fn flip_verified(backend: SharedBackend, list: RwSignal<ListState<Review>>, review: Review) {
    let id = review.id;
    let verified = !review.verified;
    let action = if verified { "verify review" } else { "unverify review" };
    run_action(
        list,
        action.to_owned(),
        async move { set_verified(backend.as_ref(), &review, verified).await },
        move |state, verified| {
            state.patch(id, |r| r.verified = verified);
        },
    );
}

#[component]
pub fn AdminReviewsPage() -> impl IntoView {
    let backend = use_backend();
    let reload = RwSignal::new(0_u32);
    let list = use_list::<Review>(backend.clone(), reload);
    let filter = RwSignal::new(ReviewFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "reviews", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Review"</th>
                        <th>"User"</th>
                        <th>"Tour"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|review| {
                            let id = review.id();
                            let backend = backend.clone();
                            let stars = format::stars(review.stars());
                            let title = review.title.clone();
                            let content = review.content.clone();
                            let reviewer = review.reviewer_name().to_owned();
                            let tour = review.tour_title().to_owned();
                            let verified = review.verified;
                            view! {
                                <tr>
                                    <td>
                                        <span class="admin-table__stars">{stars}</span>
                                        <span class="admin-table__title">{title}</span>
                                        <p class="admin-table__excerpt">{content}</p>
                                    </td>
                                    <td>{reviewer}</td>
                                    <td>{tour}</td>
                                    <td>
                                        <StatusBadge
                                            label=if verified { "Verified" } else { "Pending" }
                                            tone=flag_tone(verified)
                                        />
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| flip_verified(backend.clone(), list, review.clone())
                                        >
                                            {if verified { "Unverify" } else { "Verify" }}
                                        </button>
                                    </td>
                                    <RowActions list=list id=id noun="review"/>
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
            <ScreenHeader title="Reviews"/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search reviews..."
                />
                <FlagCheckbox
                    label="Awaiting verification only"
                    checked=Signal::derive(move || filter.with(|f| f.unverified_only))
                    on_toggle=Callback::new(move |on| filter.update(|f| f.unverified_only = on))
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="reviews"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
