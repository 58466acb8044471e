//! Public destination listing with category chips, and the destination
//! detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::{Destination, DestinationCategory};

use super::tours::EntryList;
use super::use_rows;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::destination_card::DestinationCard;
use crate::components::loading::{ErrorNotice, Loading};
use crate::components::parallax_banner::ParallaxBanner;
use crate::components::site_layout::SiteLayout;
use crate::net::{BackendError, fetch_where, use_backend};
use crate::state::fetch::use_fetch;
use crate::state::filters::{ALL, DestinationFilter};
use crate::state::listing::{RowFilter, empty_message};

const BANNER_IMAGE: &str = "https://images.pexels.com/photos/1054655/pexels-photo-1054655.jpeg";

#[component]
pub fn DestinationsPage() -> impl IntoView {
    let destinations = use_rows::<Destination>(use_backend(), Some(("active", "true")));
    let filter = RwSignal::new(DestinationFilter::default());

    let chip = move |value: &'static str, label: &'static str| {
        let selected = move || filter.with(|f| f.category.as_deref().unwrap_or(ALL) == value);
        view! {
            <button
                class="chip"
                class:chip--active=selected
                on:click=move |_| {
                    filter.update(|f| f.category = (value != ALL).then(|| value.to_owned()));
                }
            >
                {label}
            </button>
        }
    };

    view! {
        <SiteLayout>
            <ParallaxBanner title="Destinations" subtitle="Parks, peaks and coastlines of Tanzania" image=BANNER_IMAGE/>
            <div class="destinations-page">
                <Breadcrumbs/>
                <nav class="destinations-page__chips">
                    {chip(ALL, "All")}
                    {DestinationCategory::ALL.iter().map(|c| chip(c.as_str(), c.label())).collect_view()}
                </nav>
                <input
                    class="destinations-page__search"
                    type="search"
                    placeholder="Search destinations..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                {move || match destinations.get() {
                    None => view! { <Loading label="Loading destinations..."/> }.into_any(),
                    Some(Err(e)) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                    Some(Ok(rows)) => {
                        let total = rows.len();
                        let visible: Vec<_> = filter.with(|f| rows.into_iter().filter(|d| f.matches(d)).collect());
                        if visible.is_empty() {
                            view! { <p class="destinations-page__empty">{empty_message(total, "destinations")}</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="destinations-page__grid">
                                    {visible
                                        .into_iter()
                                        .map(|destination| view! { <DestinationCard destination=destination/> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    }
                }}
            </div>
        </SiteLayout>
    }
}

/// `/destinations/:slug`.
#[component]
pub fn DestinationDetailPage() -> impl IntoView {
    let backend = use_backend();
    let params = use_params_map();
    let destination = use_fetch(
        move || params.with(|p| p.get("slug")).unwrap_or_default(),
        move |slug: String| {
            let backend = backend.clone();
            async move {
                fetch_where::<Destination>(backend.as_ref(), "slug", &slug)
                    .await?
                    .into_iter()
                    .next()
                    .ok_or_else(|| BackendError::Status {
                        status: 404,
                        message: "Destination not found".to_owned(),
                    })
            }
        },
    );

    view! {
        <SiteLayout>
            {move || {
                let state = destination.get();
                if state.is_loading {
                    return view! { <Loading/> }.into_any();
                }
                match state.data {
                    Some(destination) => view! { <DestinationDetail destination=destination/> }.into_any(),
                    None => view! { <ErrorNotice message=state.error.unwrap_or_default()/> }.into_any(),
                }
            }}
        </SiteLayout>
    }
}

#[component]
fn DestinationDetail(destination: Destination) -> impl IntoView {
    let category = destination.category_label();
    let location = [destination.location.district.as_str(), destination.location.region.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <ParallaxBanner title=destination.name.clone() subtitle=category image=destination.featured_image.clone()/>
        <article class="destination-detail">
            <Breadcrumbs/>
            <dl class="destination-detail__facts">
                <dt>"Location"</dt>
                <dd>{location}</dd>
                <dt>"Best time to visit"</dt>
                <dd>{destination.best_time_to_visit}</dd>
                <dt>"Recommended stay"</dt>
                <dd>{destination.duration_recommended}</dd>
                <dt>"Difficulty"</dt>
                <dd>{destination.difficulty_level.label()}</dd>
            </dl>
            <p class="destination-detail__description">{destination.description}</p>
            <div class="destination-detail__lists">
                <EntryList title="Highlights" entries=destination.highlights/>
                <EntryList title="Activities" entries=destination.activities/>
                <EntryList title="Entry Requirements" entries=destination.entry_requirements/>
                <EntryList title="Where to Stay" entries=destination.accommodation_options/>
                <EntryList title="Getting There" entries=destination.transportation/>
            </div>
            <div class="destination-detail__gallery">
                {destination
                    .images
                    .into_iter()
                    .map(|src| view! { <img class="destination-detail__image" src=src loading="lazy"/> })
                    .collect_view()}
            </div>
        </article>
    }
}
