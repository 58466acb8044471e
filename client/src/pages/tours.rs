//! Public tour listing and tour detail pages.
//!
//! `/tours` and `/tours/:category` share [`ToursPage`]; the route segment
//! picks the category and the search box narrows within it. Category chips
//! navigate rather than filter in place so the URL always names the view.

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use records::{TourCategory, TourPackage};

use super::use_rows;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::loading::{ErrorNotice, Loading};
use crate::components::parallax_banner::ParallaxBanner;
use crate::components::site_layout::SiteLayout;
use crate::components::tour_card::TourCard;
use crate::net::{BackendError, fetch_where, use_backend};
use crate::state::fetch::use_fetch;
use crate::state::filters::PublicTourFilter;
use crate::state::listing::{RowFilter, empty_message};
use crate::util::format;

const BANNER_IMAGE: &str = "https://images.pexels.com/photos/631292/pexels-photo-631292.jpeg";

#[component]
pub fn ToursPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let tours = use_rows::<TourPackage>(use_backend(), Some(("active", "true")));
    let search = RwSignal::new(String::new());

    let filter = Memo::new(move |_| {
        let mut filter = PublicTourFilter::for_segment(params.with(|p| p.get("category")).as_deref());
        filter.search = search.get();
        filter
    });
    let heading = move || filter.with(|f| f.category.map_or("All Tours", TourCategory::label));
    let guests = move || query.with(|q| q.get("guests")).filter(|g| g != "1" && !g.is_empty());

    view! {
        <SiteLayout>
            <ParallaxBanner title="Our Tours" subtitle="Safaris, mountain treks and day trips" image=BANNER_IMAGE/>
            <div class="tours-page">
                <Breadcrumbs/>
                <nav class="tours-page__chips">
                    <a class="chip" class:chip--active=move || filter.with(|f| f.category.is_none()) href="/tours">
                        "All"
                    </a>
                    {TourCategory::ALL
                        .iter()
                        .map(|category| {
                            let category = *category;
                            view! {
                                <a
                                    class="chip"
                                    class:chip--active=move || filter.with(|f| f.category == Some(category))
                                    href=format!("/tours/{category}")
                                >
                                    {category.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="tours-page__toolbar">
                    <h2 class="tours-page__heading">{heading}</h2>
                    <input
                        class="tours-page__search"
                        type="search"
                        placeholder="Search tours..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                {move || guests().map(|g| view! { <p class="tours-page__note">{format!("Showing tours for {g} guests")}</p> })}
                {move || match tours.get() {
                    None => view! { <Loading label="Loading tours..."/> }.into_any(),
                    Some(Err(e)) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                    Some(Ok(rows)) => {
                        let total = rows.len();
                        let visible: Vec<_> = filter.with(|f| rows.into_iter().filter(|t| f.matches(t)).collect());
                        if visible.is_empty() {
                            view! { <p class="tours-page__empty">{empty_message(total, "tours")}</p> }.into_any()
                        } else {
                            view! {
                                <div class="tours-page__grid">
                                    {visible.into_iter().map(|tour| view! { <TourCard tour=tour/> }).collect_view()}
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

/// `/tours/:category/:slug`.
#[component]
pub fn TourDetailPage() -> impl IntoView {
    let backend = use_backend();
    let params = use_params_map();
    let tour = use_fetch(
        move || params.with(|p| p.get("slug")).unwrap_or_default(),
        move |slug: String| {
            let backend = backend.clone();
            async move {
                let rows = fetch_where::<TourPackage>(backend.as_ref(), "slug", &slug).await?;
                rows.into_iter()
                    .next()
                    .ok_or_else(|| BackendError::Status { status: 404, message: "Tour not found".to_owned() })
            }
        },
    );

    view! {
        <SiteLayout>
            {move || {
                let state = tour.get();
                if state.is_loading {
                    return view! { <Loading label="Loading tour..."/> }.into_any();
                }
                match state.data {
                    Some(tour) => view! { <TourDetail tour=tour/> }.into_any(),
                    None => view! { <ErrorNotice message=state.error.unwrap_or_default()/> }.into_any(),
                }
            }}
        </SiteLayout>
    }
}

#[component]
fn TourDetail(tour: TourPackage) -> impl IntoView {
    let cover = tour.cover_image().unwrap_or(BANNER_IMAGE).to_owned();
    let facts = [
        ("Duration", format::days(tour.duration)),
        ("Difficulty", tour.difficulty.label().to_owned()),
        ("Group size", format!("{}-{} people", tour.min_participants, tour.max_participants)),
        ("Best time", tour.best_time.clone()),
        ("Price", format!("{} / {}", format::usd(tour.price_usd), format::money(tour.price_tzs, "TZS"))),
    ];

    view! {
        <ParallaxBanner title=tour.title.clone() subtitle=tour.category.label() image=cover/>
        <article class="tour-detail">
            <Breadcrumbs/>
            <dl class="tour-detail__facts">
                {facts
                    .into_iter()
                    .filter(|(_, value)| !value.is_empty())
                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                    .collect_view()}
            </dl>
            <p class="tour-detail__description">{tour.description}</p>
            <section class="tour-detail__itinerary">
                <h2>"Itinerary"</h2>
                {tour
                    .itinerary
                    .into_iter()
                    .map(|day| {
                        view! {
                            <div class="itinerary-day">
                                <h3 class="itinerary-day__title">{format!("Day {}: {}", day.day, day.title)}</h3>
                                <p>{day.description}</p>
                                <ul class="itinerary-day__activities">
                                    {day.activities.into_iter().map(|a| view! { <li>{a}</li> }).collect_view()}
                                </ul>
                                {(!day.accommodation.is_empty())
                                    .then(|| view! { <p class="itinerary-day__stay">{format!("Stay: {}", day.accommodation)}</p> })}
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <div class="tour-detail__lists">
                <EntryList title="Included" entries=tour.includes/>
                <EntryList title="Not Included" entries=tour.excludes/>
                <EntryList title="Requirements" entries=tour.requirements/>
            </div>
            <div class="tour-detail__gallery">
                {tour
                    .images
                    .into_iter()
                    .skip(1)
                    .map(|src| view! { <img class="tour-detail__image" src=src loading="lazy"/> })
                    .collect_view()}
            </div>
        </article>
    }
}

/// Titled bullet list; blank entries are skipped and an empty list renders
/// nothing.
#[component]
pub(crate) fn EntryList(title: &'static str, entries: Vec<String>) -> impl IntoView {
    let entries: Vec<String> = entries.into_iter().filter(|e| !e.trim().is_empty()).collect();
    (!entries.is_empty()).then(|| {
        view! {
            <section class="entry-list">
                <h3 class="entry-list__title">{title}</h3>
                <ul>{entries.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}</ul>
            </section>
        }
    })
}
