//! Home page: hero slider with trip search, then the showcase sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hero, deals, special trips and gallery each read the tour collection
//! independently, popular locations reads destinations and testimonials read
//! verified reviews, so one failing section never blanks the others. Slicing
//! and fallbacks live in `state::showcase` and `state::hero`. Sections below
//! the hero reveal themselves as they scroll into view.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::{Destination, Review, TourPackage};

use super::{Rows, use_rows};
use crate::components::animated_section::AnimatedSection;
use crate::components::cta_banner::CtaBanner;
use crate::components::hero_slider::HeroSliderView;
use crate::components::loading::Loading;
use crate::components::site_layout::SiteLayout;
use crate::components::trust_badges::TrustBadges;
use crate::net::use_backend;
use crate::state::filters::{ALL, choice};
use crate::state::hero::{Slide, slides_from_tours};
use crate::state::showcase::{
    GalleryImage, HEADLINE_STATS, TESTIMONIAL_SOURCE, TripSearch, deals, destination_options, gallery,
    popular_locations, special_trips, testimonials,
};
use crate::util::format;
use crate::util::reveal::Reveal;

const ACTIVE: Option<(&str, &str)> = Some(("active", "true"));
const CTA_IMAGE: &str =
    "https://images.pexels.com/photos/1670732/pexels-photo-1670732.jpeg?auto=compress&cs=tinysrgb&w=1920&h=1080&fit=crop";

#[component]
pub fn HomePage() -> impl IntoView {
    let backend = use_backend();
    let hero_tours = use_rows::<TourPackage>(backend.clone(), ACTIVE);
    let search_tours = use_rows::<TourPackage>(backend.clone(), ACTIVE);
    let destinations = use_rows::<Destination>(backend.clone(), ACTIVE);
    let deal_tours = use_rows::<TourPackage>(backend.clone(), ACTIVE);
    let trip_tours = use_rows::<TourPackage>(backend.clone(), ACTIVE);
    let gallery_tours = use_rows::<TourPackage>(backend.clone(), ACTIVE);
    let reviews = use_rows::<Review>(backend, Some(("verified", "true")));
    let slides = Signal::derive(move || {
        hero_tours
            .get()
            .map_or_else(|| vec![Slide::welcome()], |result| slides_from_tours(&result))
    });

    view! {
        <SiteLayout>
            <div class="home-page">
                <div class="home-page__hero">
                    <HeroSliderView slides=slides/>
                    <TripSearchForm tours=search_tours/>
                </div>
                <AnimatedSection animation=Reveal::Fade>
                    <TrustBadges/>
                </AnimatedSection>
                <AnimatedSection animation=Reveal::SlideUp>
                    <PopularLocations destinations=destinations/>
                </AnimatedSection>
                <AnimatedSection animation=Reveal::SlideUp delay=100>
                    <LastMinuteDeals tours=deal_tours/>
                </AnimatedSection>
                <AnimatedSection animation=Reveal::SlideUp delay=100>
                    <SpecialTrips tours=trip_tours/>
                </AnimatedSection>
                <AnimatedSection animation=Reveal::Fade>
                    <Gallery tours=gallery_tours/>
                </AnimatedSection>
                <AnimatedSection animation=Reveal::Scale class="home-section">
                    <CtaBanner
                        title="Ready for your Next Adventure"
                        subtitle="Book now and start your unforgettable journey"
                        image=CTA_IMAGE
                    />
                </AnimatedSection>
                <AnimatedSection animation=Reveal::SlideUp>
                    <Testimonials reviews=reviews/>
                </AnimatedSection>
            </div>
        </SiteLayout>
    }
}

#[component]
fn TripSearchForm(tours: Rows<TourPackage>) -> impl IntoView {
    let search = RwSignal::new(TripSearch::default());
    let navigate = use_navigate();
    let options = move || tours.get().map(|result| destination_options(&result)).unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&search.get_untracked().href(), NavigateOptions::default());
    };

    view! {
        <form class="trip-search" on:submit=on_submit>
            <label class="trip-search__field">
                "Destination"
                <select on:change=move |ev| search.update(|s| s.destination = choice(&event_target_value(&ev)))>
                    <option value=ALL>"Any destination"</option>
                    {move || {
                        options()
                            .into_iter()
                            .map(|opt| view! { <option value=opt.value.to_string()>{opt.label}</option> })
                            .collect_view()
                    }}
                </select>
            </label>
            <label class="trip-search__field">
                "Check in"
                <input
                    type="date"
                    prop:value=move || search.with(|s| s.check_in.clone())
                    on:input=move |ev| search.update(|s| s.check_in = event_target_value(&ev))
                />
            </label>
            <label class="trip-search__field">
                "Check out"
                <input
                    type="date"
                    prop:value=move || search.with(|s| s.check_out.clone())
                    on:input=move |ev| search.update(|s| s.check_out = event_target_value(&ev))
                />
            </label>
            <label class="trip-search__field">
                "Guests"
                <input
                    type="number"
                    min="1"
                    prop:value=move || search.with(|s| s.guests.clone())
                    on:input=move |ev| search.update(|s| s.guests = event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary trip-search__submit" type="submit">"Search"</button>
        </form>
    }
}

#[component]
fn PopularLocations(destinations: Rows<Destination>) -> impl IntoView {
    view! {
        <section class="home-section popular-locations">
            <h2 class="home-section__title">"Popular Locations"</h2>
            {move || match destinations.get() {
                None => view! { <Loading/> }.into_any(),
                Some(result) => view! {
                    <div class="popular-locations__grid">
                        {popular_locations(&result)
                            .into_iter()
                            .map(|card| {
                                let href = card.href();
                                let alt = card.name.clone();
                                view! {
                                    <a class="location-card" href=href>
                                        <img class="location-card__image" src=card.image alt=alt loading="lazy"/>
                                        <span class="location-card__category">{card.category}</span>
                                        <span class="location-card__name">{card.name}</span>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn LastMinuteDeals(tours: Rows<TourPackage>) -> impl IntoView {
    let cards = move || tours.get().map(|result| deals(&result)).unwrap_or_default();

    view! {
        <Show when=move || !cards().is_empty()>
            <section class="home-section deals">
                <h2 class="home-section__title">"Last Minute Deals"</h2>
                <div class="deals__grid">
                    {move || {
                        cards()
                            .into_iter()
                            .map(|deal| {
                                let alt = deal.title.clone();
                                view! {
                                    <a class="deal-card" href=deal.href>
                                        <img class="deal-card__image" src=deal.image alt=alt loading="lazy"/>
                                        <span class="deal-card__discount">{format!("-{}%", deal.discount)}</span>
                                        <div class="deal-card__body">
                                            <span class="deal-card__location">{deal.location}</span>
                                            <h3 class="deal-card__title">{deal.title}</h3>
                                            <span class="deal-card__meta">
                                                {format!("{} · up to {} guests", format::days(deal.duration), deal.max_participants)}
                                            </span>
                                            <span class="deal-card__price">
                                                <s class="deal-card__original">{format::usd(deal.original_price)}</s>
                                                " "
                                                {format::usd(deal.price)}
                                            </span>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}

#[component]
fn SpecialTrips(tours: Rows<TourPackage>) -> impl IntoView {
    let cards = move || tours.get().map(|result| special_trips(&result)).unwrap_or_default();

    view! {
        <Show when=move || !cards().is_empty()>
            <section class="home-section special-trips">
                <h2 class="home-section__title">"Special Trips"</h2>
                <div class="special-trips__grid">
                    {move || {
                        cards()
                            .into_iter()
                            .map(|trip| {
                                view! {
                                    <a
                                        class=trip.size.class()
                                        href=trip.href
                                        style=format!("background-image: url('{}')", trip.image)
                                    >
                                        <span class="trip-card__subtitle">{trip.subtitle}</span>
                                        <span class="trip-card__title">{trip.title}</span>
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}

#[component]
fn Gallery(tours: Rows<TourPackage>) -> impl IntoView {
    view! {
        <section class="home-section gallery">
            <h2 class="home-section__title">"Gallery"</h2>
            {move || match tours.get() {
                None => view! { <Loading/> }.into_any(),
                Some(result) => view! {
                    <div class="gallery__masonry">
                        {gallery(&result)
                            .into_iter()
                            .enumerate()
                            .map(|(i, image)| {
                                view! {
                                    <figure class="gallery__tile" class:gallery__tile--large=GalleryImage::is_large(i)>
                                        <img src=image.src alt=image.alt loading="lazy"/>
                                    </figure>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn Testimonials(reviews: Rows<Review>) -> impl IntoView {
    view! {
        <section class="home-section testimonials">
            <div class="testimonials__stats">
                {HEADLINE_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="testimonials__stat">
                                <span class="testimonials__stat-value">{stat.value}</span>
                                <span class="testimonials__stat-label">{stat.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <h2 class="home-section__title">"Trusted by travelers worldwide"</h2>
            {move || match reviews.get() {
                None => view! { <Loading/> }.into_any(),
                Some(result) => view! {
                    <div class="testimonials__grid">
                        {testimonials(&result)
                            .into_iter()
                            .map(|quote| {
                                view! {
                                    <blockquote class="testimonial-card">
                                        <div class="testimonial-card__header">
                                            <span class="testimonial-card__stars">{format::stars(quote.rating)}</span>
                                            <span class="testimonial-card__source">{TESTIMONIAL_SOURCE}</span>
                                        </div>
                                        <p class="testimonial-card__text">{format!("\"{}\"", quote.text)}</p>
                                        <footer class="testimonial-card__author">
                                            {quote.author}
                                            {(!quote.tour.is_empty())
                                                .then(|| view! { <span class="testimonial-card__tour">{format!(" · {}", quote.tour)}</span> })}
                                        </footer>
                                    </blockquote>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}
