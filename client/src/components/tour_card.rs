//! Tour summary card used by listings and the home page.

use leptos::prelude::*;
use records::TourPackage;

use crate::util::format;

const IMAGE_FALLBACK: &str = "https://images.pexels.com/photos/631292/pexels-photo-631292.jpeg";

#[component]
pub fn TourCard(tour: TourPackage) -> impl IntoView {
    let image = tour.cover_image().unwrap_or(IMAGE_FALLBACK).to_owned();
    let href = tour.href();
    let blurb = tour.blurb();

    view! {
        <a class="tour-card" class:tour-card--featured=tour.featured href=href>
            <img class="tour-card__image" src=image alt=tour.title.clone() loading="lazy"/>
            <div class="tour-card__body">
                <span class="tour-card__category">{tour.category.label()}</span>
                <h3 class="tour-card__title">{tour.title.clone()}</h3>
                <p class="tour-card__blurb">{blurb}</p>
                <div class="tour-card__meta">
                    <span>{format::days(tour.duration)}</span>
                    <span>{tour.difficulty.label()}</span>
                    <span class="tour-card__price">{format!("From {}", format::usd(tour.price_usd))}</span>
                </div>
            </div>
        </a>
    }
}
