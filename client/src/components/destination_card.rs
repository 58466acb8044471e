//! Destination summary card.

use leptos::prelude::*;
use records::Destination;

#[component]
pub fn DestinationCard(destination: Destination) -> impl IntoView {
    let href = destination.href();
    let category = destination.category_label();
    let region = destination.location.region.clone();
    let summary = if destination.short_description.is_empty() {
        destination.description.chars().take(140).collect()
    } else {
        destination.short_description.clone()
    };

    view! {
        <a class="destination-card" href=href>
            <img
                class="destination-card__image"
                src=destination.featured_image.clone()
                alt=destination.name.clone()
                loading="lazy"
            />
            <div class="destination-card__body">
                <span class="destination-card__category">{category}</span>
                <h3 class="destination-card__name">{destination.name.clone()}</h3>
                <p class="destination-card__summary">{summary}</p>
                {(!region.is_empty()).then(|| view! { <span class="destination-card__region">{region}</span> })}
            </div>
        </a>
    }
}
