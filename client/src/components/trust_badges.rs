//! Strip of trust badges shown under the hero.

use leptos::prelude::*;

use crate::state::showcase::TRUST_BADGES;

#[component]
pub fn TrustBadges() -> impl IntoView {
    view! {
        <section class="trust-badges">
            {TRUST_BADGES
                .iter()
                .map(|badge| {
                    view! {
                        <div class="trust-badges__item">
                            <span class="trust-badges__icon" aria-hidden="true">{badge.icon}</span>
                            <h3 class="trust-badges__title">{badge.title}</h3>
                            <p class="trust-badges__description">{badge.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
