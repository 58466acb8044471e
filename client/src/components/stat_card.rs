//! Dashboard tile linking to the screen behind a number.

use leptos::prelude::*;

use crate::state::dashboard::StatCard as Stat;

#[component]
pub fn StatCard(stat: Stat, #[prop(optional)] highlight: bool) -> impl IntoView {
    view! {
        <a class="stat-card" class:stat-card--highlight=highlight href=stat.href>
            <span class="stat-card__name">{stat.name}</span>
            <span class="stat-card__value">{stat.value}</span>
        </a>
    }
}
