//! Public travel guide page: category tabs over the active guides, each
//! with its quick facts, checklist and markdown body.

use leptos::prelude::*;
use records::{TravelInfo, TravelInfoCategory};

use super::use_rows;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::loading::{ErrorNotice, Loading};
use crate::components::parallax_banner::ParallaxBanner;
use crate::components::site_layout::SiteLayout;
use crate::net::use_backend;
use crate::state::filters::TravelInfoFilter;
use crate::state::listing::{RowFilter, empty_message};
use crate::util::markdown;

const BANNER_IMAGE: &str = "https://images.pexels.com/photos/1287460/pexels-photo-1287460.jpeg";

#[component]
pub fn TravelInfoPage() -> impl IntoView {
    let guides = use_rows::<TravelInfo>(use_backend(), Some(("active", "true")));
    let filter = RwSignal::new(TravelInfoFilter::default());

    let tab = move |category: Option<TravelInfoCategory>, label: &'static str| {
        view! {
            <button
                class="chip"
                class:chip--active=move || filter.with(|f| f.category == category)
                on:click=move |_| filter.update(|f| f.category = category)
            >
                {label}
            </button>
        }
    };

    view! {
        <SiteLayout>
            <ParallaxBanner title="Travel Information" subtitle="Everything to know before you go" image=BANNER_IMAGE/>
            <div class="travel-info-page">
                <Breadcrumbs/>
                <nav class="travel-info-page__tabs">
                    {tab(None, "All")}
                    {TravelInfoCategory::ALL.iter().map(|c| tab(Some(*c), c.label())).collect_view()}
                </nav>
                {move || match guides.get() {
                    None => view! { <Loading label="Loading travel information..."/> }.into_any(),
                    Some(Err(e)) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                    Some(Ok(rows)) => {
                        let total = rows.len();
                        let visible: Vec<_> = filter.with(|f| rows.into_iter().filter(|g| f.matches(g)).collect());
                        if visible.is_empty() {
                            return view! { <p class="travel-info-page__empty">{empty_message(total, "guides")}</p> }
                                .into_any();
                        }
                        visible.into_iter().map(|guide| view! { <Guide guide=guide/> }).collect_view().into_any()
                    }
                }}
            </div>
        </SiteLayout>
    }
}

#[component]
fn Guide(guide: TravelInfo) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let html = markdown::to_html(&guide.content);
    let checklist: Vec<String> = guide
        .checklist_items
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .collect();

    view! {
        <article class="guide" class:guide--featured=guide.featured>
            <header class="guide__header">
                <span class="guide__category">{guide.category.label()}</span>
                <h2 class="guide__title">{guide.title}</h2>
                <p class="guide__excerpt">{guide.excerpt}</p>
            </header>
            <ul class="guide__facts">
                {guide
                    .quick_facts
                    .into_iter()
                    .map(|fact| {
                        view! {
                            <li class="guide__fact">
                                <span class="guide__fact-label">{fact.label}</span>
                                <span class="guide__fact-value">{fact.value}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            {(!checklist.is_empty())
                .then(|| {
                    view! {
                        <section class="guide__checklist">
                            <h3>"Checklist"</h3>
                            <ul>
                                {checklist
                                    .into_iter()
                                    .map(|item| view! { <li><label><input type="checkbox"/>{item}</label></li> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })}
            <button class="btn btn--link" on:click=move |_| expanded.update(|open| *open = !*open)>
                {move || if expanded.get() { "Show less" } else { "Read more" }}
            </button>
            <Show when=move || expanded.get()>
                <div class="guide__content" inner_html=html.clone()></div>
            </Show>
        </article>
    }
}
