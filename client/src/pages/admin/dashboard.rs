//! `/admin/dashboard`: headline totals, items needing attention and quick
//! links.
//!
//! A partial failure keeps the stats that loaded and lists the sources that
//! did not; only a complete failure replaces the page with an error.

use leptos::prelude::*;

use super::{ScreenHeader, retry};
use crate::components::loading::{ErrorNotice, Loading};
use crate::components::stat_card::StatCard;
use crate::net::{BackendError, use_backend};
use crate::state::dashboard::{self, DashboardReport, FATAL_MESSAGE, QUICK_ACTIONS, WARNING_HEADING};
use crate::state::fetch::use_fetch;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let backend = use_backend();
    let reload = RwSignal::new(0_u32);
    let report = use_fetch(
        move || reload.get(),
        move |_| {
            let backend = backend.clone();
            async move { Ok::<_, BackendError>(dashboard::load(backend.as_ref()).await) }
        },
    );
    let on_retry = retry(reload);

    view! {
        <div class="admin-screen dashboard">
            <ScreenHeader title="Dashboard"/>
            {move || {
                let state = report.get();
                if state.is_loading {
                    return view! { <Loading label="Loading dashboard..."/> }.into_any();
                }
                match state.data {
                    Some(report) if !report.is_fatal() => {
                        view! { <Overview report=report on_refresh=on_retry/> }.into_any()
                    }
                    _ => view! { <ErrorNotice message=FATAL_MESSAGE on_retry=on_retry/> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn Overview(report: DashboardReport, on_refresh: Callback<()>) -> impl IntoView {
    let warnings = report.warnings();

    view! {
        {(!warnings.is_empty())
            .then(|| {
                view! {
                    <div class="dashboard__warnings" role="alert">
                        <p class="dashboard__warnings-heading">{WARNING_HEADING}</p>
                        <ul>{warnings.into_iter().map(|w| view! { <li>{w}</li> }).collect_view()}</ul>
                        <button class="btn btn--small" on:click=move |_| on_refresh.run(())>"Refresh"</button>
                    </div>
                }
            })}
        <section class="dashboard__section">
            <div class="dashboard__grid">
                {report.stats.totals().into_iter().map(|stat| view! { <StatCard stat=stat/> }).collect_view()}
            </div>
        </section>
        <section class="dashboard__section">
            <h2 class="dashboard__heading">"Needs Attention"</h2>
            <div class="dashboard__grid">
                {report
                    .stats
                    .attention()
                    .into_iter()
                    .map(|stat| {
                        let highlight = stat.value != "0";
                        view! { <StatCard stat=stat highlight=highlight/> }
                    })
                    .collect_view()}
            </div>
        </section>
        <section class="dashboard__section">
            <h2 class="dashboard__heading">"Quick Actions"</h2>
            <div class="dashboard__actions">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(|(label, href)| view! { <a class="btn btn--primary" href=href>{label}</a> })
                    .collect_view()}
            </div>
        </section>
    }
}
