//! Breadcrumb trail for the current route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::breadcrumbs::trail;

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();
    let crumbs = move || trail(&location.pathname.get());

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <a class="breadcrumbs__link" href="/">"Home"</a>
            {move || {
                let crumbs = crumbs();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        view! {
                            <span class="breadcrumbs__sep" aria-hidden="true">"/"</span>
                            {if i == last {
                                view! { <span class="breadcrumbs__current">{crumb.label}</span> }.into_any()
                            } else {
                                view! { <a class="breadcrumbs__link" href=crumb.path>{crumb.label}</a> }.into_any()
                            }}
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
