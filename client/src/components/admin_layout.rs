//! Admin console chrome: sidebar navigation around the routed screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/admin/*` route except the login page renders inside this layout.
//! It installs the admin guard on mount and withholds the outlet until the
//! role check allows access, so no admin screen fetches data for a visitor.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::loading::Loading;
use crate::net::use_backend;
use crate::state::auth::{self, AdminGate};
use crate::util::auth::{ADMIN_LOGIN, install_admin_guard};

pub const ADMIN_NAV: [(&str, &str); 10] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/tours", "Tours"),
    ("/admin/blog", "Blog"),
    ("/admin/destinations", "Destinations"),
    ("/admin/travel-info", "Travel Info"),
    ("/admin/bookings", "Bookings"),
    ("/admin/reviews", "Reviews"),
    ("/admin/inquiries", "Inquiries"),
    ("/admin/users", "Users"),
    ("/admin/settings", "Settings"),
];

/// Whether the nav entry `href` is the current section.
#[must_use]
pub fn is_active_section(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let backend = use_backend();
    let gate = RwSignal::new(AdminGate::Checking);
    let navigate = use_navigate();
    let location = use_location();

    install_admin_guard(backend.clone(), gate, navigate.clone());

    let on_sign_out = move |_| {
        let backend = backend.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            auth::sign_out(backend.as_ref()).await;
            navigate(ADMIN_LOGIN, leptos_router::NavigateOptions::default());
        });
    };

    view! {
        <Show
            when=move || gate.get() == AdminGate::Allowed
            fallback=|| view! { <Loading label="Checking access..."/> }
        >
            <div class="admin-layout">
                <aside class="admin-layout__sidebar">
                    <a class="admin-layout__brand" href="/admin/dashboard">"Karibu Admin"</a>
                    <nav class="admin-layout__nav">
                        {ADMIN_NAV
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        class="admin-layout__link"
                                        class:admin-layout__link--active=move || {
                                            is_active_section(&location.pathname.get(), href)
                                        }
                                        href=href
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <a class="admin-layout__link" href="/">"View Site"</a>
                </aside>
                <div class="admin-layout__main">
                    <header class="admin-layout__header">
                        <Breadcrumbs/>
                        <button class="btn admin-layout__sign-out" on:click=on_sign_out.clone()>
                            "Sign Out"
                        </button>
                    </header>
                    <section class="admin-layout__content">
                        <Outlet/>
                    </section>
                </div>
            </div>
        </Show>
    }
}
