//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment, WildcardSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::site_layout::SiteLayout;
use crate::pages::admin::{
    blog::AdminBlogPage, blog_form::BlogFormPage, bookings::AdminBookingsPage, dashboard::DashboardPage,
    destination_form::DestinationFormPage, destinations::AdminDestinationsPage, inquiries::AdminInquiriesPage,
    login::AdminLoginPage, reviews::AdminReviewsPage, settings::AdminSettingsPage, tour_form::TourFormPage,
    tours::AdminToursPage, travel_info::AdminTravelInfoPage, travel_info_form::TravelInfoFormPage,
    users::AdminUsersPage,
};
use crate::pages::{
    blog::{BlogPage, BlogPostPage},
    destinations::{DestinationDetailPage, DestinationsPage},
    forgot_password::ForgotPasswordPage,
    home::HomePage,
    login::LoginPage,
    reset_password::ResetPasswordPage,
    tours::{TourDetailPage, ToursPage},
    travel_info::TravelInfoPage,
};

const DASHBOARD: &str = "/admin/dashboard";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <SiteLayout>
            <div class="not-found">
                <p>"Page not found."</p>
                <a class="btn btn--primary" href="/">"Back to Home"</a>
            </div>
        </SiteLayout>
    }
}

/// Root application component.
///
/// Provides the shared backend handle and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::net::default_backend());

    view! {
        <Stylesheet id="leptos" href="/pkg/karibu-safariz.css"/>
        <Title text="Karibu Safariz"/>

        <Router>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("tours") view=ToursPage/>
                <Route path=(StaticSegment("tours"), ParamSegment("category")) view=ToursPage/>
                <Route
                    path=(StaticSegment("tours"), ParamSegment("category"), ParamSegment("slug"))
                    view=TourDetailPage
                />
                <Route path=StaticSegment("destinations") view=DestinationsPage/>
                <Route path=(StaticSegment("destinations"), ParamSegment("slug")) view=DestinationDetailPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                <Route path=StaticSegment("travel-info") view=TravelInfoPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>

                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>

                    <Route path=StaticSegment("tours") view=AdminToursPage/>
                    <Route path=(StaticSegment("tours"), StaticSegment("new")) view=TourFormPage/>
                    <Route
                        path=(StaticSegment("tours"), StaticSegment("edit"), ParamSegment("id"))
                        view=TourFormPage
                    />

                    <Route path=StaticSegment("blog") view=AdminBlogPage/>
                    <Route path=(StaticSegment("blog"), StaticSegment("new")) view=BlogFormPage/>
                    <Route
                        path=(StaticSegment("blog"), StaticSegment("edit"), ParamSegment("id"))
                        view=BlogFormPage
                    />

                    <Route path=StaticSegment("destinations") view=AdminDestinationsPage/>
                    <Route path=(StaticSegment("destinations"), StaticSegment("new")) view=DestinationFormPage/>
                    <Route
                        path=(StaticSegment("destinations"), StaticSegment("edit"), ParamSegment("id"))
                        view=DestinationFormPage
                    />

                    <Route path=StaticSegment("travel-info") view=AdminTravelInfoPage/>
                    <Route path=(StaticSegment("travel-info"), StaticSegment("new")) view=TravelInfoFormPage/>
                    <Route
                        path=(StaticSegment("travel-info"), StaticSegment("edit"), ParamSegment("id"))
                        view=TravelInfoFormPage
                    />

                    <Route path=StaticSegment("bookings") view=AdminBookingsPage/>
                    <Route path=StaticSegment("reviews") view=AdminReviewsPage/>
                    <Route path=StaticSegment("inquiries") view=AdminInquiriesPage/>
                    <Route path=StaticSegment("users") view=AdminUsersPage/>
                    <Route path=StaticSegment("settings") view=AdminSettingsPage/>
                    <Route path=WildcardSegment("rest") view=|| view! { <Redirect path=DASHBOARD/> }/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
