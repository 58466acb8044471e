//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site has no API of its own: every read and write goes from the WASM
//! bundle straight to the hosted backend. This router only renders the
//! Leptos pages, serves the compiled `/pkg` assets and answers health checks.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Operational routes that do not touch the Leptos app.
pub fn ops_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR pages + static assets + ops routes, wrapped in request tracing.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    ops_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
