//! # server
//!
//! Axum host for the Karibu Safariz site: server-side renders the Leptos
//! app and serves its compiled assets.

mod config;
mod routes;

use leptos::prelude::get_configuration;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let server = config::ServerConfig::from_env()?;
    let leptos = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let mut leptos_options = leptos.leptos_options;
    if let Some(root) = &server.site_root {
        leptos_options.site_root = root.as_str().into();
    }
    let app = routes::app(leptos_options);

    let addr = server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "karibu-safariz listening");
    axum::serve(listener, app).await?;
    Ok(())
}
