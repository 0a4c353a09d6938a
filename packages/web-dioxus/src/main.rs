//! Noor Academy - Dioxus Fullstack Web Application
//!
//! Public marketing site and admin back-office, rendered on the server and
//! hydrated in the browser. All data comes from the academy REST API.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod auth;
mod components;
mod pages;
mod routes;
mod server_fns;

#[cfg(feature = "server")]
mod backend;

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use dioxus::prelude::*;
    use tower_http::trace::TraceLayer;
    use tower_sessions::{MemoryStore, SessionManagerLayer};
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,academy_core=debug,web_dioxus=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = academy_core::Config::from_env().context("Failed to load configuration")?;
    tracing::info!(api_url = %config.api_url, "Starting Noor Academy web app");
    backend::init(config);

    let sessions = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    let serve_config = ServeConfig::new()
        .map_err(|e| anyhow::anyhow!("Failed to load index.html: {e}"))?;

    let router = axum::Router::new()
        .serve_dioxus_application(serve_config, app::App)
        .layer(sessions)
        .layer(TraceLayer::new_for_http());

    let address = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .context("Failed to bind address")?;
    tracing::info!("Listening on http://{}", address);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(app::App);
}
