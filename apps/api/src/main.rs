mod config;
mod errors;
mod generation;
mod llm_client;
mod materials;
mod models;
mod routes;
mod sections;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::session::DraftSession;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("quill_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Quill API {}", config.version_tag);

    // Initial session from the environment; POST /api/v1/session replaces it
    let session = DraftSession::start(config.gateway_settings(None, None));
    if session.gateway.has_credential() {
        info!("Model gateway ready (model: {})", session.gateway.model());
    } else {
        warn!("GOOGLE_API_KEY is not set; start a session with an API key before generating");
    }

    let state = AppState::new(config.clone(), session);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
