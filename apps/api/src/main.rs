mod auth;
mod config;
mod errors;
mod extract;
mod matching;
mod models;
mod registry;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillmatch API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config.clone());
    {
        let registry = state.registry.read().await;
        info!(
            "Registry ready: {} employees, {} job roles (seeded: {})",
            registry.employees().len(),
            registry.job_roles().len(),
            config.seed_demo_data
        );
    }
    info!("Match scorer: {:?}", config.scoring_mode);

    let cors = cors_layer(&config)?;
    if config.cors_allowed_origins.is_empty() {
        info!("CORS: any origin");
    } else {
        info!("CORS: {}", config.cors_allowed_origins.join(", "));
    }

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
