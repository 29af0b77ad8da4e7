//! # Campus Coffee API
//!
//! HTTP server for campus points of sale.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Campus Coffee API Server                         │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► PosServiceImpl ───► SQLite               │
//! │                                     │                                   │
//! │                                     ▼                                   │
//! │                              OpenStreetMap API                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use campus_api::{router, ApiConfig, AppState, OsmClient};
use campus_core::PosServiceImpl;
use campus_db::{Database, DbConfig};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().context("loading configuration")?;
    init_logging(&config);

    info!("Starting Campus Coffee API server...");
    info!(
        port = config.http_port,
        database = %config.database_path,
        osm = %config.osm_api_url,
        "Configuration loaded"
    );

    // Open database (runs migrations)
    let db = Database::new(
        DbConfig::new(&config.database_path).max_connections(config.db_max_connections),
    )
    .await
    .with_context(|| format!("opening database {}", config.database_path))?;
    info!("Database ready");

    let osm = OsmClient::new(config.osm_api_url.clone(), config.osm_timeout())
        .context("building OpenStreetMap client")?;

    // Create shared state
    let service = PosServiceImpl::new(Arc::new(db.pos()), Arc::new(osm));
    let state = AppState::new(Arc::new(service)).with_database(db.clone());
    let app = router(state);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(config: &ApiConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},tower_http=debug,sqlx=warn,hyper=warn",
            config.log_level
        ))
    });

    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
