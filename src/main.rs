//! Airline Operations API
//!
//! JSON endpoints for listing and creating flights, aircraft and crew
//! members stored in PostgreSQL. Each request opens its own connection,
//! runs one statement and closes the connection again.

mod config;
mod db;
mod error;
mod models;
mod repository;
mod routes;
mod state;

use crate::config::Settings;
use crate::db::{ConnectionFactory, PgRepository};
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Airline Operations API...");

    let settings = Settings::load()?;
    info!(
        "Configuration loaded (database {}@{}:{}/{}, TLS: {})",
        settings.database.user,
        settings.database.host,
        settings.database.port,
        settings.database.database,
        settings.database.require_tls
    );

    let connections = ConnectionFactory::new(&settings.database);

    // Requests connect on their own, so an unreachable database is not fatal here
    match connections.ping().await {
        Ok(()) => info!("Database reachable"),
        Err(e) => warn!("Database not reachable at startup: {}", e),
    }

    let repository = Arc::new(PgRepository::new(connections));
    let state = Arc::new(AppState::new(repository));

    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("Server listening on http://{}", addr);
    info!("API Endpoints:");
    info!("   GET  /                - Dashboard");
    info!("   GET  /health          - Health check");
    info!("   GET  /api/flights     - List flights");
    info!("   POST /api/flights     - Add a flight");
    info!("   GET  /api/aircraft    - List aircraft");
    info!("   POST /api/aircraft    - Add an aircraft");
    info!("   GET  /api/crew        - List crew members");
    info!("   POST /api/crew        - Add a crew member");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging.
///
/// `LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,airline_ops_api=debug,tower_http=debug"));

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(fmt::layer().json().with_current_span(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .compact(),
            )
            .init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        },
    }
}
