//! HTTP server initialization and runtime setup.
//!
//! Builds the rating source client, wires the router and runs the Axum
//! server until a shutdown signal arrives.

use crate::config::{Config, mask_credentials};
use crate::domain::entities::ServiceInfo;
use crate::domain::sources::RatingSource;
use crate::infrastructure::imdb::ImdbClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds application state from configuration.
///
/// # Errors
///
/// Returns an error if the rating source client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = ImdbClient::new(config.imdb_settings()?)
        .context("Failed to build rating source client")?;
    tracing::info!(
        base_url = %mask_credentials(client.base_url().as_str()),
        "Rating source client ready"
    );

    let source: Arc<dyn RatingSource> = Arc::new(client);
    Ok(AppState::new(source, ServiceInfo::new(config.platform.clone())))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Rating source HTTP client (connection pool, timeout, headers)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The rating source client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
