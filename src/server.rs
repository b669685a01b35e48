//! HTTP server initialization and runtime setup.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Binds `0.0.0.0:<PORT>` and serves until SIGINT.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the listener cannot be
/// bound, or the server runtime fails.
pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = config.listen_addr().parse()?;

    let state = AppState::new(Arc::new(config));
    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install SIGINT handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
