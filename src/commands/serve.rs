//! Serve command - Starts the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use common::{AppError, AppResult};

use crate::api::{create_router_with_timeout, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::infra::Database;

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    let service = config.server.service_name.clone();
    tracing::info!(%service, "Starting server...");

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Connect and bring the schema up to date
    let db = Arc::new(Database::connect(&config.database).await?);

    let app_state = AppState::from_database(db);
    let app = create_router_with_timeout(
        app_state,
        Duration::from_secs(config.server.request_timeout_seconds),
    );

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!(%service, "Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!(%service, "Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
