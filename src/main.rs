mod adapter;
mod core;
mod error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::adapter::config::AppConfig;
use crate::adapter::init::AppInitializer;
use crate::adapter::web::create_router::create_router;
use crate::error::ApplicationError;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|e| ApplicationError::TelemetryError(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ApplicationError::TelemetryError(e.to_string()))?;

    let state = AppInitializer::initialize(&config);
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| ApplicationError::ServerError(e.to_string()))?;
    tracing::info!(
        addr = config.bind_addr(),
        password_confirmation = ?config.password_confirmation(),
        "server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApplicationError::ServerError(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
