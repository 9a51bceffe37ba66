use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to initialize telemetry: {0}")]
    TelemetryError(String),
    #[error("Failed to start server: {0}")]
    ServerError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
