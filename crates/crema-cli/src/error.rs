//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Session/authentication error.
    #[error(transparent)]
    Session(#[from] crema_session::SessionError),

    /// API client error.
    #[error(transparent)]
    Client(#[from] crema_client::ClientError),

    /// Local cache error.
    #[error("cache error: {0}")]
    Cache(#[from] crema_cache::CacheError),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
