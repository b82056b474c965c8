//! Client error types.

use thiserror::Error;

use crema_core::FieldError;

/// Client error type.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The access token was missing, expired, or rejected.
    #[error("unauthorized")]
    Unauthorized,

    /// The server rate-limited the request, and one retry did not help.
    #[error("too many requests, try again later")]
    RateLimited,

    /// Field-level validation rejected by the server (400/422).
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Any other non-success API response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
    },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client result type.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Returns whether this error is a 401 and a token refresh may help.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns whether the server asked us to slow down.
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }
}
