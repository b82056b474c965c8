//! Session error types.

use thiserror::Error;

use crema_cache::CacheError;
use crema_client::ClientError;
use crema_core::FieldError;

/// Session error type.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Login rejected. Same message whichever part was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The session could not be refreshed and was cleared.
    #[error("session expired, please sign in again")]
    SessionExpired,

    /// No authenticated user for an operation that needs one.
    #[error("not signed in")]
    NotSignedIn,

    /// Admin mode requested for a non-eligible session.
    #[error("access denied")]
    Forbidden,

    /// Client-side or server-side field validation failure.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Error from the persistent cache.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// Error from the API client.
    #[error(transparent)]
    Client(ClientError),
}

/// Session result type.
pub type SessionResult<T> = Result<T, SessionError>;

impl From<ClientError> for SessionError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation(errors) => Self::Validation(errors),
            other => Self::Client(other),
        }
    }
}

impl SessionError {
    /// Returns whether the user must authenticate again.
    #[must_use]
    pub const fn requires_reauthentication(&self) -> bool {
        matches!(self, Self::SessionExpired | Self::NotSignedIn)
    }
}
