//! Audit events for the session lifecycle.
//!
//! Every security-relevant transition (login, logout, refresh, register,
//! order creation) produces a structured event, logged through `tracing`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event type categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    // Authentication events
    /// User login attempt.
    Login,
    /// User login failed.
    LoginError,
    /// User logout.
    Logout,
    /// Access token refresh.
    RefreshToken,
    /// Access token refresh failed.
    RefreshTokenError,

    // Account events
    /// User registered.
    Register,
    /// User registration failed.
    RegisterError,
    /// Profile fetched into the session.
    FetchProfile,
    /// Password reset requested.
    ResetPassword,

    // Admin-mode events
    /// Admin mode entered.
    AdminModeEntered,
    /// Admin mode exited.
    AdminModeExited,

    // Order events
    /// Order created.
    OrderCreated,
    /// Order creation failed.
    OrderError,
}

/// Outcome of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOutcome {
    /// Operation succeeded.
    Success,
    /// Operation failed.
    Failure,
}

/// A session lifecycle event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique event identifier.
    pub id: Uuid,
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Type of event.
    pub event_type: EventType,
    /// Outcome of the event.
    pub outcome: EventOutcome,
    /// Email of the user involved, when known.
    pub user_email: Option<String>,
    /// Additional detail (never credentials or tokens).
    pub detail: Option<String>,
}

impl Event {
    /// Creates a new event.
    #[must_use]
    pub fn new(event_type: EventType, outcome: EventOutcome) -> Self {
        Self {
            id: Uuid::now_v7(),
            timestamp: Utc::now(),
            event_type,
            outcome,
            user_email: None,
            detail: None,
        }
    }

    /// Sets the user email.
    #[must_use]
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    /// Sets the detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Logs the event through `tracing`.
    ///
    /// Failures log at `warn`, successes at `info`.
    pub fn emit(&self) {
        match self.outcome {
            EventOutcome::Success => tracing::info!(
                event = ?self.event_type,
                user = self.user_email.as_deref().unwrap_or("-"),
                detail = self.detail.as_deref().unwrap_or(""),
                "session event"
            ),
            EventOutcome::Failure => tracing::warn!(
                event = ?self.event_type,
                user = self.user_email.as_deref().unwrap_or("-"),
                detail = self.detail.as_deref().unwrap_or(""),
                "session event"
            ),
        }
    }
}
