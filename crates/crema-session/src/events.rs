//! Session event channel.
//!
//! Embedders subscribe to learn about out-of-band state changes, in
//! particular tokens rotated by the refresh coordinator while an
//! unrelated request was in flight.

/// A change broadcast by the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user signed in and the profile was loaded.
    LoggedIn,
    /// The session was cleared by an explicit logout.
    LoggedOut,
    /// The access token was rotated.
    TokenRefreshed,
    /// A refresh failed; the session was invalidated.
    RefreshFailed,
    /// The admin-mode flag changed to the carried value.
    AdminModeChanged(bool),
}
