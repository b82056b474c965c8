//! # crema-session
//!
//! Session management for the crema storefront client.
//!
//! [`SessionStore`] is the single source of truth for authentication
//! state. It owns the tokens, mirrors them into the persistent cache,
//! coordinates single-flight token refresh, and derives the admin-mode
//! flag from profile data.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod admin;
pub mod error;
pub mod events;
pub mod refresh;
pub mod session;
pub mod store;

pub use admin::compute_admin_mode;
pub use error::{SessionError, SessionResult};
pub use events::SessionEvent;
pub use refresh::spawn_periodic;
pub use session::Session;
pub use store::SessionStore;
