//! # crema-client
//!
//! Typed REST API client for the crema storefront.
//!
//! [`ApiClient`] wraps `reqwest` with the storefront's status-code
//! conventions: validation errors arrive per field, 401 maps to
//! [`ClientError::Unauthorized`] so the session layer can refresh and
//! retry, and 429 is retried once after a fixed backoff.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod backend;
pub mod catalog;
pub mod client;
pub mod discounts;
pub mod error;
pub mod favorites;
pub mod orders;

pub use backend::StorefrontBackend;
pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
