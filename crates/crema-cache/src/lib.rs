//! # crema-cache
//!
//! Persistent local key-value cache for the crema storefront client.
//!
//! Stores the access and refresh tokens plus a few UI preferences across
//! process restarts. Single writer assumed; last write wins.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod provider;

pub use error::{CacheError, CacheResult};
pub use file::FileCache;
pub use memory::MemoryCache;
pub use provider::CacheProvider;
