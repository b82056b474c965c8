//! # crema-cli
//!
//! Command-line storefront client for the crema shop.
//!
//! This crate provides the `crema` binary:
//! - Account commands (login, logout, register, profile)
//! - Catalog browsing (products, accessories) with filters
//! - Favorites and order management
//! - Discount code checks
//! - Configuration management
//!
//! Tokens are persisted through the file cache, so an authenticated
//! session survives process restarts and is silently refreshed.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
