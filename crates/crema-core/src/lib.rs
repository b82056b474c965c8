//! # crema-core
//!
//! Core types shared across the crema storefront client.
//!
//! This crate provides the configuration structures, audit events, and
//! client-side field validation. Each consuming crate defines its own
//! error enum; the shared piece of the error model is [`FieldError`],
//! the per-field validation failure that both local validation and
//! server 422 responses produce.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod event;
pub mod validate;

pub use config::StoreConfig;
pub use validate::FieldError;
