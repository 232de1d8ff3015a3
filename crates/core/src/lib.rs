//! Tiendita Core - Shared types library.
//!
//! This crate provides common types used across all Tiendita components:
//! - `storefront` - Cart store and storefront API clients
//! - `cli` - Command-line storefront front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the product record, and cart wire payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
