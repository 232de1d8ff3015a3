//! Unified error handling.
//!
//! Provides a unified `AppError` aggregating the per-layer error types.
//! Front ends (the CLI, integration tests) return `Result<T, AppError>`.
//!
//! Note what is deliberately absent: the cart store itself never returns
//! errors - its mutation API is total, and malformed persisted state
//! degrades to an empty cart instead of surfacing here.

use thiserror::Error;

use crate::api::{ApiError, CheckoutError};
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Local storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Backend API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Cart submission failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
