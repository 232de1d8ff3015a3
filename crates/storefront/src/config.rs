//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TIENDITA_API_URL` - Base URL of the storefront backend API
//!   (e.g. `http://localhost:8000/api`)
//!
//! ## Optional
//! - `TIENDITA_DATA_DIR` - Directory for locally persisted client state
//!   such as the cart (default: `.tiendita`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_DATA_DIR: &str = ".tiendita";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the backend API.
    pub api_url: Url,
    /// Directory holding locally persisted client state.
    pub data_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `TIENDITA_API_URL` is missing or not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("TIENDITA_API_URL")?
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("TIENDITA_API_URL".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("TIENDITA_DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self { api_url, data_dir })
    }
}

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
