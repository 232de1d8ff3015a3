//! Application state shared across consumers.

use std::sync::Arc;

use crate::api::{CatalogClient, CheckoutClient};
use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::storage::FileStore;

/// Application state shared by every presentation consumer.
///
/// Constructed once at application start; cheaply cloneable via `Arc`.
/// Holds the single cart store instance, so all consumers observe the
/// same cart.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    cart: CartStore,
    catalog: CatalogClient,
    checkout: CheckoutClient,
}

impl AppState {
    /// Create the application state from configuration.
    ///
    /// Opens the file-backed storage under the configured data directory
    /// and rehydrates any persisted cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, AppError> {
        let storage = FileStore::new(&config.data_dir)?;
        let cart = CartStore::new(storage);
        let catalog = CatalogClient::new(&config.api_url);
        let checkout = CheckoutClient::new(&config.api_url);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                cart,
                catalog,
                checkout,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the product catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the cart submission client.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutClient {
        &self.inner.checkout
    }
}
