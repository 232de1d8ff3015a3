//! Product catalog client.
//!
//! Read-only access to the catalog endpoints, with in-process caching via
//! `moka` (5-minute TTL) so repeated listings do not hammer the backend.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use url::Url;

use tiendita_core::{Product, ProductId};

use super::{ApiError, base_url, decode_response};

const CACHE_CAPACITY: u64 = 1000;
const CACHE_TTL: Duration = Duration::from_secs(300);

/// Cache key for catalog responses.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Product(ProductId),
}

/// Cached value types.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Vec<Product>),
    Product(Box<Product>),
}

/// Client for the product catalog endpoints.
///
/// Cheaply cloneable; clones share the HTTP connection pool and cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a catalog client for the API rooted at `api_url`.
    #[must_use]
    pub fn new(api_url: &Url) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url(api_url),
                cache,
            }),
        }
    }

    /// List all catalog products.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response is not a
    /// product array.
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(CacheValue::Products(products)) =
            self.inner.cache.get(&CacheKey::Products).await
        {
            tracing::debug!("catalog list served from cache");
            return Ok(products);
        }

        let response = self
            .inner
            .client
            .get(format!("{}/products", self.inner.base_url))
            .send()
            .await?;
        let products: Vec<Product> = decode_response(response).await?;

        self.inner
            .cache
            .insert(CacheKey::Products, CacheValue::Products(products.clone()))
            .await;
        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] for an unknown id, or another
    /// [`ApiError`] if the request fails.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        if let Some(CacheValue::Product(product)) =
            self.inner.cache.get(&CacheKey::Product(id)).await
        {
            tracing::debug!(product_id = %id, "product served from cache");
            return Ok(*product);
        }

        let response = self
            .inner
            .client
            .get(format!("{}/products/{id}", self.inner.base_url))
            .send()
            .await?;
        let product: Product = decode_response(response).await?;

        self.inner
            .cache
            .insert(
                CacheKey::Product(id),
                CacheValue::Product(Box::new(product.clone())),
            )
            .await;
        Ok(product)
    }
}
