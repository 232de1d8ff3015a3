//! Cart submission client and the checkout orchestration.
//!
//! Submitting a cart is the only flow allowed to discard cart contents,
//! and only after the backend confirms the save. On any failure the store
//! is left untouched so the user can retry.

use std::sync::Arc;

use thiserror::Error;
use url::Url;

use tiendita_core::{CartConfirmation, CartItemPayload, CartPayload};

use crate::cart::CartStore;

use super::{ApiError, base_url, decode_response};

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing to submit; the backend rejects empty carts anyway.
    #[error("cart is empty")]
    EmptyCart,

    /// The submission request failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Client for the cart submission endpoint.
#[derive(Clone)]
pub struct CheckoutClient {
    inner: Arc<CheckoutClientInner>,
}

struct CheckoutClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl CheckoutClient {
    /// Create a checkout client for the API rooted at `api_url`.
    #[must_use]
    pub fn new(api_url: &Url) -> Self {
        Self {
            inner: Arc::new(CheckoutClientInner {
                client: reqwest::Client::new(),
                base_url: base_url(api_url),
            }),
        }
    }

    /// Save a cart upstream.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects
    /// the payload (unknown product ids, invalid quantities).
    pub async fn save_cart(&self, payload: &CartPayload) -> Result<CartConfirmation, ApiError> {
        let response = self
            .inner
            .client
            .post(format!("{}/cart", self.inner.base_url))
            .json(payload)
            .send()
            .await?;
        decode_response(response).await
    }
}

/// Submit the store's current cart and clear it on confirmed success.
///
/// The snapshot sent upstream is built from the store's lines at call
/// time; `clear()` runs only after the backend acknowledges the save, so
/// a failed submission preserves the cart for retry.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] when there is nothing to submit,
/// or [`CheckoutError::Api`] if the save fails. The store is unchanged in
/// both cases.
pub async fn submit_cart(
    store: &CartStore,
    client: &CheckoutClient,
) -> Result<CartConfirmation, CheckoutError> {
    let items: Vec<CartItemPayload> = store
        .lines()
        .iter()
        .map(|line| CartItemPayload {
            product_id: line.product.id,
            quantity: line.quantity,
        })
        .collect();

    if items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let confirmation = client.save_cart(&CartPayload { items }).await?;
    tracing::info!(cart_id = %confirmation.id, "cart saved upstream, clearing local state");
    store.clear();
    Ok(confirmation)
}
