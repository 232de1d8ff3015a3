//! Wire payloads for the cart submission endpoint.
//!
//! The backend accepts `POST /cart` with `{"items": [{"product_id", "quantity"}]}`
//! and answers `201` with `{"id", "items"}` once the cart is stored.

use serde::{Deserialize, Serialize};

use super::id::{CartId, ProductId};

/// One line of a submitted cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItemPayload {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Request body for saving a cart upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartPayload {
    pub items: Vec<CartItemPayload>,
}

/// Confirmation returned by the backend after a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfirmation {
    /// Identifier of the cart record created upstream.
    pub id: CartId,
    /// The lines the backend accepted, echoed back.
    pub items: Vec<CartItemPayload>,
}
