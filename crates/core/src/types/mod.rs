//! Core types for Tiendita.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{CartConfirmation, CartItemPayload, CartPayload};
pub use id::*;
pub use product::Product;
