//! Tiendita Storefront library.
//!
//! Client-side storefront logic for a small e-commerce backend: the
//! durable cart store, the persistence port it writes through, REST
//! clients for the product catalog and cart submission, and the shared
//! application state handle that wires them together.
//!
//! The backend itself (product CRUD, authentication, cart records) is a
//! remote collaborator reached over HTTP; nothing in this crate serves
//! requests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
