//! Integration tests for Tiendita.
//!
//! The tests live in `tests/`; this crate intentionally exports nothing.
//!
//! - `cart_lifecycle` exercises the cart store against real file-backed
//!   storage, including rehydration across store instances.
//! - `live_api` runs against a real backend and is `#[ignore]`d by
//!   default; set `TIENDITA_API_URL` and run with `--ignored`.

#![cfg_attr(not(test), forbid(unsafe_code))]
