//! The client-side cart store.
//!
//! Canonical, durable cart state shared by every presentation consumer.
//! The store owns an ordered line sequence (insertion order is rendering
//! order), persists it write-through under a fixed key after every
//! mutation, and notifies subscribed listeners synchronously with the
//! updated snapshot.
//!
//! The mutation API is total: malformed persisted state degrades silently
//! to an empty cart, absent ids are no-ops, and a non-positive quantity
//! means removal rather than an error.

use std::sync::{Arc, Mutex, PoisonError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use tiendita_core::{Product, ProductId};

use crate::storage::KeyValueStore;

/// Fixed persistence key, shared with the original web client so an
/// existing persisted cart keeps working.
pub const CART_STORAGE_KEY: &str = "mini-ecommerce-cart";

/// A product plus the quantity of it in the cart.
///
/// Product fields are a snapshot taken when the line was added; later
/// catalog changes do not retouch existing lines. Quantity is always
/// at least 1 - a would-be zero-quantity line is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// The `(lines, item_count, total)` view handed to listeners after every
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub item_count: u64,
    pub total: Decimal,
}

type Listener = Box<dyn Fn(&CartSnapshot) + Send + Sync>;

/// Durable, process-wide cart state.
///
/// Cheaply cloneable; all clones share the same state. Construct one at
/// application start and hand it to every consumer - there is no ambient
/// global instance.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

struct CartStoreInner {
    storage: Box<dyn KeyValueStore>,
    lines: Mutex<Vec<CartLine>>,
    listeners: Mutex<Vec<Listener>>,
}

impl CartStore {
    /// Create a store, rehydrating any cart previously persisted in
    /// `storage`.
    ///
    /// A missing entry, unreadable storage, corrupt JSON, or a non-array
    /// payload all yield an empty cart; this path never fails.
    #[must_use]
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        let lines = hydrate(&storage);
        Self {
            inner: Arc::new(CartStoreInner {
                storage: Box::new(storage),
                lines: Mutex::new(lines),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the same id, or appends a new
    /// line with quantity 1 carrying a snapshot of the product fields.
    pub fn add_item(&self, product: &Product) {
        self.mutate(|lines| {
            if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
                line.quantity = line.quantity.saturating_add(1);
            } else {
                lines.push(CartLine {
                    product: product.clone(),
                    quantity: 1,
                });
            }
        });
    }

    /// Set the quantity of the line with `id`.
    ///
    /// A quantity of zero or less removes the line. Both paths are no-ops
    /// when no line has `id`.
    pub fn update_quantity(&self, id: ProductId, quantity: i64) {
        self.mutate(|lines| {
            if quantity <= 0 {
                lines.retain(|l| l.product.id != id);
            } else if let Some(line) = lines.iter_mut().find(|l| l.product.id == id) {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
        });
    }

    /// Remove the line with `id`, if present.
    pub fn remove_item(&self, id: ProductId) {
        self.mutate(|lines| lines.retain(|l| l.product.id != id));
    }

    /// Remove all lines.
    ///
    /// Runs after a confirmed remote save; on submission failure the
    /// caller leaves the store untouched so the cart survives for retry.
    pub fn clear(&self) {
        self.mutate(Vec::clear);
    }

    /// The current line sequence, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock_lines().clone()
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lock_lines()
            .iter()
            .map(|l| u64::from(l.quantity))
            .sum()
    }

    /// Sum of `price * quantity` over all lines. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lock_lines().iter().map(CartLine::subtotal).sum()
    }

    /// The current `(lines, item_count, total)` view.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        snapshot_of(&self.lock_lines())
    }

    /// Register a listener invoked synchronously after every mutation.
    ///
    /// Listeners run on the mutating caller's thread and must not call
    /// back into the store.
    pub fn subscribe(&self, listener: impl Fn(&CartSnapshot) + Send + Sync + 'static) {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    fn lock_lines(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        self.inner.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply a mutation, persist the result, then notify listeners.
    ///
    /// Persistence is write-through: the serialized line sequence is
    /// handed to storage before the mutation completes. A storage failure
    /// is logged and swallowed - the in-memory state is already updated
    /// and the store's API stays total.
    fn mutate(&self, f: impl FnOnce(&mut Vec<CartLine>)) {
        let snapshot = {
            let mut lines = self.lock_lines();
            f(&mut lines);
            self.persist(&lines);
            snapshot_of(&lines)
        };

        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&snapshot);
        }
    }

    fn persist(&self, lines: &[CartLine]) {
        match serde_json::to_string(lines) {
            Ok(serialized) => {
                if let Err(e) = self.inner.storage.set(CART_STORAGE_KEY, &serialized) {
                    warn!(error = %e, "failed to persist cart");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize cart"),
        }
    }
}

fn snapshot_of(lines: &[CartLine]) -> CartSnapshot {
    CartSnapshot {
        lines: lines.to_vec(),
        item_count: lines.iter().map(|l| u64::from(l.quantity)).sum(),
        total: lines.iter().map(CartLine::subtotal).sum(),
    }
}

/// Load the persisted line sequence, degrading to empty on any failure.
fn hydrate(storage: &dyn KeyValueStore) -> Vec<CartLine> {
    let raw = match storage.get(CART_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "failed to read persisted cart, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<CartLine>>(&raw) {
        Ok(lines) => sanitize(lines),
        Err(e) => {
            warn!(error = %e, "malformed persisted cart, starting empty");
            Vec::new()
        }
    }
}

/// Enforce the line invariants on decoded data: at most one line per
/// product id (first occurrence wins) and strictly positive quantities.
fn sanitize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut seen = Vec::new();
    let mut sanitized = Vec::with_capacity(lines.len());
    for line in lines {
        if line.quantity == 0 || seen.contains(&line.product.id) {
            continue;
        }
        seen.push(line.product.id);
        sanitized.push(line);
    }
    sanitized
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;
    use crate::storage::MemoryStore;

    fn product(id: i32, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::from(price),
            image_url: None,
        }
    }

    fn remera() -> Product {
        product(1, "Remera", 1000)
    }

    #[test]
    fn test_starts_empty_without_persisted_state() {
        let store = CartStore::new(MemoryStore::new());
        assert!(store.lines().is_empty());
        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total(), Decimal::ZERO);
    }

    #[test]
    fn test_re_adding_increments_single_line() {
        let store = CartStore::new(MemoryStore::new());
        store.add_item(&remera());
        store.add_item(&remera());

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().quantity, 2);
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total(), Decimal::from(2000));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let store = CartStore::new(MemoryStore::new());
        store.add_item(&product(2, "Taza", 500));
        store.add_item(&remera());
        store.add_item(&product(2, "Taza", 500));

        let ids: Vec<i32> = store
            .lines()
            .iter()
            .map(|l| l.product.id.as_i32())
            .collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let store = CartStore::new(MemoryStore::new());
        store.add_item(&remera());
        store.update_quantity(ProductId::new(1), 5);
        assert_eq!(store.total(), Decimal::from(5000));
        assert_eq!(store.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for quantity in [0, -3] {
            let store = CartStore::new(MemoryStore::new());
            store.add_item(&remera());
            store.update_quantity(ProductId::new(1), quantity);
            assert!(store.lines().is_empty());
        }
    }

    #[test]
    fn test_update_and_remove_absent_id_is_noop() {
        let store = CartStore::new(MemoryStore::new());
        store.add_item(&remera());

        store.update_quantity(ProductId::new(99), 5);
        store.update_quantity(ProductId::new(99), 0);
        store.remove_item(ProductId::new(99));

        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().quantity, 1);
    }

    #[test]
    fn test_remera_scenario() {
        let store = CartStore::new(MemoryStore::new());

        store.add_item(&remera());
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.total(), Decimal::from(1000));

        store.add_item(&remera());
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total(), Decimal::from(2000));

        store.update_quantity(ProductId::new(1), 5);
        assert_eq!(store.total(), Decimal::from(5000));

        store.remove_item(ProductId::new(1));
        assert!(store.lines().is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
    }

    #[test]
    fn test_add_snapshots_product_fields() {
        let store = CartStore::new(MemoryStore::new());
        let mut p = remera();
        store.add_item(&p);

        // A later catalog price change must not retouch the line.
        p.price = Decimal::from(9999);
        assert_eq!(store.total(), Decimal::from(1000));
    }

    #[test]
    fn test_write_through_after_every_mutation() {
        let backing = MemoryStore::new();
        let store = CartStore::new(backing.clone());

        store.add_item(&remera());
        let persisted = backing.get(CART_STORAGE_KEY).unwrap().unwrap();
        let decoded: Vec<CartLine> = serde_json::from_str(&persisted).unwrap();
        assert_eq!(decoded.len(), 1);

        store.update_quantity(ProductId::new(1), 3);
        let persisted = backing.get(CART_STORAGE_KEY).unwrap().unwrap();
        let decoded: Vec<CartLine> = serde_json::from_str(&persisted).unwrap();
        assert_eq!(decoded.first().unwrap().quantity, 3);
    }

    #[test]
    fn test_roundtrip_through_persistence() {
        let backing = MemoryStore::new();
        let store = CartStore::new(backing.clone());
        store.add_item(&product(3, "Gorra", 2500));
        store.add_item(&remera());
        store.add_item(&remera());
        let before = store.lines();

        // "Reload": a fresh store over the same backing storage.
        let rehydrated = CartStore::new(backing);
        assert_eq!(rehydrated.lines(), before);
    }

    #[test]
    fn test_persisted_wire_format() {
        let backing = MemoryStore::new();
        let store = CartStore::new(backing.clone());
        store.add_item(&remera());

        let persisted = backing.get(CART_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            persisted,
            r#"[{"id":1,"name":"Remera","price":1000.0,"quantity":1}]"#
        );
    }

    #[test]
    fn test_hydrates_legacy_payload_with_image_url() {
        let backing = MemoryStore::new();
        backing
            .set(
                CART_STORAGE_KEY,
                r#"[{"id":1,"name":"Remera","price":1000,"image_url":"https://cdn.example/r.png","quantity":2}]"#,
            )
            .unwrap();

        let store = CartStore::new(backing);
        assert_eq!(store.item_count(), 2);
        assert_eq!(
            store.lines().first().unwrap().product.image_url.as_deref(),
            Some("https://cdn.example/r.png")
        );
    }

    #[test]
    fn test_malformed_payloads_hydrate_empty() {
        for payload in ["{not json", r#"{"not":"an array"}"#, "42", "null"] {
            let backing = MemoryStore::new();
            backing.set(CART_STORAGE_KEY, payload).unwrap();
            let store = CartStore::new(backing);
            assert!(store.lines().is_empty(), "payload {payload:?} not empty");
        }
    }

    #[test]
    fn test_hydration_sanitizes_invalid_lines() {
        let backing = MemoryStore::new();
        backing
            .set(
                CART_STORAGE_KEY,
                r#"[
                    {"id":1,"name":"Remera","price":1000,"quantity":2},
                    {"id":1,"name":"Remera","price":1000,"quantity":7},
                    {"id":2,"name":"Taza","price":500,"quantity":0}
                ]"#,
            )
            .unwrap();

        let store = CartStore::new(backing);
        let lines = store.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines.first().unwrap().product.id, ProductId::new(1));
        assert_eq!(lines.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_clear_empties_memory_and_storage() {
        let backing = MemoryStore::new();
        let store = CartStore::new(backing.clone());
        store.add_item(&remera());
        store.clear();

        assert!(store.lines().is_empty());
        assert_eq!(backing.get(CART_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_listeners_receive_snapshot_after_each_mutation() {
        let store = CartStore::new(MemoryStore::new());
        let calls = Arc::new(AtomicU64::new(0));
        let last_count = Arc::new(AtomicU64::new(0));
        {
            let calls = Arc::clone(&calls);
            let last_count = Arc::clone(&last_count);
            store.subscribe(move |snapshot| {
                calls.fetch_add(1, Ordering::SeqCst);
                last_count.store(snapshot.item_count, Ordering::SeqCst);
            });
        }

        store.add_item(&remera());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(last_count.load(Ordering::SeqCst), 1);

        store.update_quantity(ProductId::new(1), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(last_count.load(Ordering::SeqCst), 4);

        store.clear();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(last_count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let store = CartStore::new(MemoryStore::new());
        let other = store.clone();
        store.add_item(&remera());
        assert_eq!(other.item_count(), 1);
    }
}
