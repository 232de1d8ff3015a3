//! Cart management commands.
//!
//! The cart lives in the local data directory, so it survives between
//! invocations the way the web client's cart survives page reloads.

use tiendita_core::ProductId;
use tiendita_storefront::error::Result;
use tiendita_storefront::state::AppState;

/// Print the cart contents and derived totals.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) {
    let snapshot = state.cart().snapshot();

    if snapshot.lines.is_empty() {
        println!("Cart is empty");
        return;
    }

    println!("{:>6}  {:<30}  {:>8}  {:>10}", "ID", "NAME", "QTY", "SUBTOTAL");
    for line in &snapshot.lines {
        println!(
            "{:>6}  {:<30}  {:>8}  {:>10}",
            line.product.id,
            line.product.name,
            line.quantity,
            line.subtotal()
        );
    }
    println!("{} item(s), total {}", snapshot.item_count, snapshot.total);
}

/// Fetch a product from the catalog and add one unit to the cart.
///
/// # Errors
///
/// Returns an error if the product does not exist or the request fails.
#[allow(clippy::print_stdout)]
pub async fn add(state: &AppState, id: i32) -> Result<()> {
    let product = state.catalog().get_product(ProductId::new(id)).await?;
    state.cart().add_item(&product);

    println!(
        "Added {} ({} item(s), total {})",
        product.name,
        state.cart().item_count(),
        state.cart().total()
    );
    Ok(())
}

/// Set the quantity of a cart line; zero removes it.
#[allow(clippy::print_stdout)]
pub fn set(state: &AppState, id: i32, quantity: i64) {
    state.cart().update_quantity(ProductId::new(id), quantity);
    println!(
        "{} item(s), total {}",
        state.cart().item_count(),
        state.cart().total()
    );
}

/// Remove a cart line.
#[allow(clippy::print_stdout)]
pub fn remove(state: &AppState, id: i32) {
    state.cart().remove_item(ProductId::new(id));
    println!(
        "{} item(s), total {}",
        state.cart().item_count(),
        state.cart().total()
    );
}

/// Remove all cart lines.
#[allow(clippy::print_stdout)]
pub fn clear(state: &AppState) {
    state.cart().clear();
    println!("Cart cleared");
}
