//! Checkout command.

use tiendita_storefront::api::submit_cart;
use tiendita_storefront::error::Result;
use tiendita_storefront::state::AppState;

/// Submit the cart to the backend.
///
/// On confirmed success the local cart is cleared; on failure it is left
/// untouched so the submission can be retried.
///
/// # Errors
///
/// Returns an error if the cart is empty or the submission fails.
#[allow(clippy::print_stdout)]
pub async fn submit(state: &AppState) -> Result<()> {
    let confirmation = submit_cart(state.cart(), state.checkout()).await?;

    println!("Cart saved as order {}", confirmation.id);
    for item in &confirmation.items {
        println!("  product {} x {}", item.product_id, item.quantity);
    }
    Ok(())
}
