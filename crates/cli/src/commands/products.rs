//! Catalog browsing commands.

use tiendita_core::ProductId;
use tiendita_storefront::error::Result;
use tiendita_storefront::state::AppState;

/// List all catalog products.
///
/// # Errors
///
/// Returns an error if the catalog request fails.
#[allow(clippy::print_stdout)]
pub async fn list(state: &AppState) -> Result<()> {
    let products = state.catalog().list_products().await?;

    if products.is_empty() {
        println!("No products available");
        return Ok(());
    }

    println!("{:>6}  {:<30}  {:>10}", "ID", "NAME", "PRICE");
    for product in products {
        println!(
            "{:>6}  {:<30}  {:>10}",
            product.id, product.name, product.price
        );
    }
    Ok(())
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns an error if the product does not exist or the request fails.
#[allow(clippy::print_stdout)]
pub async fn show(state: &AppState, id: i32) -> Result<()> {
    let product = state.catalog().get_product(ProductId::new(id)).await?;

    println!("Product {}", product.id);
    println!("  name:  {}", product.name);
    println!("  price: {}", product.price);
    if let Some(image_url) = &product.image_url {
        println!("  image: {image_url}");
    }
    Ok(())
}
