//! The catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product in the remote catalog.
///
/// The catalog API serializes prices as plain JSON numbers, so the
/// `Decimal` field round-trips through `rust_decimal::serde::float`.
/// Unknown fields in catalog responses are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier (> 0).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price (>= 0). No currency rounding is applied here;
    /// presentation formats for display.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Optional product image location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserialize_minimal() {
        let product: Product =
            serde_json::from_str(r#"{"id": 1, "name": "Remera", "price": 1000}"#).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Remera");
        assert_eq!(product.price, Decimal::from(1000));
        assert_eq!(product.image_url, None);
    }

    #[test]
    fn test_product_deserialize_ignores_unknown_fields() {
        // The backend also sends image_file_url; the client has no use for it.
        let product: Product = serde_json::from_str(
            r#"{"id": 2, "name": "Taza", "price": 19.99, "image_url": "https://cdn.example/taza.png", "image_file_url": ""}"#,
        )
        .unwrap();
        assert_eq!(product.image_url.as_deref(), Some("https://cdn.example/taza.png"));
        assert_eq!(product.price.to_string(), "19.99");
    }

    #[test]
    fn test_product_serializes_price_as_number() {
        let product = Product {
            id: ProductId::new(3),
            name: "Gorra".to_string(),
            price: Decimal::from(2500),
            image_url: None,
        };
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Gorra","price":2500.0}"#);
    }
}
