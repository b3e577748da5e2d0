//! Catalog domain models: categories and products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use dastak_core::{CategoryId, ProductId};

/// A product category (Food, Medicine, Groceries).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Display name. Never empty.
    pub name: String,
    /// Icon reference for the client.
    pub icon: String,
    /// Color theme for the client.
    pub color: String,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Longer description, if any.
    pub description: Option<String>,
    /// Unit price. Serialized as a decimal string.
    pub price: Decimal,
    /// Owning category.
    pub category_id: CategoryId,
    /// Vendor fulfilling this product.
    pub vendor: String,
    /// Average rating, if any.
    pub rating: Option<Decimal>,
    /// Number of reviews behind the rating.
    pub review_count: Option<i32>,
    /// Whether the product can currently be ordered.
    pub is_available: bool,
    /// Image URL for the client.
    pub image_url: Option<String>,
}

/// Insertion shape for [`Category`].
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Insertion shape for [`Product`].
///
/// `is_available` defaults to `true` when not supplied.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category_id: CategoryId,
    pub vendor: String,
    pub rating: Option<Decimal>,
    pub review_count: Option<i32>,
    pub is_available: Option<bool>,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dastak_core::FreshId;

    #[test]
    fn test_product_price_serializes_as_string() {
        let product = Product {
            id: ProductId::fresh(),
            name: "Chicken Biryani".to_string(),
            description: None,
            price: Decimal::from(380),
            category_id: CategoryId::fresh(),
            vendor: "Desi Palace".to_string(),
            rating: Some(Decimal::new(42, 1)),
            review_count: Some(127),
            is_available: true,
            image_url: None,
        };

        let json = serde_json::to_string(&product).expect("serialize");
        assert!(json.contains("\"price\":\"380\""));
        assert!(json.contains("\"rating\":\"4.2\""));
        assert!(json.contains("\"categoryId\""));
        assert!(json.contains("\"isAvailable\":true"));
    }
}
