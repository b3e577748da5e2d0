//! Fixed launch catalog.
//!
//! Seeded once at store construction: three categories (Food, Medicine,
//! Groceries) and five products. Restart resets to exactly this catalog.

use rust_decimal::Decimal;

use crate::models::{NewCategory, NewProduct};

use super::MemStore;

/// Populate `store` with the launch catalog.
pub fn seed_catalog(store: &MemStore) {
    let food = store.create_category(NewCategory {
        name: "Food".to_string(),
        icon: "fas fa-utensils".to_string(),
        color: "from-orange-400 to-red-500".to_string(),
    });
    let medicine = store.create_category(NewCategory {
        name: "Medicine".to_string(),
        icon: "fas fa-pills".to_string(),
        color: "from-green-400 to-emerald-500".to_string(),
    });
    let groceries = store.create_category(NewCategory {
        name: "Groceries".to_string(),
        icon: "fas fa-shopping-basket".to_string(),
        color: "from-blue-400 to-indigo-500".to_string(),
    });

    store.create_product(NewProduct {
        name: "Chicken Biryani".to_string(),
        description: Some("Delicious aromatic chicken biryani with basmati rice".to_string()),
        price: Decimal::from(380),
        category_id: food.id,
        vendor: "Desi Palace".to_string(),
        rating: Some(Decimal::new(42, 1)),
        review_count: Some(127),
        is_available: None,
        image_url: Some(
            "https://images.unsplash.com/photo-1563379091339-03246963d96c?w=200&h=120&fit=crop"
                .to_string(),
        ),
    });
    store.create_product(NewProduct {
        name: "Fresh Vegetables".to_string(),
        description: Some("Farm fresh seasonal vegetables bundle".to_string()),
        price: Decimal::from(250),
        category_id: groceries.id,
        vendor: "Local Mart".to_string(),
        rating: Some(Decimal::new(45, 1)),
        review_count: Some(89),
        is_available: None,
        image_url: Some(
            "https://images.unsplash.com/photo-1542838132-92c53300491e?w=200&h=120&fit=crop"
                .to_string(),
        ),
    });
    store.create_product(NewProduct {
        name: "Panadol Tablets".to_string(),
        description: Some("Pain relief tablets - 10 tablets pack".to_string()),
        price: Decimal::from(45),
        category_id: medicine.id,
        vendor: "City Pharmacy".to_string(),
        rating: Some(Decimal::new(48, 1)),
        review_count: Some(245),
        is_available: None,
        image_url: Some(
            "https://images.unsplash.com/photo-1584308666744-24d5c474f2ae?w=200&h=120&fit=crop"
                .to_string(),
        ),
    });
    store.create_product(NewProduct {
        name: "Mutton Karahi".to_string(),
        description: Some("Traditional mutton karahi with fresh naan".to_string()),
        price: Decimal::from(650),
        category_id: food.id,
        vendor: "Desi Palace".to_string(),
        rating: Some(Decimal::new(46, 1)),
        review_count: Some(98),
        is_available: None,
        image_url: Some(
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=200&h=120&fit=crop"
                .to_string(),
        ),
    });
    store.create_product(NewProduct {
        name: "Rice 5kg".to_string(),
        description: Some("Premium basmati rice 5kg pack".to_string()),
        price: Decimal::from(1200),
        category_id: groceries.id,
        vendor: "Local Mart".to_string(),
        rating: Some(Decimal::new(43, 1)),
        review_count: Some(156),
        is_available: None,
        image_url: Some(
            "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=200&h=120&fit=crop"
                .to_string(),
        ),
    });
}
