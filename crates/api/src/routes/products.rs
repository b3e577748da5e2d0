//! Product route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use serde::Deserialize;

use dastak_core::{CategoryId, ProductId};

use crate::error::{AppError, Result};
use crate::models::Product;
use crate::services::CatalogService;
use crate::state::AppState;

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/{id}", get(get_product))
}

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    /// Scope to one category.
    pub category: Option<CategoryId>,
    /// Substring search; takes precedence over `category`.
    pub search: Option<String>,
}

/// Product list, optionally filtered by search query or category.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Json<Vec<Product>> {
    let catalog = CatalogService::new(state.store());

    let products = if let Some(search) = query.search {
        catalog.search_products(&search)
    } else if let Some(category) = query.category {
        catalog.products_by_category(category)
    } else {
        catalog.list_products()
    };

    Json(products)
}

/// Single product by ID.
///
/// # Errors
///
/// Returns 404 when the product does not exist.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    CatalogService::new(state.store())
        .get_product(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Product".to_string()))
}
