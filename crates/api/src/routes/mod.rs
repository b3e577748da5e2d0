//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//!
//! # Catalog
//! GET  /api/categories            - Category list
//! GET  /api/products              - Product list (?category= / ?search=)
//! GET  /api/products/{id}         - Product detail
//!
//! # Orders
//! GET  /api/orders                - Order list (?userId=)
//! GET  /api/orders/{id}           - Order + items
//! POST /api/orders                - Create order with items
//! PATCH /api/orders/{id}/status   - Overwrite order status
//!
//! # AI chat
//! POST /api/chat                  - One chat turn (user msg -> AI reply)
//! GET  /api/chat/{user_id}        - Transcript, oldest first
//! POST /api/ai/create-order       - Create order from parsed chat items
//! ```

pub mod categories;
pub mod chat;
pub mod orders;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create the combined API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(chat::router())
}
