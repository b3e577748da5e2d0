//! Order route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};
use serde::Deserialize;

use dastak_core::{OrderId, OrderStatus, UserId};

use crate::error::{AppError, FieldError, Result};
use crate::models::{Order, OrderWithItems};
use crate::services::{OrderInput, OrderService};
use crate::state::AppState;

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", patch(update_order_status))
}

/// Order listing query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    /// Scope to one user's orders.
    pub user_id: Option<UserId>,
}

/// Order list, optionally scoped to a user.
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Json<Vec<Order>> {
    let orders = OrderService::new(state.store());
    Json(query.user_id.map_or_else(|| orders.list(), |user_id| orders.by_user(user_id)))
}

/// Order detail, joined with its line items.
///
/// # Errors
///
/// Returns 404 when the order does not exist.
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderWithItems>> {
    OrderService::new(state.store())
        .get(id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Order".to_string()))
}

/// Create an order and its line items.
///
/// # Errors
///
/// Returns 400 with field-level errors when validation fails; nothing is
/// persisted in that case.
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<OrderInput>,
) -> Result<Json<OrderWithItems>> {
    OrderService::new(state.store()).create(input).map(Json)
}

/// Status update request body.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    /// One of: pending, confirmed, preparing, delivering, delivered,
    /// cancelled. Kept as a string so an invalid value surfaces as a
    /// field-level 400 rather than a body rejection.
    #[serde(default)]
    pub status: Option<String>,
}

/// Overwrite an order's status.
///
/// # Errors
///
/// Returns 400 when `status` is missing or not a valid status value, and
/// 404 when the order does not exist.
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(body): Json<StatusUpdateRequest>,
) -> Result<Json<Order>> {
    let Some(raw) = body.status else {
        return Err(AppError::missing_field("status"));
    };
    let status: OrderStatus = raw
        .parse()
        .map_err(|e: String| AppError::Validation(vec![FieldError::new("status", e)]))?;

    OrderService::new(state.store())
        .update_status(id, status)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Order".to_string()))
}
