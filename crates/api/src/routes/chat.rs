//! AI chat route handlers.
//!
//! The chat turn endpoint returns the assistant's interpretation verbatim;
//! deciding whether to offer order creation from it is the client's call.
//! Order creation from chat is its own endpoint, invoked explicitly with
//! the already-parsed items.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use dastak_core::UserId;

use crate::ai::AiOrderResponse;
use crate::error::{AppError, FieldError, Result};
use crate::models::{ChatMessage, Order};
use crate::services::{ChatOrderInput, ChatService, OrderService};
use crate::state::AppState;

/// Build the chat router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/chat", post(post_chat))
        .route("/api/chat/{user_id}", get(get_transcript))
        .route("/api/ai/create-order", post(create_order_from_chat))
}

/// Chat turn request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurnRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Run one chat turn: persist the user message, interpret it, persist the
/// assistant reply.
///
/// # Errors
///
/// Returns 400 when `message` or `userId` is missing. A provider failure is
/// not an error: the response degrades to the fixed fallback payload.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatTurnRequest>,
) -> Result<Json<AiOrderResponse>> {
    let mut errors = Vec::new();
    match body.message.as_deref() {
        None => errors.push(FieldError::missing("message")),
        Some(text) if text.trim().is_empty() => {
            errors.push(FieldError::new("message", "must not be empty"));
        }
        Some(_) => {}
    }
    if body.user_id.is_none() {
        errors.push(FieldError::missing("userId"));
    }
    let (Some(message), Some(user_id)) = (body.message, body.user_id) else {
        return Err(AppError::Validation(errors));
    };
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let service = ChatService::new(state.store(), state.assistant());
    Ok(Json(service.handle_user_turn(user_id, &message).await))
}

/// A user's transcript, oldest first.
pub async fn get_transcript(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Json<Vec<ChatMessage>> {
    let service = ChatService::new(state.store(), state.assistant());
    Json(service.history(user_id))
}

/// Response for order creation from chat.
#[derive(Debug, Serialize)]
pub struct ChatOrderResponse {
    /// The created order (items are fetchable via the order detail route).
    pub order: Order,
    /// Human-readable order summary from the assistant.
    pub summary: String,
}

/// Create an order from items the chat flow parsed.
///
/// # Errors
///
/// Returns 400 when `userId`, `items` or `deliveryAddress` is missing.
pub async fn create_order_from_chat(
    State(state): State<AppState>,
    Json(input): Json<ChatOrderInput>,
) -> Result<Json<ChatOrderResponse>> {
    let items = input.items.clone().unwrap_or_default();

    let created = OrderService::new(state.store()).create_from_chat(input)?;

    let chat = ChatService::new(state.store(), state.assistant());
    let summary = chat.summarize_order(&items).await;

    Ok(Json(ChatOrderResponse {
        order: created.order,
        summary,
    }))
}
