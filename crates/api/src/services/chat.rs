//! Chat transcript service.
//!
//! Owns the append-only per-user message log and the orchestration of one
//! AI turn: append the user's message, ask the assistant, append the reply.
//! A provider failure never reaches the caller - the turn degrades to the
//! fixed fallback reply and the transcript stays consistent.

use tracing::{instrument, warn};

use dastak_core::UserId;

use crate::ai::{AiOrderResponse, Assistant, FALLBACK_SUMMARY, fallback_response};
use crate::models::{ChatMessage, ChatOrderItem, NewChatMessage};
use crate::store::MemStore;

/// Chat transcript service.
pub struct ChatService<'a> {
    store: &'a MemStore,
    assistant: &'a dyn Assistant,
}

impl<'a> ChatService<'a> {
    /// Create a new chat service.
    #[must_use]
    pub const fn new(store: &'a MemStore, assistant: &'a dyn Assistant) -> Self {
        Self { store, assistant }
    }

    /// A user's transcript, created_at ascending. Idempotent read.
    #[must_use]
    pub fn history(&self, user_id: UserId) -> Vec<ChatMessage> {
        self.store.chat_messages(user_id)
    }

    /// Run one user turn: persist the user message, interpret it, persist
    /// the assistant reply, and return the interpretation verbatim.
    ///
    /// The assistant is called once, with no retry. On failure the turn
    /// degrades to [`fallback_response`]; the caller cannot observe the
    /// provider error.
    #[instrument(skip(self, text), fields(user_id = %user_id))]
    pub async fn handle_user_turn(&self, user_id: UserId, text: &str) -> AiOrderResponse {
        let context = self.store.chat_messages(user_id);

        self.store.create_chat_message(NewChatMessage {
            user_id,
            message: text.to_string(),
            is_from_user: true,
        });

        let response = match self.assistant.interpret(text, &context).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "assistant unavailable, degrading to fallback");
                fallback_response()
            }
        };

        self.store.create_chat_message(NewChatMessage {
            user_id,
            message: response.message.clone(),
            is_from_user: false,
        });

        response
    }

    /// Ask the assistant for an order summary, degrading to the fixed
    /// summary line on failure.
    #[instrument(skip(self, items))]
    pub async fn summarize_order(&self, items: &[ChatOrderItem]) -> String {
        match self.assistant.summarize_order(items).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "assistant summary failed, using fallback");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }
}
