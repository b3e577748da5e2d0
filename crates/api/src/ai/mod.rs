//! AI assistant capability.
//!
//! The chat flow never talks to a provider directly: it goes through the
//! [`Assistant`] trait, injected at state construction. Production wires up
//! [`OpenRouterClient`]; tests inject stubs. Provider failures are expected
//! and degrade to [`fallback_response`] / [`FALLBACK_SUMMARY`] - they are
//! never surfaced raw.

pub mod client;
pub mod error;
pub mod types;

use futures::future::BoxFuture;

use crate::models::{ChatMessage, ChatOrderItem};

pub use client::OpenRouterClient;
pub use error::AiError;
pub use types::{AiOrderResponse, Intent, ItemCategory, ParsedItem};

/// Fixed summary used when the provider cannot produce one.
pub const FALLBACK_SUMMARY: &str = "Your order is ready for confirmation.";

/// The external language-model capability.
///
/// One request/response turn, no retries; callers own the degrade-on-error
/// policy.
pub trait Assistant: Send + Sync {
    /// Interpret one free-text user turn against the transcript so far.
    fn interpret<'a>(
        &'a self,
        text: &'a str,
        context: &'a [ChatMessage],
    ) -> BoxFuture<'a, Result<AiOrderResponse, AiError>>;

    /// Produce a human-readable summary for a set of order items.
    fn summarize_order<'a>(
        &'a self,
        items: &'a [ChatOrderItem],
    ) -> BoxFuture<'a, Result<String, AiError>>;
}

/// The fixed degraded reply used when the provider is unavailable.
#[must_use]
pub fn fallback_response() -> AiOrderResponse {
    AiOrderResponse {
        intent: Intent::Other,
        items: Vec::new(),
        location: None,
        message: "I'm sorry, I'm having trouble understanding right now. \
                  Please try again or contact our support team."
            .to_string(),
        requires_human_help: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_response_shape() {
        let fallback = fallback_response();
        assert_eq!(fallback.intent, Intent::Other);
        assert!(fallback.requires_human_help);
        assert!(fallback.items.is_empty());
        assert!(fallback.message.contains("sorry"));
    }
}
