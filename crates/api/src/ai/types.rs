//! Types for the AI provider.
//!
//! [`AiOrderResponse`] is the contract both directions: the assistant is
//! instructed to reply with exactly this JSON shape, and the same object is
//! returned verbatim to the client so it can decide whether to offer order
//! creation.

use serde::{Deserialize, Serialize};

/// What the assistant believes the user wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// The user wants to order items.
    Order,
    /// The user is asking a question.
    Inquiry,
    /// The user is unhappy about something.
    Complaint,
    /// Anything else, including unrecognized classifications.
    #[default]
    Other,
}

// Lenient on input: the provider is only instructed, not guaranteed, to
// stick to the four known values, and an unknown one must not fail the turn.
impl<'de> Deserialize<'de> for Intent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "order" => Self::Order,
            "inquiry" => Self::Inquiry,
            "complaint" => Self::Complaint,
            _ => Self::Other,
        })
    }
}

/// Catalog section an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Food,
    Medicine,
    Groceries,
}

/// One item the assistant parsed out of free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItem {
    /// Item name as the user phrased it.
    pub name: String,
    /// Requested quantity.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Category, when the assistant could classify the item.
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<ItemCategory>,
    /// Extra details ("large pack", "sugar free").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
}

const fn default_quantity() -> u32 {
    1
}

/// Deserialize a category, mapping unknown values to `None` instead of
/// failing the whole interpretation.
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<ItemCategory>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| match s {
        "food" => Some(ItemCategory::Food),
        "medicine" => Some(ItemCategory::Medicine),
        "groceries" => Some(ItemCategory::Groceries),
        _ => None,
    }))
}

/// The assistant's interpretation of one user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiOrderResponse {
    /// Classified intent.
    #[serde(default)]
    pub intent: Intent,
    /// Items parsed from an order request, empty otherwise.
    #[serde(default)]
    pub items: Vec<ParsedItem>,
    /// Delivery location, when the user mentioned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The reply shown (and persisted) as the assistant's message.
    pub message: String,
    /// Whether the request should be escalated to a human.
    #[serde(default)]
    pub requires_human_help: bool,
}

// =============================================================================
// Chat-completions wire types (OpenAI-compatible endpoint)
// =============================================================================

/// Request body for the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Conversation messages, system prompt first.
    pub messages: Vec<CompletionMessage>,
    /// Response format constraint (e.g. JSON object mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// One message in a completion conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionMessage {
    /// "system", "user" or "assistant".
    pub role: String,
    /// Message text.
    #[serde(default)]
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Response format constraint.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    /// Format kind; "json_object" forces strict-JSON replies.
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// Strict-JSON reply mode.
    #[must_use]
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_string(),
        }
    }
}

/// Response body from the chat completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    /// Generated choices; the first one is used.
    pub choices: Vec<CompletionChoice>,
}

/// One generated completion.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// The generated message.
    pub message: CompletionMessage,
}
