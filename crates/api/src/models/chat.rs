//! Chat transcript domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dastak_core::{ChatMessageId, UserId};

/// One message in a user's chat transcript.
///
/// Transcripts are append-only and ordered by `created_at` ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique message ID.
    pub id: ChatMessageId,
    /// User whose transcript this message belongs to.
    pub user_id: UserId,
    /// Message text.
    pub message: String,
    /// True for the user's own messages, false for assistant replies.
    pub is_from_user: bool,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
}

/// Insertion shape for [`ChatMessage`]. Timestamp is server-assigned.
#[derive(Debug, Clone)]
pub struct NewChatMessage {
    pub user_id: UserId,
    pub message: String,
    pub is_from_user: bool,
}
