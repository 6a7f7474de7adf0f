//! Chat exchange types.
//!
//! A `ConversationEntry` records one user message and the bot's reply.
//! Field names are camelCase on the wire to match the browser client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user message paired with the reply it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationEntry {
    pub user_message: String,
    pub bot_reply: String,
    pub timestamp: DateTime<Utc>,
}

impl ConversationEntry {
    /// Create an entry stamped with the current time.
    pub fn new(user_message: impl Into<String>, bot_reply: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            bot_reply: bot_reply.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Body of `POST /api/chat`.
///
/// Both fields are optional at the deserialization layer so a missing
/// message can be reported as a validation error instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

/// Response of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub message: String,
    pub session_id: String,
}

/// Body of `POST /api/chat/clear`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearRequest {
    pub session_id: Option<String>,
}
