//! Chat service tying the responder to the conversation log.
//!
//! One call handles one exchange: validate the message, compute the reply,
//! record the pair, and hand the reply back.

use sunny_types::error::ChatError;
use tracing::debug;

use crate::chat::log::ConversationLog;
use crate::responder::Responder;

/// Handles chat exchanges for every session.
#[derive(Debug, Clone)]
pub struct ChatService {
    responder: Responder,
    log: ConversationLog,
}

impl ChatService {
    /// Create a chat service over the given responder and log.
    pub fn new(responder: Responder, log: ConversationLog) -> Self {
        Self { responder, log }
    }

    /// Access the conversation log.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Reply to `message` within `session_id` and record the exchange.
    ///
    /// An empty message is rejected before anything is recorded. Whitespace
    /// is still a message and gets the fallback reply.
    pub fn reply(&self, session_id: &str, message: &str) -> Result<String, ChatError> {
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let reply = self.responder.respond(message);
        let len = self.log.record(session_id, message, &reply.text);
        debug!(
            session_id,
            rule = reply.rule.unwrap_or("fallback"),
            history_len = len,
            "Chat exchange recorded"
        );

        Ok(reply.text)
    }

    /// Forget a session's history.
    pub fn clear(&self, session_id: &str) {
        if self.log.clear(session_id) {
            debug!(session_id, "Conversation cleared");
        }
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(Responder::new(), ConversationLog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::rules::{FALLBACK_HINT, GREETING_REPLIES, STRAWBERRY_REPLY};

    #[test]
    fn test_reply_records_exchange() {
        let service = ChatService::default();
        let reply = service.reply("s1", "hi").unwrap();
        assert!(GREETING_REPLIES.contains(&reply.as_str()));

        let history = service.log().history("s1");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_message, "hi");
        assert_eq!(history[0].bot_reply, reply);
    }

    #[test]
    fn test_reply_exact_product_answer() {
        let service = ChatService::default();
        assert_eq!(
            service.reply("s1", "do you have strawberry?").unwrap(),
            STRAWBERRY_REPLY
        );
    }

    #[test]
    fn test_empty_message_rejected_without_recording() {
        let service = ChatService::default();
        assert!(matches!(service.reply("s1", ""), Err(ChatError::EmptyMessage)));
        assert_eq!(service.log().session_count(), 0);
    }

    #[test]
    fn test_whitespace_message_gets_fallback() {
        let service = ChatService::default();
        let reply = service.reply("s1", "   ").unwrap();
        assert!(reply.ends_with(FALLBACK_HINT));
        assert_eq!(service.log().len("s1"), 1);
    }

    #[test]
    fn test_six_exchanges_keep_five() {
        let service = ChatService::default();
        for _ in 0..6 {
            service.reply("s1", "hello").unwrap();
        }
        assert_eq!(service.log().len("s1"), 5);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let service = ChatService::default();
        service.reply("s1", "hi").unwrap();
        service.clear("s1");
        service.clear("s1");
        assert!(service.log().history("s1").is_empty());
    }
}
