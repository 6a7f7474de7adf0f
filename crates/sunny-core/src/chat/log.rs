//! Bounded per-session conversation log.
//!
//! `ConversationLog` maps a session id to its most recent exchanges, backed
//! by `DashMap`. Every mutation of a session runs under that key's shard
//! guard, so concurrent writers to the same session are serialized and the
//! length cap holds. Reads return cloned values -- never hold a `DashMap`
//! guard across `.await`.
//!
//! Sessions are never expired; they live until cleared or process exit.

use std::collections::VecDeque;
use std::sync::Arc;

use dashmap::DashMap;
use sunny_types::chat::ConversationEntry;
use sunny_types::config::DEFAULT_HISTORY_LIMIT;

/// Process-wide store of recent exchanges per session.
///
/// Cloning produces a shared view of the same underlying map.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    sessions: Arc<DashMap<String, VecDeque<ConversationEntry>>>,
    limit: usize,
}

impl ConversationLog {
    /// Create an empty log keeping at most `limit` exchanges per session.
    ///
    /// A limit of zero is raised to one.
    pub fn new(limit: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            limit: limit.max(1),
        }
    }

    /// Maximum exchanges kept per session.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Append an exchange, evicting the oldest ones beyond the limit.
    ///
    /// Returns the session's length after the append.
    pub fn record(&self, session_id: &str, user_message: &str, bot_reply: &str) -> usize {
        let mut entries = self.sessions.entry(session_id.to_string()).or_default();
        entries.push_back(ConversationEntry::new(user_message, bot_reply));
        while entries.len() > self.limit {
            entries.pop_front();
        }
        entries.len()
    }

    /// Drop a session entirely. Returns whether it existed.
    pub fn clear(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Snapshot of a session's exchanges, oldest first. Empty if unknown.
    pub fn history(&self, session_id: &str) -> Vec<ConversationEntry> {
        self.sessions
            .get(session_id)
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of exchanges currently held for a session.
    pub fn len(&self, session_id: &str) -> usize {
        self.sessions.get(session_id).map_or(0, |entries| entries.len())
    }

    /// Number of sessions with at least one recorded exchange.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

impl Default for ConversationLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_read_back() {
        let log = ConversationLog::default();
        assert_eq!(log.record("s1", "hi", "hello"), 1);
        let history = log.history("s1");
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].user_message, "hi");
        assert_eq!(history[0].bot_reply, "hello");
    }

    #[test]
    fn test_never_exceeds_limit_and_evicts_oldest_first() {
        let log = ConversationLog::new(5);
        for i in 0..12 {
            let len = log.record("s1", &format!("msg {i}"), "reply");
            assert!(len <= 5);
        }
        let history = log.history("s1");
        assert_eq!(history.len(), 5);
        let messages: Vec<_> = history.iter().map(|e| e.user_message.as_str()).collect();
        assert_eq!(messages, vec!["msg 7", "msg 8", "msg 9", "msg 10", "msg 11"]);
    }

    #[test]
    fn test_sessions_are_independent() {
        let log = ConversationLog::default();
        log.record("a", "one", "r");
        log.record("b", "two", "r");
        log.record("b", "three", "r");
        assert_eq!(log.len("a"), 1);
        assert_eq!(log.len("b"), 2);
        assert_eq!(log.session_count(), 2);
    }

    #[test]
    fn test_clear_removes_session() {
        let log = ConversationLog::default();
        log.record("s1", "hi", "hello");
        assert!(log.clear("s1"));
        assert!(log.history("s1").is_empty());
        assert_eq!(log.session_count(), 0);
    }

    #[test]
    fn test_clear_unknown_session_is_fine() {
        let log = ConversationLog::default();
        assert!(!log.clear("nobody"));
        assert_eq!(log.len("nobody"), 0);
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let log = ConversationLog::new(0);
        assert_eq!(log.limit(), 1);
        log.record("s", "a", "b");
        log.record("s", "c", "d");
        assert_eq!(log.history("s")[0].user_message, "c");
    }

    #[test]
    fn test_clones_share_state() {
        let log = ConversationLog::default();
        let other = log.clone();
        other.record("s", "hi", "hello");
        assert_eq!(log.len("s"), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_respect_limit() {
        let log = ConversationLog::new(5);
        let mut handles = Vec::new();
        for task in 0..8 {
            let log = log.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..50 {
                    log.record("shared", &format!("{task}-{i}"), "r");
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(log.len("shared"), 5);
    }
}
