use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::diagnostics::DiagnosticSink;
use crate::services::filter_handle::FilterHandle;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IncomingMessage {
    pub author_id: i64,
    pub author_name: String,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub channel_id: i64,
    pub content: String,
}

/// Censored copy of a removed message, posted under the author's name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Repost {
    pub author_name: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuditEntry {
    pub title: String,
    pub description: String,
    pub user_id: i64,
    pub user_name: String,
    pub channel_id: i64,
    pub original_message: String,
    pub detected_word: String,
    pub log_channel_id: i64,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn banned_word(msg: &IncomingMessage, detected_word: &str, log_channel_id: i64) -> Self {
        Self {
            title: "Banned Word Detected".to_string(),
            description: "A message containing a banned word has been removed.".to_string(),
            user_id: msg.author_id,
            user_name: msg.author_name.clone(),
            channel_id: msg.channel_id,
            original_message: msg.content.clone(),
            detected_word: detected_word.to_string(),
            log_channel_id,
            timestamp: Utc::now(),
        }
    }
}

pub struct AppState {
    pub filter: FilterHandle,
    pub log_channel_id: i64,
    pub sink: Arc<dyn DiagnosticSink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_message_defaults() {
        let msg: IncomingMessage =
            serde_json::from_str(r#"{"author_id": 1, "author_name": "ann", "content": "hi"}"#).unwrap();
        assert!(!msg.is_bot);
        assert_eq!(msg.channel_id, 0);
    }

    #[test]
    fn audit_entry_carries_message_details() {
        let msg = IncomingMessage {
            author_id: 9,
            author_name: "ann".to_string(),
            is_bot: false,
            channel_id: 3,
            content: "so b4d".to_string(),
        };
        let entry = AuditEntry::banned_word(&msg, "bad", 77);
        assert_eq!(entry.title, "Banned Word Detected");
        assert_eq!(entry.user_id, 9);
        assert_eq!(entry.channel_id, 3);
        assert_eq!(entry.original_message, "so b4d");
        assert_eq!(entry.detected_word, "bad");
        assert_eq!(entry.log_channel_id, 77);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["detected_word"], "bad");
        assert_eq!(json["channel_id"], 3);
    }
}
