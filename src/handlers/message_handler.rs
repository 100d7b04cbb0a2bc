use std::panic::{self, AssertUnwindSafe};

use log::Level;
use serde::Serialize;

use crate::{
    models::{AppState, AuditEntry, IncomingMessage, Repost},
    services::{
        diagnostics::DiagnosticSink,
        word_filter::{MatchResult, WordFilter},
    },
};

/// What the moderation layer asks the transport to do with a message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ModerationOutcome {
    /// Bot messages are never moderated.
    Ignored,
    Allowed,
    /// Delete the original, post `repost` in its place and send `audit` to
    /// the log channel.
    Censored { repost: Repost, audit: AuditEntry },
}

pub trait Detector {
    fn find_banned_word(&self, text: &str) -> MatchResult;
    fn censor(&self, text: &str) -> String;
}

impl Detector for WordFilter {
    fn find_banned_word(&self, text: &str) -> MatchResult {
        WordFilter::find_banned_word(self, text)
    }

    fn censor(&self, text: &str) -> String {
        WordFilter::censor(self, text)
    }
}

/// Runs `detector` over `msg`.
///
/// A fault inside the detector fails open: it is reported to `sink` and the
/// message is allowed, so one bad message never stops the pipeline.
pub fn moderate(
    detector: &dyn Detector,
    msg: &IncomingMessage,
    log_channel_id: i64,
    sink: &dyn DiagnosticSink,
) -> ModerationOutcome {
    if msg.is_bot {
        return ModerationOutcome::Ignored;
    }

    let verdict = panic::catch_unwind(AssertUnwindSafe(|| {
        match detector.find_banned_word(&msg.content) {
            MatchResult::NoMatch => None,
            MatchResult::Matched(word) => Some((word, detector.censor(&msg.content))),
        }
    }));

    match verdict {
        Ok(None) => ModerationOutcome::Allowed,
        Ok(Some((word, censored))) => {
            sink.report(
                Level::Info,
                &format!(
                    "🚫 banned word '{}' from user {} in channel {}",
                    word, msg.author_id, msg.channel_id
                ),
            );
            ModerationOutcome::Censored {
                repost: Repost {
                    author_name: msg.author_name.clone(),
                    content: censored,
                },
                audit: AuditEntry::banned_word(msg, &word, log_channel_id),
            }
        }
        Err(cause) => {
            let reason = cause
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| cause.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown fault".to_string());
            sink.report(
                Level::Error,
                &format!(
                    "❌ word filter failed on message from user {}, letting it through: {}",
                    msg.author_id, reason
                ),
            );
            ModerationOutcome::Allowed
        }
    }
}

pub fn handle_message(state: &AppState, msg: &IncomingMessage) -> ModerationOutcome {
    let filter = state.filter.current();
    moderate(filter.as_ref(), msg, state.log_channel_id, state.sink.as_ref())
}
