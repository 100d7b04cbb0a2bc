use std::path::Path;

use crate::{
    commands::Command,
    handlers::{command_handler, message_handler},
    models::{AppState, IncomingMessage},
};

/// Handles one raw console line and returns the reply to print, if any.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, and a
/// line that is not a command or a message is logged and skipped. Nothing
/// here ends the read loop.
pub fn process_line(state: &AppState, config_path: &Path, raw: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(raw);
    let line = text.trim();
    if line.is_empty() {
        return None;
    }

    if Command::is_command(line) {
        let reply = match line
            .parse::<Command>()
            .and_then(|cmd| command_handler::handle_command(state, cmd, config_path))
        {
            Ok(reply) => reply,
            Err(e) => {
                log::error!("❌ Command failed: {:#}", e);
                format!("❌ {:#}", e)
            }
        };
        return Some(reply.trim_end().to_string());
    }

    let msg: IncomingMessage = match serde_json::from_str(line) {
        Ok(msg) => msg,
        Err(e) => {
            log::warn!("⚠️ Skipping malformed message: {}", e);
            return None;
        }
    };

    let outcome = message_handler::handle_message(state, &msg);
    if let message_handler::ModerationOutcome::Censored { audit, .. } = &outcome {
        match serde_json::to_string(audit) {
            Ok(json) => log::info!(target: "audit", "{}", json),
            Err(e) => log::error!("❌ Could not serialize audit entry: {}", e),
        }
    }

    match serde_json::to_string(&outcome) {
        Ok(reply) => Some(reply),
        Err(e) => {
            log::error!("❌ Could not serialize outcome: {}", e);
            None
        }
    }
}
