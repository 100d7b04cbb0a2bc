use std::path::Path;

use anyhow::Result;

use crate::{
    commands::Command,
    models::AppState,
    services::{config_service, filter_handle, word_filter::MatchResult},
};

/// Executes `cmd` and returns the reply to show the operator.
pub fn handle_command(state: &AppState, cmd: Command, config_path: &Path) -> Result<String> {
    log::info!("📝 Received command: {:?}", cmd);

    let reply = match cmd {
        Command::Help => Command::descriptions(),
        Command::Reload => {
            let config = config_service::load_config(config_path)?;
            if config.log_channel_id != state.log_channel_id {
                log::warn!(
                    "⚠️ LOG_CHANNEL_ID changed to {}, restart to route audits there",
                    config.log_channel_id
                );
            }
            let count = filter_handle::rebuild(&state.filter, &config.banned_words, state.sink.as_ref())?;
            format!("✅ Reloaded {} banned words.", count)
        }
        Command::Check(text) => match state.filter.current().find_banned_word(&text) {
            MatchResult::NoMatch => "✅ Clean, this message would be allowed.".to_string(),
            MatchResult::Matched(word) => {
                format!("🚫 This message would be removed (matched '{}').", word)
            }
        },
        Command::Words => {
            let filter = state.filter.current();
            let mut message = format!("📋 {} banned words:\n", filter.words().len());
            for word in filter.words() {
                message.push_str(&format!("• {}\n", word));
            }
            message
        }
    };

    Ok(reply)
}
