use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use automod_bot::handlers::line_handler;
use automod_bot::models::AppState;
use automod_bot::services::config_service;
use automod_bot::services::diagnostics::{DiagnosticSink, LogSink};
use automod_bot::services::filter_handle::FilterHandle;
use automod_bot::services::word_filter::WordFilter;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    log::info!("🚀 Starting automod...");

    dotenvy::dotenv().ok();

    let config_path = config_service::config_path();
    let config = config_service::load_config(&config_path)?;

    let sink: Arc<dyn DiagnosticSink> = Arc::new(LogSink);
    let filter = WordFilter::with_builtin_table(&config.banned_words, sink.as_ref())?;

    let state = AppState {
        filter: FilterHandle::new(filter),
        log_channel_id: config.log_channel_id,
        sink,
    };

    log::info!("✅ Ready, reading messages from stdin (one JSON object per line)");

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        if let Some(reply) = line_handler::process_line(&state, &config_path, &buf) {
            stdout.write_all(reply.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    log::info!("👋 Input closed, shutting down");
    Ok(())
}
