use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde_json::{Map, Value};

const DEFAULT_CONFIG_PATH: &str = "config.json";
const CONFIG_PATH_VAR: &str = "AUTOMOD_CONFIG";

#[derive(Debug, Clone)]
pub struct ModerationConfig {
    pub banned_words: Vec<String>,
    /// Where violation audit entries are routed.
    pub log_channel_id: i64,
    pub settings: Map<String, Value>,
}

impl ModerationConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Value = serde_json::from_str(raw).context("invalid JSON in configuration")?;
        let Value::Object(config) = config else {
            bail!("configuration must be a JSON object");
        };

        let banned_words = match config.get("BANNED_WORDS") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| anyhow!("'BANNED_WORDS' entries must be strings, got {}", item))
                })
                .collect::<Result<Vec<_>>>()?,
            Some(_) => bail!("'BANNED_WORDS' must be a list"),
        };

        let settings = match config.get("MODERATION_SETTINGS") {
            None => Map::new(),
            Some(Value::Object(settings)) => settings.clone(),
            Some(_) => bail!("'MODERATION_SETTINGS' must be a dictionary"),
        };

        let log_channel_id = match config.get("LOG_CHANNEL_ID") {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .filter(|id| *id != 0)
        .ok_or_else(|| anyhow!("'LOG_CHANNEL_ID' must be set"))?;

        Ok(Self {
            banned_words,
            log_channel_id,
            settings,
        })
    }
}

/// Config file location, taken from `AUTOMOD_CONFIG` when set.
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Reads and validates the config file. A missing file is created empty so
/// the operator has something to fill in, and the call still fails.
pub fn load_config(path: &Path) -> Result<ModerationConfig> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(path, "")
                .with_context(|| format!("failed to create {}", path.display()))?;
            log::info!("📄 Created empty configuration file at {}", path.display());
            bail!(
                "configuration file not found at {}. An empty file has been created, please fill it in",
                path.display()
            );
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read {}", path.display()));
        }
    };

    ModerationConfig::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
}
