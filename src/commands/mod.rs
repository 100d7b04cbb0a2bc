use std::str::FromStr;

use anyhow::{anyhow, bail};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Re-read the config file and swap in a fresh word filter.
    Reload,
    /// Dry-run a text through the filter without producing an audit entry.
    Check(String),
    Words,
}

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("/help", "📜 Show this help message"),
    ("/reload", "🔄 Reload the banned word list from the config file"),
    ("/check <text>", "🔍 Test a text against the filter"),
    ("/words", "📋 List the active banned words"),
];

impl Command {
    pub fn descriptions() -> String {
        let mut out = String::from("✨ Available commands:\n");
        for (usage, description) in DESCRIPTIONS {
            out.push_str(&format!("{} - {}\n", usage, description));
        }
        out
    }

    pub fn is_command(line: &str) -> bool {
        line.trim_start().starts_with('/')
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let body = line
            .strip_prefix('/')
            .ok_or_else(|| anyhow!("commands start with '/'"))?;
        let (name, args) = match body.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (body, ""),
        };

        match name.to_lowercase().as_str() {
            "help" => Ok(Command::Help),
            "reload" => Ok(Command::Reload),
            "words" => Ok(Command::Words),
            "check" if args.is_empty() => bail!("usage: /check <text>"),
            "check" => Ok(Command::Check(args.to_string())),
            other => bail!("unknown command '/{}'", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!("/help".parse::<Command>().unwrap(), Command::Help);
        assert_eq!("  /RELOAD ".parse::<Command>().unwrap(), Command::Reload);
        assert_eq!("/words".parse::<Command>().unwrap(), Command::Words);
        assert_eq!(
            "/check  you are b4d ".parse::<Command>().unwrap(),
            Command::Check("you are b4d".to_string())
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!("/check".parse::<Command>().is_err());
        assert!("/nope".parse::<Command>().is_err());
        assert!("help".parse::<Command>().is_err());
    }

    #[test]
    fn detects_command_lines() {
        assert!(Command::is_command("  /help"));
        assert!(!Command::is_command(r#"{"content": "/help"}"#));
    }

    #[test]
    fn descriptions_list_every_command() {
        let text = Command::descriptions();
        for (usage, _) in DESCRIPTIONS {
            assert!(text.contains(usage));
        }
    }
}
