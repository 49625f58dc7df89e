//! Console settings loading from config.toml
//!
//! Every key is optional. A missing file is the same as an empty one, so the bot can
//! start with nothing but a `DISCORD_BOT_TOKEN` in the environment.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Inventory API settings
    pub api: ApiSettings,
    /// Discord settings
    pub bot: BotSettings,
}

/// `[api]` table
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiSettings {
    /// Root URL of the inventory API
    pub base_url: Option<String>,
}

/// `[bot]` table
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BotSettings {
    /// Guild to register commands in instead of globally (faster updates during dev)
    pub guild_id: Option<u64>,
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid or a value has the wrong type.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file, treating a missing file as empty.
///
/// # Errors
/// Returns `Error::Io` if the file exists but cannot be read, or `Error::Config` if
/// the TOML syntax is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {:?}; using defaults", path);
            Ok(Config::default())
        }
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Err(e.into())
        }
    }
}

/// Loads settings from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [api]
            base_url = "http://localhost:3000/"

            [bot]
            guild_id = 123456789012345678
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("http://localhost:3000/")
        );
        assert_eq!(config.bot.guild_id, Some(123_456_789_012_345_678));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_rejects_wrong_types() {
        let result = parse_config("[bot]\nguild_id = \"not a number\"\n");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_empty_config() {
        let config = load_config("definitely/not/here/config.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        // A directory exists but cannot be read as a file
        let result = load_config(std::env::temp_dir());
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
