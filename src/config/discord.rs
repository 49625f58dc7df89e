//! Discord settings read from environment variables.
//!
//! The bot token is read right before connecting and never stored in `AppConfig`.

use crate::errors::{Error, Result};

/// Environment variable holding the bot token.
pub const TOKEN_ENV: &str = "DISCORD_BOT_TOKEN";

/// Environment variable naming a development guild for instant command registration.
pub const DEV_GUILD_ENV: &str = "DEV_GUILD_ID";

/// Reads the bot token.
///
/// # Errors
/// Returns `Error::EnvVar` if `DISCORD_BOT_TOKEN` is unset or not unicode.
pub fn get_bot_token() -> Result<String> {
    std::env::var(TOKEN_ENV).map_err(Error::EnvVar)
}

/// Parses a guild ID value.
///
/// # Errors
/// Returns `Error::Config` if the value is not a Discord snowflake (a non-zero u64).
pub fn parse_guild_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| Error::Config {
            message: format!("{DEV_GUILD_ENV} must be a Discord guild ID, got '{raw}'"),
        })
}

/// Reads `DEV_GUILD_ID`, if set and non-blank.
///
/// # Errors
/// Returns `Error::Config` if the variable is set to something that is not a guild ID.
pub fn get_dev_guild_id() -> Result<Option<u64>> {
    match std::env::var(DEV_GUILD_ENV) {
        Ok(raw) if !raw.trim().is_empty() => parse_guild_id(&raw).map(Some),
        _ => Ok(None),
    }
}
