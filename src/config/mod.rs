//! Configuration management for the console: config.toml plus environment overrides.

/// Inventory API root URL resolution
pub mod api;

/// Discord token and guild settings from environment variables
pub mod discord;

/// config.toml loading
pub mod settings;

use crate::errors::Result;
use tracing::info;

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root URL of the inventory API
    pub api_base_url: String,
    /// Guild for command registration; `None` registers globally
    pub guild_id: Option<u64>,
}

/// Combines config.toml with environment overrides.
///
/// `DEV_GUILD_ID` takes precedence over `[bot] guild_id`.
#[must_use]
pub fn resolve_app_configuration(
    file: &settings::Config,
    env_api_url: Option<String>,
    env_guild_id: Option<u64>,
) -> AppConfig {
    AppConfig {
        api_base_url: api::resolve_api_base_url(env_api_url, file.api.base_url.as_deref()),
        guild_id: env_guild_id.or(file.bot.guild_id),
    }
}

/// Loads ./config.toml and applies environment overrides.
///
/// # Errors
/// Returns `Error::Config` if config.toml exists but is invalid, or if `DEV_GUILD_ID`
/// is not a guild ID.
pub fn load_app_configuration() -> Result<AppConfig> {
    let file = settings::load_default_config()?;
    let app_config = resolve_app_configuration(
        &file,
        std::env::var(api::API_URL_ENV).ok(),
        discord::get_dev_guild_id()?,
    );
    info!(
        api_base_url = %app_config.api_base_url,
        guild_id = ?app_config.guild_id,
        "Loaded application configuration"
    );
    Ok(app_config)
}
