use dotenvy::dotenv;
use product_console::{
    bot, config,
    core::{Console, HttpProductApi},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the main application configuration (logs what it resolved)
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Critical error loading application configuration: {}", e))?;

    // 4. Build the API client and open the console with an initial product load
    let api = HttpProductApi::new(&app_config.api_base_url)
        .inspect(|api| info!("Inventory API client ready for {}", api.base_url()))
        .inspect_err(|e| error!("Failed to create inventory API client: {}", e))?;
    let console = Console::open(api).await;

    // 5. Run the bot
    // DISCORD_BOT_TOKEN is loaded here, directly before use, not stored in AppConfig
    let token = config::discord::get_bot_token()
        .inspect_err(|e| error!("DISCORD_BOT_TOKEN not found: {}", e))?;

    bot::run_bot(token, app_config, console).await
}
