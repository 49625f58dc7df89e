//! Bot layer - Discord-specific interface to the product console
//!
//! This module provides the Discord surface for the console: slash commands stand in
//! for the form inputs and buttons, and embeds render the form and the product table.

/// Discord command implementations (product, general)
pub mod commands;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Embed and reply builders for console state
pub mod views;

use crate::{
    config::AppConfig,
    core::{Console, HttpProductApi},
    errors::{Error, Result},
};
use poise::serenity_prelude as serenity;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

/// Shared data available to all bot commands.
///
/// There is exactly one console. The mutex makes overlapping interactions run one
/// after another, so an action always sees the state its predecessor left behind.
pub struct BotData {
    /// The console every command drives
    pub console: Mutex<Console<HttpProductApi>>,
}

impl BotData {
    /// Creates a new `BotData` around an already opened console.
    #[must_use]
    pub fn new(console: Console<HttpProductApi>) -> Self {
        Self {
            console: Mutex::new(console),
        }
    }
}

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("An error occurred: {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Connects to Discord and serves the console until the client stops.
///
/// Commands are registered in `app_config.guild_id` when set, globally otherwise.
///
/// # Errors
/// Returns `Error::FrameworkError` if the client cannot be created or the gateway
/// connection fails.
#[instrument(skip(token, console))]
pub async fn run_bot(
    token: String,
    app_config: AppConfig,
    console: Console<HttpProductApi>,
) -> Result<()> {
    let guild_id = app_config.guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::product(), commands::ping(), commands::help()],
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);
                if let Some(guild_id) = guild_id {
                    info!("Registering commands in guild {}...", guild_id);
                    poise::builtins::register_in_guild(
                        ctx,
                        &framework.options().commands,
                        serenity::GuildId::new(guild_id),
                    )
                    .await?;
                } else {
                    info!("Registering commands globally...");
                    poise::builtins::register_globally(ctx, &framework.options().commands)
                        .await?;
                }
                Ok(BotData::new(console))
            })
        })
        .build();

    // Slash commands only; no privileged intents needed
    let intents = serenity::GatewayIntents::non_privileged();

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Starting bot client...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;

    Ok(())
}
