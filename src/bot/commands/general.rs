//! General Discord commands - ping and help.
//! This module contains simple commands that never touch the console
//! and provide basic bot functionality and user assistance.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    ///
    /// This is a simple health check command that doesn't call the inventory API.
    #[poise::command(slash_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Product Console Help**\n\
        Manage the product inventory from Discord.\n\n\
        **Browsing**\n\
        • `/product list` - Shows every product in a table.\n\
        • `/product search [query]` - Shows products whose name matches. An empty query lists everything.\n\n\
        **Editing**\n\
        • `/product add <name> <cost> <price> <quantity>` - Adds a new product.\n\
        • `/product edit <id>` - Loads a product into the form.\n\
        • `/product update [name] [cost] [price] [quantity]` - Saves changes to the loaded product.\n\
        • `/product delete <id>` - Deletes a product.\n\
        • `/product form` - Shows the form.\n\
        • `/product clear` - Clears the form.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.\n\n\
        Cost, price and quantity must be numbers; all four values are required.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
