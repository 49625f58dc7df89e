//! Product Discord commands - the `/product` console.
//!
//! Each subcommand is one console action: the slash-command options play the part of
//! the form inputs and the search box, and every reply re-renders the relevant state.
//! Failures are shown to the user and recorded by the console, never propagated;
//! only Discord errors reach `on_error`.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{BotData, handlers::autocomplete, views},
        core::validation::FormField,
        entities::ProductId,
        errors::{Error, Result},
    };

    /// Parent command for the product console.
    ///
    /// Groups subcommands for listing, searching, adding, editing, updating and
    /// deleting products held by the inventory API.
    #[poise::command(
        slash_command,
        subcommands(
            "product_list",
            "product_search",
            "product_add",
            "product_edit",
            "product_update",
            "product_delete",
            "product_form",
            "product_clear"
        )
    )]
    pub async fn product(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Product console. Available subcommands:\n\
            `/product list` - Show all products\n\
            `/product search [query]` - Search products by name\n\
            `/product add` - Add a new product\n\
            `/product edit <id>` - Load a product into the form\n\
            `/product update` - Save changes to the loaded product\n\
            `/product delete <id>` - Delete a product\n\
            `/product form` - Show the form\n\
            `/product clear` - Clear the form";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Fetches every product and shows the table.
    #[poise::command(slash_command, rename = "list")]
    pub async fn product_list(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer().await?;

        let reply = {
            let mut console = ctx.data().console.lock().await;
            // Outcome is recorded in the console and rendered below
            let _ = console.show_products().await;
            views::console_reply(&console, None, false)
        };

        ctx.send(reply).await?;
        Ok(())
    }

    /// Searches products by name. Leave the query empty to list everything.
    #[poise::command(slash_command, rename = "search")]
    pub async fn product_search(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Text to search for (e.g., 'pen')"] query: Option<String>,
    ) -> Result<()> {
        ctx.defer().await?;

        let reply = {
            let mut console = ctx.data().console.lock().await;
            console.set_search_text(query.unwrap_or_default());
            let _ = console.search().await;
            views::console_reply(&console, None, false)
        };

        ctx.send(reply).await?;
        Ok(())
    }

    /// Adds a new product from the given values.
    ///
    /// Values are validated before anything is sent: all four are required and cost,
    /// price and quantity must be numbers.
    #[poise::command(slash_command, rename = "add")]
    pub async fn product_add(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Product name (e.g., 'Pen')"] name: String,
        #[description = "Cost per unit (e.g., 5)"] cost: String,
        #[description = "Selling price per unit (e.g., 8)"] price: String,
        #[description = "Quantity available (e.g., 100)"] quantity: String,
    ) -> Result<()> {
        ctx.defer().await?;

        let reply = {
            let mut console = ctx.data().console.lock().await;
            console.edit_field(FormField::Name, name);
            console.edit_field(FormField::Cost, cost);
            console.edit_field(FormField::Price, price);
            console.edit_field(FormField::QuantityAvailable, quantity);

            match console.create().await {
                Ok(notice) => views::console_reply(&console, Some(&notice.to_string()), false),
                // Keep the rejected values visible so they can be corrected
                Err(_) => views::console_reply(&console, None, true),
            }
        };

        ctx.send(reply).await?;
        Ok(())
    }

    /// Loads a product into the form for editing.
    #[poise::command(slash_command, rename = "edit")]
    pub async fn product_edit(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "ID of the product to edit"]
        #[autocomplete = "autocomplete::autocomplete_product_id"]
        id: String,
    ) -> Result<()> {
        ctx.defer().await?;
        let id = ProductId::new(id);

        let reply = {
            let mut console = ctx.data().console.lock().await;
            let loaded = console.load_for_edit(&id).await.is_ok();
            views::console_reply(&console, None, loaded)
        };

        ctx.send(reply).await?;
        Ok(())
    }

    /// Saves changes to the product loaded with `/product edit`.
    ///
    /// Only the values given here are changed in the form; the rest keep what was
    /// loaded.
    #[poise::command(slash_command, rename = "update")]
    pub async fn product_update(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "New name"] name: Option<String>,
        #[description = "New cost per unit"] cost: Option<String>,
        #[description = "New selling price per unit"] price: Option<String>,
        #[description = "New quantity available"] quantity: Option<String>,
    ) -> Result<()> {
        ctx.defer().await?;

        let reply = {
            let mut console = ctx.data().console.lock().await;
            let edits = [
                (FormField::Name, name),
                (FormField::Cost, cost),
                (FormField::Price, price),
                (FormField::QuantityAvailable, quantity),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    console.edit_field(field, value);
                }
            }

            match console.update().await {
                Ok(notice) => views::console_reply(&console, Some(&notice.to_string()), false),
                Err(_) => views::console_reply(&console, None, true),
            }
        };

        ctx.send(reply).await?;
        Ok(())
    }

    /// Deletes a product by its ID.
    #[poise::command(slash_command, rename = "delete")]
    pub async fn product_delete(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "ID of the product to delete"]
        #[autocomplete = "autocomplete::autocomplete_product_id"]
        id: String,
    ) -> Result<()> {
        ctx.defer().await?;
        let id = ProductId::new(id);

        let reply = {
            let mut console = ctx.data().console.lock().await;
            let notice = console.delete(&id).await.ok().map(|n| n.to_string());
            views::console_reply(&console, notice.as_deref(), false)
        };

        ctx.send(reply).await?;
        Ok(())
    }

    /// Shows the current form.
    #[poise::command(slash_command, rename = "form")]
    pub async fn product_form(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        // The console may be held by a slow request from another interaction
        ctx.defer().await?;

        let reply = {
            let console = ctx.data().console.lock().await;
            views::console_reply(&console, None, true)
        };

        ctx.send(reply).await?;
        Ok(())
    }

    /// Clears the form and any error, leaving the product list alone.
    #[poise::command(slash_command, rename = "clear")]
    pub async fn product_clear(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.defer().await?;

        let reply = {
            let mut console = ctx.data().console.lock().await;
            console.clear_form();
            views::console_reply(&console, Some("Form cleared"), true)
        };

        ctx.send(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
