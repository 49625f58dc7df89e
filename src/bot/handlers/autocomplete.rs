//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come from the console's local product list, so typing never triggers a
//! request to the inventory API.

use crate::{bot::BotData, entities::Product, errors::Error};

/// Discord autocomplete limit
const MAX_SUGGESTIONS: usize = 25;

/// Product IDs whose ID starts with, or whose name contains, `partial` (case-insensitive).
#[must_use]
pub fn matching_product_ids(products: &[Product], partial: &str) -> Vec<String> {
    let partial_lower = partial.trim().to_lowercase();

    products
        .iter()
        .filter(|prod| {
            prod.id.as_str().to_lowercase().starts_with(&partial_lower)
                || prod.name.to_lowercase().contains(&partial_lower)
        })
        .map(|prod| prod.id.to_string())
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Provides autocomplete suggestions for product IDs.
///
/// Returns nothing while another command holds the console, rather than waiting on
/// its request.
pub async fn autocomplete_product_id(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let Ok(console) = ctx.data().console.try_lock() else {
        return Vec::new();
    };

    matching_product_ids(console.products(), partial)
}
