//! Embed builders that render console state for Discord.
//!
//! Layout decisions (column widths, truncation, totals) live in `core::report`; this
//! module only wraps that text in embeds.

use crate::core::{Console, ProductApi, form::FormMode, report};
use poise::serenity_prelude as serenity;

/// Discord blurple, shared by every console embed
const EMBED_COLOR: u32 = 0x0058_65F2;

/// Embed description limit minus room for the code fence
const TABLE_CHAR_BUDGET: usize = 4096 - 16;

/// Message content limit; server error text can be arbitrarily long
const MAX_CONTENT_CHARS: usize = 2000;

/// Status line for a reply: the latest error, then any confirmation.
///
/// Both can appear at once, e.g. a create that succeeded but whose refresh failed.
#[must_use]
pub fn status_line<A: ProductApi>(console: &Console<A>, notice: Option<&str>) -> String {
    let mut lines = Vec::new();
    if let Some(notice) = notice {
        lines.push(format!("✅ {notice}"));
    }
    if let Some(error) = console.last_error() {
        lines.push(format!("❌ {error}"));
    }
    report::clip(&lines.join("\n"), MAX_CONTENT_CHARS)
}

/// Table embed for the current product list.
#[must_use]
pub fn table_embed<A: ProductApi>(console: &Console<A>) -> serenity::CreateEmbed {
    let products = console.products();
    let description = if products.is_empty() {
        "No products to show.".to_string()
    } else {
        format!(
            "```\n{}```",
            report::render_table(products, TABLE_CHAR_BUDGET)
        )
    };

    let mut embed = serenity::CreateEmbed::default()
        .title("📦 Product Management")
        .color(EMBED_COLOR)
        .description(description)
        .field(
            "Summary",
            report::format_summary(&report::summarize(products)),
            false,
        );

    if let Some(refreshed) = console.last_refreshed() {
        embed = embed.footer(serenity::CreateEmbedFooter::new(format!(
            "Last refreshed {}",
            refreshed.format("%Y-%m-%d %H:%M:%S UTC")
        )));
    }
    embed
}

/// Form embed showing every input and what submitting will do.
#[must_use]
pub fn form_embed<A: ProductApi>(console: &Console<A>) -> serenity::CreateEmbed {
    let form = console.form();
    let hint = match form.mode() {
        FormMode::Create => "Use /product add to create a product",
        FormMode::Edit(_) => "Use /product update to save changes, /product clear to cancel",
    };

    report::form_lines(form).into_iter().fold(
        serenity::CreateEmbed::default()
            .title(report::form_title(form))
            .color(EMBED_COLOR)
            .footer(serenity::CreateEmbedFooter::new(hint)),
        |embed, (label, value)| embed.field(label, value, true),
    )
}

/// Builds the reply for a finished console action.
///
/// The table is attached whenever it is visible; the form only when asked for.
#[must_use]
pub fn console_reply<A: ProductApi>(
    console: &Console<A>,
    notice: Option<&str>,
    show_form: bool,
) -> poise::CreateReply {
    let mut reply = poise::CreateReply::default();

    let status = status_line(console, notice);
    if !status.is_empty() {
        reply = reply.content(status);
    }
    if show_form {
        reply = reply.embed(form_embed(console));
    }
    if console.is_table_visible() {
        reply = reply.embed(table_embed(console));
    }
    if !show_form
        && !console.is_table_visible()
        && console.last_error().is_none()
        && notice.is_none()
    {
        reply = reply.content("Done. Use `/product list` to show products.");
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::api::ApiAction, test_utils::InMemoryApi};

    #[tokio::test]
    async fn test_status_line_shows_notice_and_error() {
        let api = InMemoryApi::default();
        api.fail(ApiAction::List, None);
        let console = Console::open(api).await;

        assert_eq!(
            status_line(&console, Some("Product added: Pen")),
            "✅ Product added: Pen\n❌ Failed to load products"
        );
    }

    #[tokio::test]
    async fn test_status_line_clips_long_server_error() {
        let api = InMemoryApi::default();
        api.fail(ApiAction::List, Some(&"e".repeat(5000)));
        let console = Console::open(api).await;

        let status = status_line(&console, None);
        assert_eq!(status.chars().count(), MAX_CONTENT_CHARS);
        assert!(status.starts_with("❌ eee"));
    }

    #[tokio::test]
    async fn test_status_line_empty_when_nothing_to_report() {
        let console = Console::open(InMemoryApi::default()).await;
        assert!(status_line(&console, None).is_empty());
    }
}
