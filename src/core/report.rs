//! Console rendering helpers - Turns console state into display-ready text.
//!
//! Nothing here knows about Discord. The bot layer wraps these strings in embeds,
//! which keeps column layout, truncation and totals testable without a gateway.

use crate::{
    core::{
        form::{FormMode, ProductForm},
        validation::FormField,
    },
    entities::Product,
};
use std::fmt::Write;

/// Column headers, in the order the table prints them.
pub const TABLE_HEADERS: [&str; 5] = ["ID", "Name", "Cost", "Price", "Quantity"];

/// Placeholder for blank form inputs.
pub const EMPTY_FIELD: &str = "(empty)";

/// Widest a table cell may print; longer text is clipped with `…`.
pub const MAX_CELL_CHARS: usize = 32;

/// Longest form value shown. Matches Discord's embed field value limit.
pub const MAX_FORM_VALUE_CHARS: usize = 1024;

/// Shortens `text` to at most `max` characters, marking the cut with `…`.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// One product formatted for the table, each cell clipped to [`MAX_CELL_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub cost: String,
    pub price: String,
    pub quantity: String,
}

impl ProductRow {
    fn cells(&self) -> [&str; 5] {
        [&self.id, &self.name, &self.cost, &self.price, &self.quantity]
    }
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: clip(product.id.as_str(), MAX_CELL_CHARS),
            name: clip(&product.name, MAX_CELL_CHARS),
            cost: clip(&format_number(product.cost), MAX_CELL_CHARS),
            price: clip(&format_number(product.price), MAX_CELL_CHARS),
            quantity: clip(&format_number(product.quantityavailable), MAX_CELL_CHARS),
        }
    }
}

/// Totals over the currently loaded products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    pub product_count: usize,
    pub total_units: f64,
    /// Sum of cost × quantity
    pub stock_cost: f64,
    /// Sum of price × quantity
    pub stock_value: f64,
}

impl InventorySummary {
    /// Value minus cost of everything in stock.
    #[must_use]
    pub fn potential_margin(&self) -> f64 {
        self.stock_value - self.stock_cost
    }
}

/// Formats a number the way it was typed: integral values without a fraction.
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Formats a money total with two decimals.
#[must_use]
pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", value.abs())
    } else {
        format!("${value:.2}")
    }
}

/// Computes totals for a product list.
#[must_use]
pub fn summarize(products: &[Product]) -> InventorySummary {
    products.iter().fold(
        InventorySummary {
            product_count: products.len(),
            total_units: 0.0,
            stock_cost: 0.0,
            stock_value: 0.0,
        },
        |mut summary, product| {
            summary.total_units += product.quantityavailable;
            summary.stock_cost += product.cost * product.quantityavailable;
            summary.stock_value += product.price * product.quantityavailable;
            summary
        },
    )
}

/// One-line summary like `3 products · 162 units · stock value $1234.00`.
#[must_use]
pub fn format_summary(summary: &InventorySummary) -> String {
    let noun = if summary.product_count == 1 {
        "product"
    } else {
        "products"
    };
    format!(
        "{} {noun} · {} units · stock value {} (margin {})",
        summary.product_count,
        format_number(summary.total_units),
        format_money(summary.stock_value),
        format_money(summary.potential_margin()),
    )
}

/// Renders products as a fixed-width text table that fits in `max_chars`.
///
/// Cells are clipped, so column widths stay bounded whatever the data. Rows that
/// would overflow are dropped and replaced by a `…and N more` line. The header is
/// always kept.
#[must_use]
pub fn render_table(products: &[Product], max_chars: usize) -> String {
    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();

    let mut widths = TABLE_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 5]| {
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i > 0 {
                line.push_str(" | ");
            }
            // Left-align text columns, right-align numbers
            if i <= 1 {
                let _ = write!(line, "{cell:<width$}");
            } else {
                let _ = write!(line, "{cell:>width$}");
            }
        }
        line.trim_end().to_string()
    };

    let header = format_line(TABLE_HEADERS);
    let divider = "-".repeat(header.chars().count());
    let mut table = format!("{header}\n{divider}\n");

    for (shown, row) in rows.iter().enumerate() {
        let line = format_line(row.cells());
        let remaining = rows.len() - shown;
        let more = format!("…and {remaining} more\n");
        // Leave room for the overflow marker unless this is the last row
        let reserve = if remaining > 1 { more.chars().count() } else { 0 };
        if table.chars().count() + line.chars().count() + 1 + reserve > max_chars {
            table.push_str(&more);
            break;
        }
        table.push_str(&line);
        table.push('\n');
    }

    table
}

/// Heading describing which action the form feeds.
#[must_use]
pub fn form_title(form: &ProductForm) -> String {
    match form.mode() {
        FormMode::Create => "New product".to_string(),
        FormMode::Edit(id) => format!("Editing product {}", clip(id.as_str(), MAX_CELL_CHARS)),
    }
}

/// Label/value pairs for every form input, blanks shown as a placeholder and long
/// values clipped to [`MAX_FORM_VALUE_CHARS`].
#[must_use]
pub fn form_lines(form: &ProductForm) -> Vec<(&'static str, String)> {
    FormField::ALL
        .into_iter()
        .map(|field| {
            let value = form.field(field);
            let shown = if value.trim().is_empty() {
                EMPTY_FIELD.to_string()
            } else {
                clip(value, MAX_FORM_VALUE_CHARS)
            };
            (field.label(), shown)
        })
        .collect()
}
