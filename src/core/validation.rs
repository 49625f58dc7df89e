//! Form validation - Turns raw form text into a typed request body.
//!
//! Every create or update passes through here before any request is built, so a
//! `ValidationError` always means nothing was sent to the inventory API.

use crate::{
    core::form::ProductForm,
    entities::{ProductDraft, ProductId},
};
use std::fmt;
use thiserror::Error;

/// The four editable inputs of the product form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Cost,
    Price,
    QuantityAvailable,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Cost, Self::Price, Self::QuantityAvailable];

    /// Human-readable label used in form renderings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Cost => "Cost",
            Self::Price => "Price",
            Self::QuantityAvailable => "Quantity Available",
        }
    }

    /// Whether the field must parse as a number.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        !matches!(self, Self::Name)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a form cannot be submitted.
///
/// The display strings are the messages shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields are empty or whitespace-only.
    #[error("All fields are required")]
    Missing(Vec<FormField>),

    /// One or more numeric fields do not hold a finite number.
    #[error("Cost, Price, and Quantity must be valid numbers")]
    NotANumber(Vec<FormField>),

    /// Update was requested while the form is in create mode.
    #[error("Select a product to edit before updating")]
    NoProductSelected,
}

/// Parses user-typed text as a finite number, ignoring surrounding whitespace.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Validates the form for a create request.
///
/// # Errors
/// Returns `ValidationError::Missing` listing every empty field, or, when all are
/// present, `ValidationError::NotANumber` listing every numeric field that fails to parse.
pub fn validate_draft(form: &ProductForm) -> Result<ProductDraft, ValidationError> {
    let missing: Vec<FormField> = FormField::ALL
        .into_iter()
        .filter(|&field| form.field(field).trim().is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::Missing(missing));
    }

    let numbers: Vec<(FormField, Option<f64>)> = FormField::ALL
        .into_iter()
        .filter(|field| field.is_numeric())
        .map(|field| (field, parse_number(form.field(field))))
        .collect();

    let invalid: Vec<FormField> = numbers
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|&(field, _)| field)
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::NotANumber(invalid));
    }

    let number_of = |wanted: FormField| {
        numbers
            .iter()
            .find(|(field, _)| *field == wanted)
            .and_then(|&(_, value)| value)
            .unwrap_or_default()
    };

    Ok(ProductDraft {
        name: form.field(FormField::Name).trim().to_string(),
        cost: number_of(FormField::Cost),
        price: number_of(FormField::Price),
        quantityavailable: number_of(FormField::QuantityAvailable),
    })
}

/// Validates the form for an update request.
///
/// # Errors
/// Returns `ValidationError::NoProductSelected` when the form is in create mode,
/// otherwise the same errors as [`validate_draft`].
pub fn validate_update(form: &ProductForm) -> Result<(ProductId, ProductDraft), ValidationError> {
    let id = form.id().cloned().ok_or(ValidationError::NoProductSelected)?;
    let draft = validate_draft(form)?;
    Ok((id, draft))
}
