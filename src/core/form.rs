//! Product form state - The text inputs behind create and update.
//!
//! The form stores raw text exactly as typed; nothing is parsed until
//! `core::validation` runs. Its mode is derived from whether an identifier is held.

use crate::{
    core::validation::FormField,
    entities::{Product, ProductId},
};

/// Which submit action the form currently feeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// No product loaded; submitting creates a new record.
    Create,
    /// A product was loaded for editing; update targets this identifier.
    Edit(ProductId),
}

/// Raw form inputs plus the identifier of the product being edited, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    id: Option<ProductId>,
    name: String,
    cost: String,
    price: String,
    quantityavailable: String,
}

impl ProductForm {
    /// Identifier of the product being edited.
    #[must_use]
    pub const fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.id
            .clone()
            .map_or(FormMode::Create, FormMode::Edit)
    }

    /// Current text of one input.
    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Cost => &self.cost,
            FormField::Price => &self.price,
            FormField::QuantityAvailable => &self.quantityavailable,
        }
    }

    /// Overwrites one input. Never changes the mode.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Cost => self.cost = value,
            FormField::Price => self.price = value,
            FormField::QuantityAvailable => self.quantityavailable = value,
        }
    }

    /// Fills every input from a stored product and switches to edit mode.
    pub fn load(&mut self, product: &Product) {
        self.id = Some(product.id.clone());
        self.name.clone_from(&product.name);
        self.cost = product.cost.to_string();
        self.price = product.price.to_string();
        self.quantityavailable = product.quantityavailable.to_string();
    }

    /// Empties every input and returns to create mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no input holds any text and no product is loaded.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.id.is_none() && FormField::ALL.iter().all(|&field| self.field(field).is_empty())
    }
}
