//! Core console logic - framework-agnostic state, validation, API access and rendering.

/// Inventory API trait and its HTTP implementation
pub mod api;
/// Console state machine and its actions
pub mod console;
/// Product form inputs and create/edit mode
pub mod form;
/// Display-ready text for tables, forms and totals
pub mod report;
/// Parse-and-validate for form submission
pub mod validation;

pub use api::{HttpProductApi, ProductApi};
pub use console::{Console, Notice};
