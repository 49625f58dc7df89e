//! Entity module - Wire-level record types exchanged with the inventory API.

pub mod product;

pub use product::{Product, ProductDraft, ProductId};
