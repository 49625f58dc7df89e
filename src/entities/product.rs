//! Product entity - The single record type managed by the inventory API.
//!
//! Products are owned by the remote service; the console only ever holds copies of
//! the last successful response. The identifier is opaque and server-assigned, and the
//! numeric columns are decoded leniently because the backend may send decimals as strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque, server-assigned product identifier.
///
/// Accepted from the wire as either a JSON string or a JSON number and kept as text,
/// since the console never does arithmetic on it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wraps an identifier, trimming surrounding whitespace.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self(id.trim().to_string())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self::new(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Product as returned by the inventory API
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    /// Server-assigned identifier
    pub id: ProductId,
    /// Display name of the product (e.g., "Pen")
    pub name: String,
    /// Purchase cost per unit
    #[serde(deserialize_with = "lenient_number")]
    pub cost: f64,
    /// Selling price per unit
    #[serde(deserialize_with = "lenient_number")]
    pub price: f64,
    /// Units in stock. Expected to be non-negative but never checked by the server
    #[serde(deserialize_with = "lenient_number")]
    pub quantityavailable: f64,
}

/// Body sent with create and update requests.
///
/// Only produced by `core::validation`, so every draft has a non-empty name and
/// finite numbers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub cost: f64,
    pub price: f64,
    pub quantityavailable: f64,
}

/// Decodes a JSON number, or a string holding one.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNumber {
        Number(f64),
        Text(String),
    }

    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(value) => Ok(value),
        RawNumber::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {text:?}"))),
    }
}
