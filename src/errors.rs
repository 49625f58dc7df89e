//! Unified error types for the product console.
//!
//! Console actions record the display text of these errors in their "last error"
//! slot; the bot layer only ever sees `FrameworkError` propagate.

use crate::core::validation::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Local form validation failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The inventory API rejected a request or could not be reached.
    /// `message` is already user-facing text.
    #[error("{message}")]
    Api { message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::FormField;

    #[test]
    fn test_api_error_displays_message_verbatim() {
        let err = Error::Api {
            message: "Product not found".to_string(),
        };
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: Error = ValidationError::Missing(vec![FormField::Name]).into();
        assert_eq!(err.to_string(), "All fields are required");
    }
}
