//! Error types for Precifica
//!
//! The pricing formula itself defines no error conditions: all numeric inputs
//! are accepted and out-of-range levels are clamped rather than rejected. The
//! fallible surfaces are policy loading and the opt-in request validation.

use thiserror::Error;

/// Result type alias using PrecificaError
pub type Result<T> = std::result::Result<T, PrecificaError>;

/// Unified error type for Precifica operations
#[derive(Debug, Error)]
pub enum PrecificaError {
    // Configuration errors (policy file, env overrides)
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Request validation errors (opt-in, never raised by the pricing path)
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for PrecificaError {
    fn from(err: serde_json::Error) -> Self {
        PrecificaError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for PrecificaError {
    fn from(err: std::io::Error) -> Self {
        PrecificaError::Config(err.to_string())
    }
}
