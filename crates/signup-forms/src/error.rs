//! Error types for the registration form.
//!
//! Validation failures are not errors here: they are plain messages stored in
//! [`FormErrors`](crate::FormErrors). `FormError` covers the few things that
//! can actually go wrong around the form.

use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name that the registration form does not have.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A validation pattern failed to compile.
    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Locale name that has no message catalog.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Failed to serialize form values.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
