//! Error types for quote construction and evaluation

use miette::Diagnostic;
use thiserror::Error;

use crate::yaml::diagnostics::YamlSyntaxError;

/// Errors raised while building or evaluating a quote
#[derive(Debug, Error, Diagnostic)]
pub enum QuoteError {
    /// A rating value outside the {1, 3, 5} scale
    #[error("Invalid {category} rating: {value}")]
    #[diagnostic(
        code(partval::rating::invalid),
        help("Ratings use a three-level scale: 1 (low), 3 (moderate), or 5 (high)")
    )]
    InvalidRating { category: &'static str, value: u8 },

    /// A negative, non-finite, or out-of-range input
    #[error("Invalid value for '{field}': {value} ({reason})")]
    #[diagnostic(code(partval::quote::validation))]
    Validation {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A ratio whose denominator is zero
    #[error("Cannot compute {quantity}: customer adjusted cost is zero")]
    #[diagnostic(
        code(partval::quote::division),
        help("Profit margin is undefined when the quote has no billable cost")
    )]
    Division { quantity: &'static str },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading rate configuration
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid rate '{field}': {value}")]
    #[diagnostic(
        code(partval::config::invalid_rate),
        help("Rates must be finite and non-negative; spool_weight must be greater than zero")
    )]
    InvalidRate { field: &'static str, value: f64 },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlSyntaxError),
}

impl QuoteError {
    /// Name of the input that caused this error, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            QuoteError::InvalidRating { category, .. } => Some(*category),
            QuoteError::Validation { field, .. } => Some(*field),
            QuoteError::Config(ConfigError::InvalidRate { field, .. }) => Some(*field),
            _ => None,
        }
    }
}
