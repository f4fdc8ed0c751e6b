//! Validation error model.

use serde::Serialize;
use thiserror::Error;

/// Result type used by the form validators.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A rejected form submission.
///
/// The `Display` output of each variant is the exact message rendered next to
/// the offending field, so callers write `err.to_string()` into the error
/// target unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValidationError {
    #[error("please enter a username")]
    MissingUsername,

    #[error("enter an amount")]
    MissingAmount,

    /// Any whitespace character anywhere in the value.
    #[error("no space allowed")]
    Whitespace,

    #[error("only numbers and alphabets are allowed")]
    NotAlphanumeric,

    #[error("no fractions allowed")]
    Fractional,

    #[error("enter a numeric value")]
    NotNumeric,

    /// Only the issuing account may mint coins.
    #[error("Only goofy can create coin")]
    NotCoinIssuer,

    #[error("please select a receiver")]
    NoReceiver,
}

/// Coarse classification of [`ValidationError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    EmptyInput,
    Whitespace,
    InvalidFormat,
    Unauthorized,
    SelectionMissing,
}

impl ValidationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::MissingUsername | ValidationError::MissingAmount => {
                ErrorCategory::EmptyInput
            }
            ValidationError::Whitespace => ErrorCategory::Whitespace,
            ValidationError::NotAlphanumeric
            | ValidationError::Fractional
            | ValidationError::NotNumeric => ErrorCategory::InvalidFormat,
            ValidationError::NotCoinIssuer => ErrorCategory::Unauthorized,
            ValidationError::NoReceiver => ErrorCategory::SelectionMissing,
        }
    }
}
