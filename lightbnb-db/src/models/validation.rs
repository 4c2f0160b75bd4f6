//! Validation error types

use std::fmt;

/// Validation error for caller-supplied input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Value could not be parsed as a number
    InvalidNumber { field: &'static str, value: String },

    /// Number outside the accepted range
    OutOfRange { field: &'static str, reason: &'static str },

    /// Lower bound greater than upper bound
    InvalidRange { low: &'static str, high: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidNumber { field, value } => {
                write!(f, "{} must be a number, got '{}'", field, value)
            }
            Self::OutOfRange { field, reason } => write!(f, "{} {}", field, reason),
            Self::InvalidRange { low, high } => {
                write!(f, "{} cannot be greater than {}", low, high)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
