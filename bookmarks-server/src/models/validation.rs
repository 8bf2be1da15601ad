//! Validation error types
//!
//! The `Display` output of each variant is the exact response body sent to
//! clients, so the wording is part of the public contract.

use std::fmt;

use serde_json::Value;

/// Validation error for bookmark payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the required creation fields is absent or falsy
    MissingField,

    /// Rating is not an integer in 1..=5
    RatingOutOfRange,

    /// URL is not an absolute http/https URL with a host
    InvalidUrl,

    /// Partial update supplied none of the updatable fields
    EmptyPatch,

    /// Field was supplied with a JSON type that cannot be stored
    WrongType { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "Invalid data: missing field"),
            Self::RatingOutOfRange => {
                write!(f, "Invalid data: rating must be between 1 and 5")
            }
            Self::InvalidUrl => write!(f, "Invalid data: url must be a valid web url"),
            Self::EmptyPatch => write!(
                f,
                "Must update one of title, url, description, or rating."
            ),
            Self::WrongType { field } => {
                write!(f, "Invalid data: {} has the wrong type", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Whether a JSON value counts as "not supplied".
///
/// `null`, `false`, `0` and `""` are falsy, as is an absent field.
/// Arrays and objects are always truthy, even when empty.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}
