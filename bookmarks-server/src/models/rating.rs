//! Bookmark rating
//!
//! Clients may send the rating as a JSON number or as a numeric string
//! (`4`, `4.0` and `"4"` are equivalent). Internally it is always an integer.

use serde_json::Value;

use super::ValidationError;

/// Lowest accepted rating
pub const MIN_RATING: i64 = 1;

/// Highest accepted rating
pub const MAX_RATING: i64 = 5;

/// Validated rating in `MIN_RATING..=MAX_RATING`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    /// Create a rating from an integer, checking the range.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ValidationError::RatingOutOfRange);
        }
        Ok(Self(value as u8))
    }

    /// Coerce and range-check a rating taken from a request body.
    ///
    /// # Example
    /// ```
    /// use bookmarks_server::models::Rating;
    /// use serde_json::json;
    ///
    /// assert_eq!(Rating::from_json(&json!("4")).unwrap().get(), 4);
    /// assert_eq!(Rating::from_json(&json!(2)).unwrap().get(), 2);
    /// assert!(Rating::from_json(&json!(6)).is_err());
    /// assert!(Rating::from_json(&json!("four")).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        coerce_integer(value)
            .ok_or(ValidationError::RatingOutOfRange)
            .and_then(Self::new)
    }

    /// The rating as stored and emitted.
    pub fn get(self) -> i32 {
        i32::from(self.0)
    }
}

/// Coerce a JSON number or numeric string to an integer.
///
/// Whole values are accepted in any notation (`4`, `4.0`, `"4"`, `" 4.0 "`).
/// Fractions, non-finite values, empty strings and other JSON types are not.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_number)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(whole_number),
        _ => None,
    }
}

fn whole_number(n: f64) -> Option<i64> {
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    (n.fract() == 0.0 && in_range).then_some(n as i64)
}
