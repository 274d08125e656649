//! Field values and constraint sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a single input field.
///
/// Numeric input arrives as text and is coerced by the caller before
/// validation; the engine never parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Textual value.
    Text(String),
    /// Numeric value.
    Number(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Constraint set attached to a field.
///
/// Length bounds apply to textual values only and value bounds to numeric
/// values only; all bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Constraints {
    /// The trimmed string form must be non-empty.
    pub required: bool,
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Minimum numeric value.
    pub min_value: Option<i64>,
    /// Maximum numeric value.
    pub max_value: Option<i64>,
}

impl Constraints {
    /// Creates an empty constraint set that accepts every value.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            min_value: None,
            max_value: None,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the inclusive minimum length.
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Sets the inclusive maximum length.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the inclusive minimum value.
    #[must_use]
    pub const fn with_min_value(mut self, min_value: i64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Sets the inclusive maximum value.
    #[must_use]
    pub const fn with_max_value(mut self, max_value: i64) -> Self {
        self.max_value = Some(max_value);
        self
    }
}

/// A field value paired with the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validatable {
    /// The value under test.
    pub value: FieldValue,
    /// Constraints applied to the value.
    pub constraints: Constraints,
}

impl Validatable {
    /// Pairs a value with its constraints.
    #[must_use]
    pub fn new(value: impl Into<FieldValue>, constraints: Constraints) -> Self {
        Self {
            value: value.into(),
            constraints,
        }
    }
}
