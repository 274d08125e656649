//! Individual constraint rules and the combined validator.
//!
//! Each rule inspects one constraint of a [`Validatable`] and returns
//! `Ok(())` when the constraint is satisfied or does not apply to the
//! value's kind. [`violations`] runs every rule and collects the failures;
//! [`validate`] reduces them to a single verdict.

use super::field::{FieldValue, Validatable};
use thiserror::Error;

/// A single failed constraint.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// The value is empty after trimming.
    #[error("a value is required")]
    Required,

    /// The text is shorter than the minimum length.
    #[error("must be at least {min} characters, got {actual}")]
    TooShort {
        /// Inclusive minimum length.
        min: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// The text is longer than the maximum length.
    #[error("must be at most {max} characters, got {actual}")]
    TooLong {
        /// Inclusive maximum length.
        max: usize,
        /// Actual length in characters.
        actual: usize,
    },

    /// The number is below the minimum value.
    #[error("must be at least {min}, got {actual}")]
    BelowMinimum {
        /// Inclusive minimum value.
        min: i64,
        /// Actual value.
        actual: i64,
    },

    /// The number is above the maximum value.
    #[error("must be at most {max}, got {actual}")]
    AboveMaximum {
        /// Inclusive maximum value.
        max: i64,
        /// Actual value.
        actual: i64,
    },
}

/// Returns `true` when `field` satisfies every applicable constraint.
///
/// A field without constraints is always valid.
///
/// # Examples
///
/// ```
/// use project_board::validation::{Constraints, Validatable, validate};
///
/// let description = Constraints::new()
///     .required()
///     .with_min_length(6)
///     .with_max_length(50);
///
/// assert!(validate(&Validatable::new("Design and implement REST endpoints", description)));
/// assert!(!validate(&Validatable::new("short", description)));
/// ```
#[must_use]
pub fn validate(field: &Validatable) -> bool {
    violations(field).is_empty()
}

/// Runs every rule against `field` and returns the failures in rule order.
#[must_use]
pub fn violations(field: &Validatable) -> Vec<ConstraintViolation> {
    [
        check_required(field),
        check_min_length(field),
        check_max_length(field),
        check_min_value(field),
        check_max_value(field),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Checks the `required` constraint against the value's trimmed text form.
///
/// # Errors
///
/// Returns [`ConstraintViolation::Required`] when the field is required and
/// its trimmed text form is empty.
pub fn check_required(field: &Validatable) -> Result<(), ConstraintViolation> {
    if !field.constraints.required {
        return Ok(());
    }
    let is_blank = match &field.value {
        FieldValue::Text(text) => text.trim().is_empty(),
        FieldValue::Number(_) => false,
    };
    if is_blank {
        return Err(ConstraintViolation::Required);
    }
    Ok(())
}

/// Checks the inclusive minimum length of a textual value.
///
/// # Errors
///
/// Returns [`ConstraintViolation::TooShort`] when the text has fewer
/// characters than the bound.
pub fn check_min_length(field: &Validatable) -> Result<(), ConstraintViolation> {
    let (Some(min), FieldValue::Text(text)) = (field.constraints.min_length, &field.value) else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual < min {
        return Err(ConstraintViolation::TooShort { min, actual });
    }
    Ok(())
}

/// Checks the inclusive maximum length of a textual value.
///
/// # Errors
///
/// Returns [`ConstraintViolation::TooLong`] when the text has more
/// characters than the bound.
pub fn check_max_length(field: &Validatable) -> Result<(), ConstraintViolation> {
    let (Some(max), FieldValue::Text(text)) = (field.constraints.max_length, &field.value) else {
        return Ok(());
    };
    let actual = text.chars().count();
    if actual > max {
        return Err(ConstraintViolation::TooLong { max, actual });
    }
    Ok(())
}

/// Checks the inclusive minimum of a numeric value.
///
/// # Errors
///
/// Returns [`ConstraintViolation::BelowMinimum`] when the number is smaller
/// than the bound.
pub fn check_min_value(field: &Validatable) -> Result<(), ConstraintViolation> {
    let (Some(min), FieldValue::Number(actual)) = (field.constraints.min_value, &field.value)
    else {
        return Ok(());
    };
    if *actual < min {
        return Err(ConstraintViolation::BelowMinimum {
            min,
            actual: *actual,
        });
    }
    Ok(())
}

/// Checks the inclusive maximum of a numeric value.
///
/// # Errors
///
/// Returns [`ConstraintViolation::AboveMaximum`] when the number is larger
/// than the bound.
pub fn check_max_value(field: &Validatable) -> Result<(), ConstraintViolation> {
    let (Some(max), FieldValue::Number(actual)) = (field.constraints.max_value, &field.value)
    else {
        return Ok(());
    };
    if *actual > max {
        return Err(ConstraintViolation::AboveMaximum {
            max,
            actual: *actual,
        });
    }
    Ok(())
}
