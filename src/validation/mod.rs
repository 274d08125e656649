//! Field validation engine.
//!
//! Validation is a pure function of a field value and its constraint set. It
//! gates project creation: the intake service refuses input that fails here
//! before the store is ever touched.

pub mod config;
pub mod field;
pub mod rules;

pub use config::{ConfigError, ProjectConstraints};
pub use field::{Constraints, FieldValue, Validatable};
pub use rules::{ConstraintViolation, validate, violations};
