//! Validation gate in front of project creation.

use super::store::ProjectStore;
use crate::{
    project::domain::ProjectRecord,
    validation::{
        ConstraintViolation, Constraints, FieldValue, ProjectConstraints, Validatable, violations,
    },
};
use mockable::Clock;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Request payload for creating a project.
///
/// The people count is already numeric: coercing form text happens before
/// the request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    title: String,
    description: String,
    people: Option<i64>,
}

impl CreateProjectRequest {
    /// Creates a request with all fields present.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: i64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: Some(people),
        }
    }

    /// Creates a request whose people field was left blank.
    #[must_use]
    pub fn without_people(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: None,
        }
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the requested people count, if one was given.
    #[must_use]
    pub const fn people(&self) -> Option<i64> {
        self.people
    }
}

/// Input field of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectField {
    /// Project title.
    Title,
    /// Project description.
    Description,
    /// Number of people.
    People,
}

impl ProjectField {
    /// Returns the field name as shown to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

impl fmt::Display for ProjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A constraint violation attributed to a form field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{field}: {violation}")]
pub struct FieldViolation {
    /// Field that failed.
    pub field: ProjectField,
    /// Constraint it failed.
    pub violation: ConstraintViolation,
}

/// Every violation found in a refused request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// Returns the violations in field order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns `true` when `field` has at least one violation.
    #[must_use]
    pub fn has_field(&self, field: ProjectField) -> bool {
        self.violations.iter().any(|item| item.field == field)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Errors returned when project input is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectInputError {
    /// One or more fields failed validation.
    #[error("invalid input: {0}")]
    Invalid(ValidationFailure),

    /// The people field does not hold a whole number.
    #[error("people must be a whole number, got '{0}'")]
    NotAWholeNumber(String),
}

/// Validation gate for project creation.
///
/// Runs every field of a [`CreateProjectRequest`] through the validation
/// engine and only calls [`ProjectStore::add_project`] when all of them
/// pass. A refused request never reaches the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectIntake {
    constraints: ProjectConstraints,
}

impl ProjectIntake {
    /// Creates an intake gate with the default board constraints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an intake gate with custom constraints.
    #[must_use]
    pub const fn with_constraints(constraints: ProjectConstraints) -> Self {
        Self { constraints }
    }

    /// Returns the active constraints.
    #[must_use]
    pub const fn constraints(&self) -> &ProjectConstraints {
        &self.constraints
    }

    /// Validates `request` without touching any store.
    ///
    /// Returns the people count narrowed to the record's type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] listing every failing field.
    pub fn check(&self, request: &CreateProjectRequest) -> Result<u32, ValidationFailure> {
        let people_value = request
            .people
            .map_or_else(|| FieldValue::Text(String::new()), FieldValue::Number);
        let mut found = Vec::new();
        collect(&mut found, ProjectField::Title, request.title.as_str(), self.constraints.title);
        collect(
            &mut found,
            ProjectField::Description,
            request.description.as_str(),
            self.constraints.description,
        );
        collect(&mut found, ProjectField::People, people_value, self.constraints.people);

        let requested = request.people.unwrap_or_default();
        match u32::try_from(requested) {
            Ok(people) if found.is_empty() => return Ok(people),
            Ok(_) => {}
            Err(_) if !found.iter().any(|item| item.field == ProjectField::People) => {
                let violation = if requested > 0 {
                    ConstraintViolation::AboveMaximum {
                        max: u32::MAX.into(),
                        actual: requested,
                    }
                } else {
                    ConstraintViolation::BelowMinimum {
                        min: 0,
                        actual: requested,
                    }
                };
                found.push(FieldViolation {
                    field: ProjectField::People,
                    violation,
                });
            }
            Err(_) => {}
        }
        Err(ValidationFailure { violations: found })
    }

    /// Validates `request` and, if it passes, adds the project to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectInputError::Invalid`] when any field fails
    /// validation; the store is left untouched and no listener is called.
    pub fn submit<C: Clock>(
        &self,
        store: &mut ProjectStore<C>,
        request: CreateProjectRequest,
    ) -> Result<ProjectRecord, ProjectInputError> {
        let people = self.check(&request).map_err(|failure| {
            debug!(reason = %failure, "project input refused");
            ProjectInputError::Invalid(failure)
        })?;
        Ok(store.add_project(request.title, request.description, people))
    }
}

fn collect(
    found: &mut Vec<FieldViolation>,
    field: ProjectField,
    value: impl Into<FieldValue>,
    constraints: Constraints,
) {
    let validatable = Validatable::new(value, constraints);
    found.extend(
        violations(&validatable)
            .into_iter()
            .map(|violation| FieldViolation { field, violation }),
    );
}
