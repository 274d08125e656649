//! The project input form.

use super::Component;
use crate::project::{
    domain::ProjectRecord,
    services::{CreateProjectRequest, ProjectInputError, ProjectIntake, ProjectStore},
};
use mockable::Clock;
use tracing::info;

/// Raw text of the three form inputs.
///
/// The form turns its text into a [`CreateProjectRequest`], hands it to a
/// [`ProjectIntake`] and clears itself once the project is created. A
/// refused submission leaves the inputs as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    title: String,
    description: String,
    people: String,
}

impl ProjectForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title input.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description input.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the people input.
    pub fn set_people(&mut self, people: impl Into<String>) {
        self.people = people.into();
    }

    /// Fills every input at once.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.set_title(title);
        self.set_description(description);
        self.set_people(people);
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the people input.
    #[must_use]
    pub fn people(&self) -> &str {
        &self.people
    }

    /// Empties every input.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    /// Builds a creation request from the current inputs.
    ///
    /// A blank people input becomes a missing value, which validation
    /// reports as required.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectInputError::NotAWholeNumber`] when the people input
    /// is neither blank nor an integer.
    pub fn to_request(&self) -> Result<CreateProjectRequest, ProjectInputError> {
        let people = self.people.trim();
        if people.is_empty() {
            return Ok(CreateProjectRequest::without_people(
                self.title.as_str(),
                self.description.as_str(),
            ));
        }
        let count = people
            .parse::<i64>()
            .map_err(|_| ProjectInputError::NotAWholeNumber(self.people.clone()))?;
        Ok(CreateProjectRequest::new(
            self.title.as_str(),
            self.description.as_str(),
            count,
        ))
    }

    /// Submits the form through `intake` into `store`.
    ///
    /// # Errors
    ///
    /// Returns the [`ProjectInputError`] describing why the input was
    /// refused; the inputs are kept so the user can correct them.
    pub fn submit<C: Clock>(
        &mut self,
        intake: &ProjectIntake,
        store: &mut ProjectStore<C>,
    ) -> Result<ProjectRecord, ProjectInputError> {
        let request = self.to_request()?;
        let record = intake.submit(store, request)?;
        info!(project_id = %record.id(), title = record.title(), "project created");
        self.clear();
        Ok(record)
    }
}

impl Component for ProjectForm {
    fn configure(&mut self) {
        self.clear();
    }

    fn render_content(&mut self) {}
}
