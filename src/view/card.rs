//! Card model for a single project.

use crate::project::domain::{ProjectId, ProjectRecord};
use serde::Serialize;

/// Returns `"1 person"` or `"N persons"`.
#[must_use]
pub fn persons_label(people: u32) -> String {
    if people == 1 {
        "1 person".to_owned()
    } else {
        format!("{people} persons")
    }
}

/// What a renderer needs to draw one project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    /// Identifier carried by drags started from this card.
    pub id: ProjectId,
    /// Card heading.
    pub title: String,
    /// Staffing line, e.g. `"3 persons assigned"`.
    pub assigned: String,
    /// Card body.
    pub description: String,
}

impl ProjectCard {
    /// Builds the card for `record`.
    #[must_use]
    pub fn from_record(record: &ProjectRecord) -> Self {
        Self {
            id: record.id(),
            title: record.title().to_owned(),
            assigned: format!("{} assigned", persons_label(record.people())),
            description: record.description().to_owned(),
        }
    }
}
