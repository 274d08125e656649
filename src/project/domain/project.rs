//! Project record and status types.

use super::{ParseProjectStatusError, ProjectId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a tracked project.
///
/// Every record carries exactly one status. New records start as
/// [`ProjectStatus::Active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work on the project is ongoing.
    Active,
    /// The project has been completed.
    Finished,
}

impl ProjectStatus {
    /// Every status, in board order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Finished];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// A single tracked project.
///
/// Records are created and mutated only by the project store. Everything
/// outside the store works with clones handed out in snapshots, so the
/// fields are exposed through accessors only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Creates a new active record with a fresh identifier.
    pub(crate) fn new(
        title: String,
        description: String,
        people: u32,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of people assigned to the project.
    #[must_use]
    pub const fn people(&self) -> u32 {
        self.people
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest status change.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Changes the status, returning the previous one.
    ///
    /// Returns `None` and leaves the record untouched when the status is
    /// already `status`.
    pub(crate) fn set_status(
        &mut self,
        status: ProjectStatus,
        clock: &impl Clock,
    ) -> Option<ProjectStatus> {
        if self.status == status {
            return None;
        }
        let previous = self.status;
        self.status = status;
        self.updated_at = clock.utc();
        Some(previous)
    }
}
