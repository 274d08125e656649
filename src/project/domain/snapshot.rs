//! Immutable copies of the record sequence handed to listeners.

use super::{ProjectId, ProjectRecord, ProjectStatus};
use serde::Serialize;

/// An independent copy of the store's record sequence.
///
/// Records appear in creation order. A snapshot shares nothing with the
/// store, so neither side can observe changes made to the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectSnapshot {
    records: Vec<ProjectRecord>,
}

impl ProjectSnapshot {
    /// Copies `records` into a new snapshot.
    #[must_use]
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        Self {
            records: records.to_vec(),
        }
    }

    /// Returns the records in creation order.
    #[must_use]
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a record by identifier.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns the records with the given status, preserving order.
    pub fn with_status(&self, status: ProjectStatus) -> impl Iterator<Item = &ProjectRecord> {
        self.records
            .iter()
            .filter(move |record| record.status() == status)
    }

    /// Returns an owned copy of the records that the caller may mutate.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ProjectRecord> {
        self.records.clone()
    }
}

impl IntoIterator for ProjectSnapshot {
    type Item = ProjectRecord;
    type IntoIter = std::vec::IntoIter<ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
