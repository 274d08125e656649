//! The project record store.

use super::registry::{ListenerRegistry, NotifyReport};
use crate::project::{
    domain::{ProjectId, ProjectRecord, ProjectSnapshot, ProjectStatus},
    ports::ProjectListener,
};
use mockable::{Clock, DefaultClock};
use tracing::debug;

/// Result of a status transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The record changed status and listeners were notified.
    Moved {
        /// Status before the transition.
        from: ProjectStatus,
        /// Status after the transition.
        to: ProjectStatus,
    },
    /// The record already had the requested status; nothing was published.
    Unchanged,
    /// No record has the requested identifier; nothing was published.
    NotFound,
}

/// Single source of truth for project records.
///
/// The store owns the record sequence and is the only component that
/// mutates it. Every accepted mutation publishes one [`ProjectSnapshot`] to
/// all listeners, synchronously and in registration order, before the
/// mutating call returns.
///
/// The store performs no input validation; callers gate creation through
/// [`ProjectIntake`](super::ProjectIntake).
///
/// # Examples
///
/// ```
/// use project_board::project::{
///     domain::ProjectStatus,
///     services::{MoveOutcome, ProjectStore},
/// };
///
/// let mut store = ProjectStore::new();
/// let record = store.add_project("Build API", "Design and implement REST endpoints", 3);
///
/// let outcome = store.move_project(record.id(), ProjectStatus::Finished);
/// assert_eq!(
///     outcome,
///     MoveOutcome::Moved { from: ProjectStatus::Active, to: ProjectStatus::Finished }
/// );
/// ```
pub struct ProjectStore<C = DefaultClock>
where
    C: Clock,
{
    records: Vec<ProjectRecord>,
    listeners: ListenerRegistry,
    clock: C,
}

impl ProjectStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }
}

impl Default for ProjectStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ProjectStore<C>
where
    C: Clock,
{
    /// Creates an empty store that timestamps records with `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            records: Vec::new(),
            listeners: ListenerRegistry::new(),
            clock,
        }
    }

    /// Registers a listener for future mutations.
    ///
    /// The listener is not called with the current state; use
    /// [`ProjectStore::snapshot`] to read it.
    pub fn add_listener(&mut self, listener: impl ProjectListener + 'static) {
        self.listeners.register(listener);
    }

    /// Appends a new active project and notifies listeners.
    ///
    /// Returns a copy of the created record.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectRecord {
        let record = ProjectRecord::new(title.into(), description.into(), people, &self.clock);
        debug!(project_id = %record.id(), people, "project added");
        self.records.push(record.clone());
        self.publish();
        record
    }

    /// Moves a project to `status`.
    ///
    /// Unknown identifiers and transitions to the current status are
    /// tolerated silently: the store is left untouched and no listener is
    /// called. The record keeps its position in the sequence.
    pub fn move_project(&mut self, id: ProjectId, status: ProjectStatus) -> MoveOutcome {
        let Some(record) = self.records.iter_mut().find(|record| record.id() == id) else {
            debug!(project_id = %id, "ignoring move of unknown project");
            return MoveOutcome::NotFound;
        };
        let Some(previous) = record.set_status(status, &self.clock) else {
            return MoveOutcome::Unchanged;
        };
        debug!(project_id = %id, from = %previous, to = %status, "project moved");
        self.publish();
        MoveOutcome::Moved {
            from: previous,
            to: status,
        }
    }

    /// Returns an independent copy of the current record sequence.
    #[must_use]
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot::from_records(&self.records)
    }

    /// Returns a copy of the record with the given identifier.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<ProjectRecord> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Publishes the current sequence to every listener.
    fn publish(&mut self) -> NotifyReport {
        let snapshot = ProjectSnapshot::from_records(&self.records);
        let report = self.listeners.notify(&snapshot);
        debug!(
            records = snapshot.len(),
            delivered = report.delivered,
            failed = report.failed,
            "published project snapshot"
        );
        report
    }
}

impl<C> std::fmt::Debug for ProjectStore<C>
where
    C: Clock,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("records", &self.records)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
