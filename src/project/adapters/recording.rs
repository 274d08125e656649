//! Listener that keeps every snapshot it receives.

use crate::project::{
    domain::ProjectSnapshot,
    ports::{ListenerError, ProjectListener},
};
use std::{cell::RefCell, rc::Rc};

/// Listener that appends each received snapshot to a shared log.
///
/// Clones share the same log, so one clone can be registered with the store
/// while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    received: Rc<RefCell<Vec<ProjectSnapshot>>>,
}

impl RecordingListener {
    /// Creates a listener with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of snapshots received so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.received.borrow().len()
    }

    /// Returns the most recent snapshot, if any.
    #[must_use]
    pub fn last(&self) -> Option<ProjectSnapshot> {
        self.received.borrow().last().cloned()
    }

    /// Returns every snapshot received so far, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> Vec<ProjectSnapshot> {
        self.received.borrow().clone()
    }
}

impl ProjectListener for RecordingListener {
    fn on_projects_changed(&mut self, snapshot: &ProjectSnapshot) -> Result<(), ListenerError> {
        self.received
            .try_borrow_mut()
            .map_err(|err| ListenerError::new(format!("snapshot log is busy: {err}")))?
            .push(snapshot.clone());
        Ok(())
    }
}
