//! Listener port through which views observe store mutations.

use crate::project::domain::ProjectSnapshot;
use std::{cell::RefCell, rc::Rc};
use thiserror::Error;

/// Observer of project store mutations.
///
/// The store calls every registered listener, in registration order, once
/// per accepted mutation. A listener that returns an error is logged and
/// skipped; the remaining listeners are still notified.
///
/// Closures with the matching signature are listeners:
///
/// ```
/// use project_board::project::{
///     domain::ProjectSnapshot,
///     ports::ListenerError,
///     services::ProjectStore,
/// };
///
/// let mut store = ProjectStore::new();
/// store.add_listener(|snapshot: &ProjectSnapshot| -> Result<(), ListenerError> {
///     let _ = snapshot.len();
///     Ok(())
/// });
/// assert_eq!(store.listener_count(), 1);
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait ProjectListener {
    /// Receives the full record sequence after a mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] when the listener cannot process the
    /// snapshot. The error never reaches the mutating caller.
    fn on_projects_changed(&mut self, snapshot: &ProjectSnapshot) -> Result<(), ListenerError>;
}

impl<F> ProjectListener for F
where
    F: FnMut(&ProjectSnapshot) -> Result<(), ListenerError>,
{
    fn on_projects_changed(&mut self, snapshot: &ProjectSnapshot) -> Result<(), ListenerError> {
        self(snapshot)
    }
}

/// Error reported by a listener that failed to handle a snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("listener failed: {reason}")]
pub struct ListenerError {
    reason: String,
}

impl ListenerError {
    /// Creates a listener error with a human-readable reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the failure reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Listener handle over a value that its owner keeps using.
///
/// Views are registered with the store while the board still drives them
/// for drag gestures, so both sides hold the same `Rc<RefCell<_>>`. A
/// notification that arrives while the view is already borrowed is reported
/// as a [`ListenerError`].
#[derive(Debug)]
pub struct SharedListener<L> {
    inner: Rc<RefCell<L>>,
}

impl<L> SharedListener<L> {
    /// Wraps a shared value as a listener.
    #[must_use]
    pub const fn new(inner: Rc<RefCell<L>>) -> Self {
        Self { inner }
    }
}

impl<L> Clone for SharedListener<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: ProjectListener> ProjectListener for SharedListener<L> {
    fn on_projects_changed(&mut self, snapshot: &ProjectSnapshot) -> Result<(), ListenerError> {
        let mut inner = self
            .inner
            .try_borrow_mut()
            .map_err(|err| ListenerError::new(format!("listener is busy: {err}")))?;
        inner.on_projects_changed(snapshot)
    }
}
