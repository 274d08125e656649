//! Ordered listener registry and snapshot fan-out.

use crate::project::{domain::ProjectSnapshot, ports::ProjectListener};
use tracing::warn;

/// Outcome of notifying every registered listener once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Listeners that handled the snapshot.
    pub delivered: usize,
    /// Listeners that returned an error.
    pub failed: usize,
}

/// Append-only, ordered collection of store listeners.
///
/// Registration order is notification order. There is no way to remove a
/// listener: views live as long as the board that owns the store.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Box<dyn ProjectListener>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener.
    pub fn register(&mut self, listener: impl ProjectListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` when no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Hands `snapshot` to every listener in registration order.
    ///
    /// A failing listener is logged and counted; it never stops the
    /// remaining listeners from being notified.
    pub fn notify(&mut self, snapshot: &ProjectSnapshot) -> NotifyReport {
        let mut report = NotifyReport::default();
        for (position, listener) in self.listeners.iter_mut().enumerate() {
            match listener.on_projects_changed(snapshot) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    warn!(listener = position, error = %err, "project listener failed");
                    report.failed += 1;
                }
            }
        }
        report
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
