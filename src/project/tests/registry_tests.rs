//! Listener registry fan-out tests.

use crate::project::{
    adapters::{LoggingListener, RecordingListener},
    domain::ProjectSnapshot,
    ports::{ListenerError, MockProjectListener, ProjectListener, SharedListener},
    services::{ListenerRegistry, NotifyReport},
};
use rstest::rstest;
use std::{cell::RefCell, rc::Rc};

#[rstest]
fn empty_registry_reports_nothing() {
    let mut registry = ListenerRegistry::new();

    let report = registry.notify(&ProjectSnapshot::default());

    assert!(registry.is_empty());
    assert_eq!(report, NotifyReport::default());
}

#[rstest]
fn report_counts_delivered_and_failed_listeners() {
    let mut failing = MockProjectListener::new();
    failing
        .expect_on_projects_changed()
        .returning(|_| Err(ListenerError::new("boom")));
    let mut registry = ListenerRegistry::new();
    registry.register(RecordingListener::new());
    registry.register(failing);
    registry.register(LoggingListener);

    let report = registry.notify(&ProjectSnapshot::default());

    assert_eq!(registry.len(), 3);
    assert_eq!(
        report,
        NotifyReport {
            delivered: 2,
            failed: 1,
        }
    );
}

#[rstest]
fn shared_listener_delivers_to_the_shared_value() {
    let inner = Rc::new(RefCell::new(RecordingListener::new()));
    let mut registry = ListenerRegistry::new();
    registry.register(SharedListener::new(Rc::clone(&inner)));

    registry.notify(&ProjectSnapshot::default());

    assert_eq!(inner.borrow().count(), 1);
}

#[rstest]
fn shared_listener_reports_busy_value() {
    let inner = Rc::new(RefCell::new(RecordingListener::new()));
    let mut listener = SharedListener::new(Rc::clone(&inner));
    let guard = inner.borrow_mut();

    let result = listener.on_projects_changed(&ProjectSnapshot::default());

    drop(guard);
    assert!(result.is_err());
    assert_eq!(inner.borrow().count(), 0);
}

#[rstest]
fn listener_error_keeps_reason() {
    let err = ListenerError::new("renderer detached");
    assert_eq!(err.reason(), "renderer detached");
    assert_eq!(err.to_string(), "listener failed: renderer detached");
}
