//! Listener that reports each snapshot through `tracing`.

use crate::project::{
    domain::{ProjectSnapshot, ProjectStatus},
    ports::{ListenerError, ProjectListener},
};
use tracing::info;

/// Listener that logs per-status record counts for every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingListener;

impl ProjectListener for LoggingListener {
    fn on_projects_changed(&mut self, snapshot: &ProjectSnapshot) -> Result<(), ListenerError> {
        let active = snapshot.with_status(ProjectStatus::Active).count();
        let finished = snapshot.with_status(ProjectStatus::Finished).count();
        info!(total = snapshot.len(), active, finished, "project board changed");
        Ok(())
    }
}
