//! Domain model for tracked projects.
//!
//! Records, their status and the snapshot type handed to listeners. No
//! infrastructure concerns live here.

mod error;
mod ids;
mod project;
mod snapshot;

pub use error::{ParseProjectIdError, ParseProjectStatusError};
pub use ids::ProjectId;
pub use project::{ProjectRecord, ProjectStatus};
pub use snapshot::ProjectSnapshot;
