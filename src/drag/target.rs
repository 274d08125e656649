//! Drop targets: the project lists.

use super::payload::{PROJECT_ID_MEDIA_TYPE, TransferPayload};
use crate::project::domain::ProjectStatus;

/// A list that project cards can be dropped on.
///
/// Dropping a card on a target moves the project to the target's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropTarget {
    status: ProjectStatus,
    accepted_media_type: &'static str,
}

impl DropTarget {
    /// Creates the target for the list of projects with `status`.
    #[must_use]
    pub const fn for_status(status: ProjectStatus) -> Self {
        Self {
            status,
            accepted_media_type: PROJECT_ID_MEDIA_TYPE,
        }
    }

    /// Returns the status assigned to dropped projects.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the media type this target accepts.
    #[must_use]
    pub const fn accepted_media_type(&self) -> &'static str {
        self.accepted_media_type
    }

    /// Returns `true` when the payload's declared type matches.
    #[must_use]
    pub fn accepts(&self, payload: &TransferPayload) -> bool {
        payload.media_type() == self.accepted_media_type
    }
}
