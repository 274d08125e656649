//! Typed drag payload.

use crate::project::domain::{ParseProjectIdError, ProjectId};
use serde::{Deserialize, Serialize};

/// Media type tag under which project identifiers travel.
pub const PROJECT_ID_MEDIA_TYPE: &str = "text/plain";

/// Data attached to a drag gesture: one string field and its media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPayload {
    media_type: String,
    data: String,
}

impl TransferPayload {
    /// Creates a payload carrying the identifier of a project card.
    #[must_use]
    pub fn for_project(id: ProjectId) -> Self {
        Self::new(PROJECT_ID_MEDIA_TYPE, id.to_string())
    }

    /// Creates a payload with an arbitrary media type.
    ///
    /// Gestures that start outside the board (text dragged from another
    /// application, for example) arrive with such payloads.
    #[must_use]
    pub fn new(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Returns the declared media type.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Returns the raw payload text.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Parses the payload text as a project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseProjectIdError`] when the text is not an identifier.
    pub fn project_id(&self) -> Result<ProjectId, ParseProjectIdError> {
        self.data.parse()
    }
}
