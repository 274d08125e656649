//! Drag protocol errors.

use crate::project::domain::ProjectStatus;
use thiserror::Error;

/// Errors returned when the drag protocol is driven out of order.
///
/// Every error leaves the transfer idle.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DragError {
    /// A gesture was started while another one is in progress.
    #[error("a drag gesture is already in progress")]
    AlreadyDragging,

    /// A drop arrived with no gesture in progress.
    #[error("no drag gesture is in progress")]
    NoActiveDrag,

    /// The drop target did not accept the payload.
    #[error("the {target} list did not accept the dragged payload")]
    DropNotAccepted {
        /// Status of the list that received the drop.
        target: ProjectStatus,
    },
}
