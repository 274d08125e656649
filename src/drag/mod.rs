//! Drag-and-drop status transitions.
//!
//! A drag gesture carries a project identifier from a card to a list. The
//! protocol has three phases: *begin* attaches the identifier to a
//! [`TransferPayload`], *probe* asks a [`DropTarget`] whether it accepts the
//! payload, and *complete* commits the move through
//! [`ProjectStore::move_project`](crate::project::services::ProjectStore::move_project).
//! There is no separate mutation path for drags.

mod error;
mod payload;
mod target;
mod transfer;

pub use error::DragError;
pub use payload::{PROJECT_ID_MEDIA_TYPE, TransferPayload};
pub use target::DropTarget;
pub use transfer::{DragPhase, DragTransfer};
