//! The drag gesture state machine.

use super::{DragError, DropTarget, TransferPayload};
use crate::project::{
    domain::{ProjectId, ProjectStatus},
    services::{MoveOutcome, ProjectStore},
};
use mockable::Clock;
use tracing::{debug, warn};

/// Phase of a drag gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A card is being dragged but is not over a list.
    Dragging,
    /// The card is over a list that accepts it.
    HoveringAccepted,
    /// The card is over a list that rejects it.
    HoveringRejected,
}

/// State of one drag gesture, from begin to drop or cancel.
///
/// ```text
/// Idle -> Dragging -> {HoveringAccepted, HoveringRejected} -> Idle
/// ```
///
/// Completing, cancelling and every protocol error return the transfer to
/// [`DragPhase::Idle`]; nothing survives from one gesture to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragTransfer {
    phase: DragPhase,
    payload: Option<TransferPayload>,
    hovered: Option<ProjectStatus>,
}

impl DragTransfer {
    /// Creates an idle transfer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns the attached payload while a gesture is in progress.
    #[must_use]
    pub const fn payload(&self) -> Option<&TransferPayload> {
        self.payload.as_ref()
    }

    /// Starts dragging the card of project `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] when a gesture is already in
    /// progress; that gesture is abandoned.
    pub fn begin(&mut self, id: ProjectId) -> Result<&TransferPayload, DragError> {
        self.begin_with(TransferPayload::for_project(id))
    }

    /// Starts a gesture with an arbitrary payload.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] when a gesture is already in
    /// progress; that gesture is abandoned.
    pub fn begin_with(&mut self, payload: TransferPayload) -> Result<&TransferPayload, DragError> {
        if self.phase != DragPhase::Idle {
            warn!(phase = ?self.phase, "drag started while another drag is in progress");
            self.reset();
            return Err(DragError::AlreadyDragging);
        }
        self.phase = DragPhase::Dragging;
        Ok(&*self.payload.insert(payload))
    }

    /// Reports that the card hovers over `target` and returns whether the
    /// target accepts the drop.
    ///
    /// Returns `false` without changing phase when no gesture is in
    /// progress.
    pub fn probe(&mut self, target: &DropTarget) -> bool {
        let Some(payload) = self.payload.as_ref() else {
            return false;
        };
        let accepted = target.accepts(payload);
        self.phase = if accepted {
            DragPhase::HoveringAccepted
        } else {
            DragPhase::HoveringRejected
        };
        self.hovered = Some(target.status());
        accepted
    }

    /// Reports that the card left the list it was hovering over.
    pub fn leave(&mut self) {
        if matches!(
            self.phase,
            DragPhase::HoveringAccepted | DragPhase::HoveringRejected
        ) {
            self.phase = DragPhase::Dragging;
            self.hovered = None;
        }
    }

    /// Drops the card on `target`, moving the project to the target's
    /// status through `store`.
    ///
    /// A payload that does not name a known project is a stale drag: the
    /// store is untouched and [`MoveOutcome::NotFound`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NoActiveDrag`] when no gesture is in progress
    /// and [`DragError::DropNotAccepted`] when `target` is not the list that
    /// last accepted the payload.
    pub fn complete<C: Clock>(
        &mut self,
        target: &DropTarget,
        store: &mut ProjectStore<C>,
    ) -> Result<MoveOutcome, DragError> {
        let phase = self.phase;
        let hovered = self.hovered;
        let taken = self.payload.take();
        self.reset();

        let Some(payload) = taken else {
            return Err(DragError::NoActiveDrag);
        };
        if phase != DragPhase::HoveringAccepted || hovered != Some(target.status()) {
            debug!(list = %target.status(), ?phase, "drop rejected");
            return Err(DragError::DropNotAccepted {
                target: target.status(),
            });
        }

        match payload.project_id() {
            Ok(id) => Ok(store.move_project(id, target.status())),
            Err(err) => {
                debug!(error = %err, "dropped payload does not name a project");
                Ok(MoveOutcome::NotFound)
            }
        }
    }

    /// Abandons the gesture. Moves already committed stay committed.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.payload = None;
        self.hovered = None;
    }
}
