//! One list per project status.

use super::{Component, ListRenderer, ProjectCard};
use crate::{
    drag::{DragTransfer, DropTarget},
    project::{
        domain::{ProjectRecord, ProjectSnapshot, ProjectStatus},
        ports::{ListenerError, ProjectListener},
    },
};
use tracing::trace;

/// View of every project with one status.
///
/// The list listens to the store, keeps the records matching its status in
/// store order and renders them as cards. It is also a [`DropTarget`]: a
/// card dropped on it moves to the list's status.
#[derive(Debug)]
pub struct ProjectList<R> {
    status: ProjectStatus,
    target: DropTarget,
    assigned: Vec<ProjectRecord>,
    droppable: bool,
    renderer: R,
}

impl<R: ListRenderer> ProjectList<R> {
    /// Creates the list for `status`, drawing through `renderer`.
    #[must_use]
    pub fn new(status: ProjectStatus, renderer: R) -> Self {
        let mut list = Self {
            status,
            target: DropTarget::for_status(status),
            assigned: Vec::new(),
            droppable: false,
            renderer,
        };
        list.configure();
        list.render_content();
        list
    }

    /// Returns the status this list shows.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the drop target for this list.
    #[must_use]
    pub const fn target(&self) -> &DropTarget {
        &self.target
    }

    /// Returns the list identifier, e.g. `"active-projects-list"`.
    #[must_use]
    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    /// Returns the heading, e.g. `"ACTIVE PROJECTS"`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Returns the projects currently shown, in store order.
    #[must_use]
    pub fn assigned(&self) -> &[ProjectRecord] {
        &self.assigned
    }

    /// Returns `true` while an accepted card hovers over the list.
    #[must_use]
    pub const fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Returns the renderer.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Handles a card entering the list.
    ///
    /// Turns the drop highlight on when the list accepts the payload and
    /// returns whether it did.
    pub fn drag_over(&mut self, transfer: &mut DragTransfer) -> bool {
        let accepted = transfer.probe(&self.target);
        if accepted {
            self.set_droppable(true);
        }
        accepted
    }

    /// Handles a card leaving the list.
    pub fn drag_leave(&mut self, transfer: &mut DragTransfer) {
        transfer.leave();
        self.set_droppable(false);
    }

    /// Clears the drop highlight after a drop or a cancelled gesture.
    ///
    /// Committing the move is the caller's job, through
    /// [`DragTransfer::complete`]; the list must not be borrowed while the
    /// store publishes.
    pub fn drop_settled(&mut self) {
        self.set_droppable(false);
    }

    fn set_droppable(&mut self, droppable: bool) {
        if self.droppable != droppable {
            self.droppable = droppable;
            let list_id = self.list_id();
            self.renderer.set_droppable(&list_id, droppable);
        }
    }

    fn render_projects(&mut self) {
        let cards: Vec<ProjectCard> = self.assigned.iter().map(ProjectCard::from_record).collect();
        let list_id = self.list_id();
        trace!(list = %list_id, cards = cards.len(), "rendering project list");
        self.renderer.render_cards(&list_id, &cards);
    }
}

impl<R: ListRenderer> Component for ProjectList<R> {
    fn configure(&mut self) {
        self.assigned.clear();
        self.droppable = false;
        let list_id = self.list_id();
        self.renderer.set_droppable(&list_id, false);
    }

    fn render_content(&mut self) {
        let list_id = self.list_id();
        let heading = self.heading();
        self.renderer.render_heading(&list_id, &heading);
        self.render_projects();
    }
}

impl<R: ListRenderer> ProjectListener for ProjectList<R> {
    fn on_projects_changed(&mut self, snapshot: &ProjectSnapshot) -> Result<(), ListenerError> {
        self.assigned = snapshot.with_status(self.status).cloned().collect();
        self.render_projects();
        Ok(())
    }
}
