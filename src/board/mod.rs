//! Top-level assembly of the project board.
//!
//! [`ProjectBoard`] owns the store and wires the form and both status lists
//! to it. It is the only place that knows about every part at once; the
//! parts themselves only meet through the listener and drop-target ports.

use crate::{
    drag::{DragError, DragTransfer},
    project::{
        domain::{ProjectId, ProjectRecord, ProjectStatus},
        ports::{ProjectListener, SharedListener},
        services::{MoveOutcome, ProjectInputError, ProjectIntake, ProjectStore},
    },
    validation::ProjectConstraints,
    view::{ListRenderer, ProjectForm, ProjectList},
};
use mockable::{Clock, DefaultClock};
use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};
use tracing::debug;

type SharedList<R> = Rc<RefCell<ProjectList<R>>>;

/// A project board: one store, one form, an active list and a finished list.
///
/// # Examples
///
/// ```
/// use project_board::{
///     board::ProjectBoard,
///     project::domain::ProjectStatus,
///     view::RecordingRenderer,
/// };
///
/// let mut board = ProjectBoard::new(RecordingRenderer::new(), RecordingRenderer::new());
/// board.form_mut().fill("Build API", "Design and implement REST endpoints", "3");
/// let record = board.submit_form().expect("valid input");
///
/// board.begin_drag(record.id()).expect("idle board");
/// assert!(board.drag_over(ProjectStatus::Finished));
/// board.drop_on(ProjectStatus::Finished).expect("accepted drop");
///
/// assert_eq!(board.list(ProjectStatus::Finished).renderer().titles(), ["Build API"]);
/// ```
pub struct ProjectBoard<R, C = DefaultClock>
where
    R: ListRenderer + 'static,
    C: Clock,
{
    store: ProjectStore<C>,
    intake: ProjectIntake,
    form: ProjectForm,
    active: SharedList<R>,
    finished: SharedList<R>,
    transfer: DragTransfer,
}

impl<R> ProjectBoard<R, DefaultClock>
where
    R: ListRenderer + 'static,
{
    /// Creates a board with the default constraints and the system clock.
    #[must_use]
    pub fn new(active: R, finished: R) -> Self {
        Self::with_parts(
            ProjectStore::new(),
            ProjectConstraints::default(),
            active,
            finished,
        )
    }
}

impl<R, C> ProjectBoard<R, C>
where
    R: ListRenderer + 'static,
    C: Clock,
{
    /// Creates a board around `store`, validating input against
    /// `constraints`.
    ///
    /// Both lists are registered on the store, active first.
    #[must_use]
    pub fn with_parts(
        mut store: ProjectStore<C>,
        constraints: ProjectConstraints,
        active_renderer: R,
        finished_renderer: R,
    ) -> Self {
        let active = Rc::new(RefCell::new(ProjectList::new(
            ProjectStatus::Active,
            active_renderer,
        )));
        let finished = Rc::new(RefCell::new(ProjectList::new(
            ProjectStatus::Finished,
            finished_renderer,
        )));
        store.add_listener(SharedListener::new(Rc::clone(&active)));
        store.add_listener(SharedListener::new(Rc::clone(&finished)));
        Self {
            store,
            intake: ProjectIntake::with_constraints(constraints),
            form: ProjectForm::new(),
            active,
            finished,
            transfer: DragTransfer::new(),
        }
    }

    /// Registers an extra observer after the two lists.
    pub fn add_listener(&mut self, listener: impl ProjectListener + 'static) {
        self.store.add_listener(listener);
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &ProjectStore<C> {
        &self.store
    }

    /// Returns the form.
    #[must_use]
    pub const fn form(&self) -> &ProjectForm {
        &self.form
    }

    /// Returns the form for editing.
    pub const fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    /// Returns the in-progress drag gesture.
    #[must_use]
    pub const fn transfer(&self) -> &DragTransfer {
        &self.transfer
    }

    /// Borrows the list showing projects with `status`.
    ///
    /// The borrow must be released before the board is mutated again.
    #[must_use]
    pub fn list(&self, status: ProjectStatus) -> Ref<'_, ProjectList<R>> {
        self.handle(status).borrow()
    }

    /// Submits the form.
    ///
    /// # Errors
    ///
    /// Returns the [`ProjectInputError`] that refused the input; the store
    /// and the form inputs are left as they were.
    pub fn submit_form(&mut self) -> Result<ProjectRecord, ProjectInputError> {
        self.form.submit(&self.intake, &mut self.store)
    }

    /// Starts dragging the card of project `id`.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::AlreadyDragging`] when a gesture is already in
    /// progress.
    pub fn begin_drag(&mut self, id: ProjectId) -> Result<(), DragError> {
        self.transfer.begin(id).map(|_| ())
    }

    /// Moves the dragged card over the list for `status`.
    ///
    /// Returns whether the list accepts the drop.
    pub fn drag_over(&mut self, status: ProjectStatus) -> bool {
        let list = Rc::clone(self.handle(status));
        list.borrow_mut().drag_over(&mut self.transfer)
    }

    /// Moves the dragged card off the list for `status`.
    pub fn drag_leave(&mut self, status: ProjectStatus) {
        let list = Rc::clone(self.handle(status));
        list.borrow_mut().drag_leave(&mut self.transfer);
    }

    /// Drops the dragged card on the list for `status`.
    ///
    /// Every list's drop highlight is cleared, whichever list was hovered.
    ///
    /// # Errors
    ///
    /// Returns [`DragError`] when no gesture is in progress or the list did
    /// not accept the payload.
    pub fn drop_on(&mut self, status: ProjectStatus) -> Result<MoveOutcome, DragError> {
        let target = *self.handle(status).borrow().target();
        let outcome = self.transfer.complete(&target, &mut self.store);
        self.settle_lists();
        debug!(list = %status, ?outcome, "drop handled");
        outcome
    }

    /// Abandons the drag gesture and clears every drop highlight.
    pub fn cancel_drag(&mut self) {
        self.transfer.cancel();
        self.settle_lists();
    }

    fn settle_lists(&self) {
        self.active.borrow_mut().drop_settled();
        self.finished.borrow_mut().drop_settled();
    }

    const fn handle(&self, status: ProjectStatus) -> &SharedList<R> {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }
}

impl<R, C> std::fmt::Debug for ProjectBoard<R, C>
where
    R: ListRenderer + 'static,
    C: Clock,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectBoard")
            .field("store", &self.store)
            .field("form", &self.form)
            .field("transfer", &self.transfer)
            .finish_non_exhaustive()
    }
}
