//! Application services for the project board.
//!
//! [`ProjectStore`] owns the records and the [`ListenerRegistry`];
//! [`ProjectIntake`] is the validation gate in front of creation.

mod intake;
mod registry;
mod store;

pub use intake::{
    CreateProjectRequest, FieldViolation, ProjectField, ProjectInputError, ProjectIntake,
    ValidationFailure,
};
pub use registry::{ListenerRegistry, NotifyReport};
pub use store::{MoveOutcome, ProjectStore};
