//! Port contracts for the project store.
//!
//! Ports define the seams through which collaborators observe the store.

pub mod listener;

pub use listener::{ListenerError, ProjectListener, SharedListener};

#[cfg(test)]
pub use listener::MockProjectListener;
