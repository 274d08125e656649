//! Project board: a small project tracker core.
//!
//! Projects are created through a validated form, kept in a single store and
//! shown in two lists, one per status. Moving a project between lists is a
//! drag-and-drop gesture that ends in a status transition on the store.
//!
//! # Architecture
//!
//! The board follows hexagonal architecture principles:
//!
//! - **Domain**: project records, identifiers and snapshots
//! - **Ports**: the listener and renderer traits the core talks through
//! - **Adapters**: concrete listeners and renderers
//! - **Services**: the store, the listener registry and the intake gate
//!
//! # Modules
//!
//! - [`project`]: records, the store and change notification
//! - [`validation`]: field constraints and board configuration
//! - [`drag`]: the drag transfer protocol
//! - [`view`]: list, card and form view models
//! - [`board`]: assembly of all of the above

pub mod board;
pub mod drag;
pub mod project;
pub mod validation;
pub mod view;
