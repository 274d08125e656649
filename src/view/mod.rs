//! View models that sit between the store and an external renderer.
//!
//! Nothing here draws anything. Lists and the form keep the state a
//! renderer needs and push it through the [`ListRenderer`] port; the
//! embedding application decides what rendering means.

mod card;
mod component;
mod form;
mod list;
mod renderer;

pub use card::{ProjectCard, persons_label};
pub use component::Component;
pub use form::ProjectForm;
pub use list::ProjectList;
pub use renderer::{ListRenderer, RecordingRenderer};

#[cfg(test)]
pub use renderer::MockListRenderer;
