//! Renderer port for project lists.

use super::ProjectCard;

/// External collaborator that draws project lists.
///
/// The view layer tells the renderer what to show; it never inspects the
/// rendering surface.
#[cfg_attr(test, mockall::automock)]
pub trait ListRenderer {
    /// Draws the list heading.
    fn render_heading(&mut self, list_id: &str, heading: &str);

    /// Replaces the cards shown in the list.
    fn render_cards(&mut self, list_id: &str, cards: &[ProjectCard]);

    /// Turns the drop highlight on or off.
    fn set_droppable(&mut self, list_id: &str, droppable: bool);
}

/// Renderer that remembers what it was last told to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
    /// Last list identifier seen.
    pub list_id: String,
    /// Last heading drawn.
    pub heading: String,
    /// Cards from the last render.
    pub cards: Vec<ProjectCard>,
    /// Whether the drop highlight is on.
    pub droppable: bool,
    /// Number of card renders so far.
    pub renders: usize,
}

impl RecordingRenderer {
    /// Creates a renderer that has drawn nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the titles of the cards currently shown.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.title.as_str()).collect()
    }
}

impl ListRenderer for RecordingRenderer {
    fn render_heading(&mut self, list_id: &str, heading: &str) {
        list_id.clone_into(&mut self.list_id);
        heading.clone_into(&mut self.heading);
    }

    fn render_cards(&mut self, list_id: &str, cards: &[ProjectCard]) {
        list_id.clone_into(&mut self.list_id);
        self.cards = cards.to_vec();
        self.renders += 1;
    }

    fn set_droppable(&mut self, _list_id: &str, droppable: bool) {
        self.droppable = droppable;
    }
}
