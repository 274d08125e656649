//! Capability set shared by every view.

/// A view that can be configured and drawn.
pub trait Component {
    /// Resets the view to its initial, unrendered state.
    fn configure(&mut self);

    /// Pushes the view's current state to its renderer.
    fn render_content(&mut self);
}
