use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow their
/// persistent state mutably, and render to a `Frame` within a `Rect`.
///
/// `render` takes `&mut self` so a component can cache layout (e.g. the
/// last drawn area, used for mouse hit testing) during the render pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Subscription contract between the event loop and a component.
///
/// The loop forwards raw `TuiEvent`s to whichever component has focus; the
/// component answers with its own typed event, which the loop maps onto a
/// core `Action`.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
