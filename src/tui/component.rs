use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive external data via props (struct fields), may hold
/// internal presentation state, and render to a `Frame` within a given
/// `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update internal caches
/// (layout measurements, scroll offsets) during the render pass. This
/// aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
