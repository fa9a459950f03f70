pub mod status_bar;
pub mod tab_bar;
pub mod toasts;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
}

/// Trait for components that can handle input and render
pub trait Component {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
