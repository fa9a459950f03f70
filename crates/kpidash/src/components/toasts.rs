use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::notification_color;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of the toast stack in the top-right corner
const TOAST_WIDTH: u16 = 48;

/// Overlay of the analysis page's transient notifications.
pub struct Toasts;

impl Toasts {
    /// Area the toast stack occupies inside `area`.
    fn placement(area: Rect, count: usize) -> Rect {
        let width = TOAST_WIDTH.min(area.width);
        let height = (count as u16 * 3).min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y,
            width,
            height,
        }
    }
}

impl Component for Toasts {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.analysis.notifications();
        if notifications.is_empty() {
            return;
        }

        let stack = Self::placement(area, notifications.len());
        for (i, toast) in notifications.iter().enumerate() {
            let slot = Rect {
                y: stack.y + i as u16 * 3,
                height: 3,
                ..stack
            };
            if slot.bottom() > stack.bottom() {
                break;
            }

            let style = Style::default()
                .fg(notification_color(toast.kind))
                .add_modifier(Modifier::BOLD);
            let paragraph = Paragraph::new(Line::styled(toast.message.clone(), style))
                .block(Block::default().borders(Borders::ALL).border_style(style));

            frame.render_widget(Clear, slot);
            frame.render_widget(paragraph, slot);
        }
    }
}
