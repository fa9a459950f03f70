use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::{HELP_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR, WARNING_COLOR};
use crossterm::event::KeyEvent;
use kpidash_core::Phase;
use kpidash_core::controller::HealthIndicator;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    fn help_text(state: &AppState) -> &'static str {
        if state.editing {
            return "type to edit | Backspace: delete | Enter/Esc: done";
        }
        match state.active_tab {
            TabId::Analysis => {
                "1-2: tabs | j/k: field | Enter: edit | d: demo | a: analyze | c: compare | x: reset | q: quit"
            }
            TabId::Weights => "1-2: tabs | r: reload | q: quit",
        }
    }

    fn health_span(health: &HealthIndicator) -> Span<'static> {
        let color = match health {
            HealthIndicator::Online { .. } => POSITIVE_COLOR,
            HealthIndicator::Offline => NEGATIVE_COLOR,
            HealthIndicator::Unknown => Color::Gray,
        };
        let text = match health {
            HealthIndicator::Online {
                version: Some(version),
                ..
            } => format!("● {} v{} ", health.label(), version),
            _ => format!("● {} ", health.label()),
        };
        Span::styled(text, Style::default().fg(color))
    }

    /// Loading message of the controller owning the active tab.
    fn loading_message(state: &AppState) -> Option<&str> {
        let phase = match state.active_tab {
            TabId::Analysis => state.analysis.phase(),
            TabId::Weights => state.weights.phase(),
        };
        match phase {
            Phase::Loading { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![Self::health_span(state.analysis.health())];

        if let Some(error) = state.error_message() {
            spans.push(Span::styled("Error: ", Style::default().fg(NEGATIVE_COLOR)));
            spans.push(Span::raw(error.to_string()));
        } else if let Some(message) = Self::loading_message(state) {
            spans.push(Span::styled(
                format!("⟳ {message}"),
                Style::default().fg(WARNING_COLOR),
            ));
        } else {
            spans.push(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
