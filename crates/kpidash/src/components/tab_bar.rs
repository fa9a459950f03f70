use super::{Component, EventResult};
use crate::state::{AppState, TabId};
use crate::util::styles::FOCUS_COLOR;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

pub struct TabBar;

impl Component for TabBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // Digits are field input while editing
        if state.editing {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char('1') => {
                state.switch_tab(TabId::Analysis);
                EventResult::Handled
            }
            KeyCode::Char('2') => {
                state.switch_tab(TabId::Weights);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let active = Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD);

        let titles: Vec<Line> = TabId::ALL
            .iter()
            .enumerate()
            .map(|(idx, tab)| {
                let content = format!("[{}] {}", idx + 1, tab.name());
                if *tab == state.active_tab {
                    Line::from(Span::styled(content, active))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.active_tab.index())
            .highlight_style(active);

        frame.render_widget(tabs, area);
    }
}
