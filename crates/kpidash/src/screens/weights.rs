use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, NEGATIVE_COLOR, WARNING_COLOR, text_bar, tier_color};
use crossterm::event::{KeyCode, KeyEvent};
use kpidash_core::Phase;
use kpidash_core::view::{TierCard, WeightsView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

/// Cells in each weight bar
const BAR_WIDTH: usize = 24;

pub struct WeightsScreen;

impl WeightsScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let style = Style::default().fg(NEGATIVE_COLOR);
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(message.to_string(), style.add_modifier(Modifier::BOLD))),
            Line::from(""),
            Line::from(Span::styled("Press r to retry", Style::default().fg(HELP_COLOR))),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(" ERROR "),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect, text: &str) {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(WARNING_COLOR),
        )))
        .block(Block::default().borders(Borders::ALL).title(" ALGORITHM WEIGHTS "));
        frame.render_widget(paragraph, area);
    }

    fn render_view(&self, frame: &mut Frame, area: Rect, view: &WeightsView) {
        let card_height = view
            .tier_cards
            .iter()
            .map(|card| card.kpis.len() as u16 + 4)
            .max()
            .unwrap_or(0);
        let description_height = if view.description.is_some() { 3 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                  // Summary
                Constraint::Length(description_height), // Algorithm description
                Constraint::Length(card_height),        // Tier cards
                Constraint::Min(0),                     // Weights table
            ])
            .split(area);

        self.render_summary(frame, chunks[0], view);
        if let Some(description) = &view.description {
            frame.render_widget(
                Paragraph::new(description.clone())
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).title(" ALGORITHM ")),
                chunks[1],
            );
        }
        self.render_tier_cards(frame, chunks[2], &view.tier_cards);
        self.render_table(frame, chunks[3], view);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, view: &WeightsView) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, view.summary.len().max(1) as u32); view.summary.len()])
            .split(area);

        for (stat, column) in view.summary.iter().zip(columns.iter()) {
            let paragraph = Paragraph::new(Line::from(vec![
                Span::raw(format!("{}: ", stat.tier.name())),
                Span::styled(
                    stat.percent.clone(),
                    Style::default()
                        .fg(tier_color(Some(stat.tier)))
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", stat.tier.badge())));
            frame.render_widget(paragraph, *column);
        }
    }

    fn render_tier_cards(&self, frame: &mut Frame, area: Rect, cards: &[TierCard]) {
        if cards.is_empty() {
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, cards.len() as u32); cards.len()])
            .split(area);

        for (card, column) in cards.iter().zip(columns.iter()) {
            let color = tier_color(Some(card.tier));
            let mut lines = vec![
                Line::from(Span::styled(
                    card.description,
                    Style::default().fg(HELP_COLOR),
                )),
                Line::from(""),
            ];
            lines.extend(card.kpis.iter().map(|kpi| {
                Line::from(vec![
                    Span::raw(format!("{:<28}", kpi.name)),
                    Span::styled(kpi.weight.clone(), Style::default().fg(color)),
                ])
            }));

            let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ({}) ", card.title, card.weight)),
            );
            frame.render_widget(paragraph, *column);
        }
    }

    fn render_table(&self, frame: &mut Frame, area: Rect, view: &WeightsView) {
        let header = Row::new(vec!["KPI", "Tier", "Weight", "Share"]).style(
            Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = view
            .table
            .iter()
            .map(|row| {
                let color = tier_color(row.badge.tier());
                Row::new(vec![
                    Cell::from(row.name.clone()),
                    Cell::from(Span::styled(row.badge.label(), Style::default().fg(color))),
                    Cell::from(row.weight_text.clone()),
                    Cell::from(Span::styled(
                        text_bar(row.bar_percent, BAR_WIDTH),
                        Style::default().fg(color),
                    )),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(30),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Min(BAR_WIDTH as u16),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" KPI WEIGHTS (heaviest first) "),
        );
        frame.render_widget(table, area);
    }
}

impl Component for WeightsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('r') => {
                let ticket = state.weights.load();
                state.queue(ticket);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        match (state.weights.phase(), state.weights.view()) {
            (Phase::Error(message), _) => self.render_error(frame, area, message),
            (Phase::Loading { message }, _) => self.render_placeholder(frame, area, message),
            (_, Some(view)) => self.render_view(frame, area, view),
            (_, None) => self.render_placeholder(frame, area, "Press r to load algorithm weights"),
        }
    }
}
