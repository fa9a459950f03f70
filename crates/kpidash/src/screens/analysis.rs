use std::time::Instant;

use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{
    HEADER_COLOR, HELP_COLOR, change_color, focused_block, level_color, tier_color,
};
use crossterm::event::{KeyCode, KeyEvent};
use kpidash_core::controller::DisplayedAnalysis;
use kpidash_core::view::analysis::NO_RECOMMENDATIONS;
use kpidash_core::view::{ComparisonView, RecommendationCard};
use kpidash_core::FieldKind;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Width of the metrics form column
const FORM_WIDTH: u16 = 44;

pub struct AnalysisScreen;

impl AnalysisScreen {
    pub fn new() -> Self {
        Self
    }

    fn handle_edit_key(key: KeyEvent, state: &mut AppState) -> EventResult {
        let cursor = state.form_cursor;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => state.editing = false,
            KeyCode::Backspace => {
                if let Some(field) = state.analysis.form_mut().field_at_mut(cursor) {
                    field.value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(field) = state.analysis.form_mut().field_at_mut(cursor) {
                    field.value.push(c);
                }
            }
            _ => {}
        }
        EventResult::Handled
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = Vec::new();
        let mut selected_line = 0;
        let mut section = "";

        for (i, field) in state.analysis.form().fields().iter().enumerate() {
            if field.section != section {
                section = field.section;
                if !lines.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    section.to_uppercase(),
                    Style::default().fg(HEADER_COLOR).add_modifier(Modifier::BOLD),
                )));
            }

            let selected = i == state.form_cursor;
            if selected {
                selected_line = lines.len();
            }

            let value = if selected && state.editing {
                format!("{}▏", field.value)
            } else if field.value.is_empty() {
                match field.kind {
                    FieldKind::Text => "(text)".to_string(),
                    FieldKind::Numeric => "-".to_string(),
                }
            } else {
                field.value.clone()
            };

            let label_style = if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            let value_style = if field.value.is_empty() && !(selected && state.editing) {
                Style::default().fg(HELP_COLOR)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            lines.push(Line::from(vec![
                Span::styled(format!(" {:<28}", field.label()), label_style),
                Span::raw(" "),
                Span::styled(value, value_style),
            ]));
        }

        // Keep the selected field in view
        let visible = area.height.saturating_sub(2) as usize;
        let offset = selected_line.saturating_sub(visible.saturating_sub(1));

        let paragraph = Paragraph::new(lines)
            .scroll((offset as u16, 0))
            .block(focused_block(" CREATOR METRICS ", state.editing));
        frame.render_widget(paragraph, area);
    }

    fn render_results(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let analysis = state.analysis.analysis();
        let comparison = state.analysis.comparison();

        if analysis.is_none() && comparison.is_none() {
            let paragraph = Paragraph::new(vec![
                Line::from("No analysis yet."),
                Line::from(""),
                Line::from(Span::styled(
                    "[d] load demo data  [a] analyze  [c] compare algorithms",
                    Style::default().fg(HELP_COLOR),
                )),
            ])
            .block(Block::default().borders(Borders::ALL).title(" RESULTS "));
            frame.render_widget(paragraph, area);
            return;
        }

        let comparison_height = match comparison {
            Some(view) => 6 + view.benefits.len() as u16,
            None => 0,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(comparison_height)])
            .split(area);

        if let Some(analysis) = analysis {
            self.render_analysis(frame, chunks[0], analysis);
        }
        if let Some(view) = comparison {
            let change = state
                .analysis
                .comparison_result()
                .map(|r| r.percentage_change)
                .unwrap_or_default();
            self.render_comparison(frame, chunks[1], view, change);
        }
    }

    fn render_analysis(&self, frame: &mut Frame, area: Rect, analysis: &DisplayedAnalysis) {
        let view = &analysis.view;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                          // Overall score
                Constraint::Length(view.tiers.len() as u16 + 3), // Tiers
                Constraint::Min(0),                             // Scores + recommendations
            ])
            .split(area);

        let title = match &view.header {
            Some(header) => format!(" OVERALL SCORE · {header} "),
            None => " OVERALL SCORE ".to_string(),
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(view.overall_bar_percent / 100.0)
            .label(format!(
                "{}  (revenue focus {})",
                view.overall_score, view.revenue_focus_score
            ));
        frame.render_widget(gauge, chunks[0]);

        let mut tier_lines = vec![Line::from(Span::styled(
            format!("{:<32} {:>7} {:>9}", "Tier", "Weight", "Average"),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        tier_lines.extend(view.tiers.iter().map(|tier| {
            Line::from(Span::styled(
                format!("{:<32} {:>7} {:>9}", tier.title, tier.weight, tier.average),
                Style::default().fg(tier_color(Some(tier.tier))),
            ))
        }));
        frame.render_widget(
            Paragraph::new(tier_lines)
                .block(Block::default().borders(Borders::ALL).title(" TIER BREAKDOWN ")),
            chunks[1],
        );

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[2]);

        let score_lines: Vec<Line> = view
            .scores
            .iter()
            .map(|entry| {
                let badge = entry.tier.map(|t| t.badge()).unwrap_or("");
                Line::from(vec![
                    Span::raw(format!("{:<28} ", entry.name)),
                    Span::styled(
                        entry.value.clone(),
                        Style::default()
                            .fg(level_color(entry.level.as_ref()))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {badge}"),
                        Style::default().fg(tier_color(entry.tier)),
                    ),
                ])
            })
            .collect();
        frame.render_widget(
            Paragraph::new(score_lines)
                .block(Block::default().borders(Borders::ALL).title(" INDIVIDUAL SCORES ")),
            bottom[0],
        );

        let revealed = analysis.revealed_cards(Instant::now());
        let recommendation_lines = if view.recommendations.is_empty() {
            vec![Line::from(Span::styled(
                NO_RECOMMENDATIONS,
                Style::default().fg(HELP_COLOR),
            ))]
        } else {
            view.recommendations
                .iter()
                .take(revealed)
                .flat_map(recommendation_lines)
                .collect()
        };
        frame.render_widget(
            Paragraph::new(recommendation_lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" RECOMMENDATIONS ")),
            bottom[1],
        );
    }

    fn render_comparison(&self, frame: &mut Frame, area: Rect, view: &ComparisonView, change: f64) {
        let change_style = Style::default()
            .fg(change_color(change))
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("New weighted score:   {}    ", view.new_score)),
                Span::raw(format!("Equal weighted score: {}", view.equal_score)),
            ]),
            Line::from(vec![
                Span::raw("Improvement: "),
                Span::styled(view.change.clone(), change_style),
                Span::raw(
                    view.difference
                        .as_ref()
                        .map(|d| format!("  (difference {d})"))
                        .unwrap_or_default(),
                ),
            ]),
            Line::from(Span::styled(
                "Algorithm benefits",
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        lines.extend(view.benefits.iter().map(|b| Line::from(format!("  • {b}"))));

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" ALGORITHM COMPARISON ")),
            area,
        );
    }
}

fn recommendation_lines(card: &RecommendationCard) -> Vec<Line<'static>> {
    let mut title = vec![Span::styled(
        card.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(severity) = &card.severity {
        title.push(Span::styled(
            format!("  [{severity}]"),
            Style::default().fg(Color::Red),
        ));
    }
    title.push(Span::styled(
        format!("  {}", card.priority),
        Style::default().fg(HEADER_COLOR),
    ));

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            format!(
                "Improvement {} | Confidence {} | Effort {} | Cost {}",
                card.expected_improvement, card.confidence, card.effort, card.cost_level
            ),
            Style::default().fg(HELP_COLOR),
        )),
    ];
    if let Some(kpi) = &card.kpi_affected {
        lines.push(Line::from(format!("KPI: {kpi}")));
    }
    lines.extend(card.actions.iter().map(|a| Line::from(format!("  • {a}"))));
    lines.push(Line::from(""));
    lines
}

impl Component for AnalysisScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.editing {
            return Self::handle_edit_key(key, state);
        }

        let now = Instant::now();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.select_next_field();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.select_prev_field();
                EventResult::Handled
            }
            KeyCode::Enter => {
                state.editing = state.selected_field().is_some();
                EventResult::Handled
            }
            KeyCode::Char('d') => {
                let ticket = state.analysis.load_demo_data();
                state.queue(ticket);
                EventResult::Handled
            }
            KeyCode::Char('a') => {
                if let Ok(ticket) = state.analysis.analyze_creator(now) {
                    state.queue(ticket);
                }
                EventResult::Handled
            }
            KeyCode::Char('c') => {
                if let Ok(ticket) = state.analysis.compare_algorithms(now) {
                    state.queue(ticket);
                }
                EventResult::Handled
            }
            KeyCode::Char('x') => {
                state.analysis.reset_form(now);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(0)])
            .split(area);

        self.render_form(frame, chunks[0], state);
        self.render_results(frame, chunks[1], state);
    }
}
