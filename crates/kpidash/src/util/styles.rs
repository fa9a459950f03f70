//! Common styling utilities for TUI components

use kpidash_core::NotificationKind;
use kpidash_core::TierId;
use kpidash_core::kpi::PerformanceLevel;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels and the active tab
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

pub const POSITIVE_COLOR: Color = Color::Green;

pub const NEGATIVE_COLOR: Color = Color::Red;

pub const WARNING_COLOR: Color = Color::Yellow;

/// Bordered block whose border turns yellow when focused.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

pub fn level_color(level: Option<&PerformanceLevel>) -> Color {
    match level {
        Some(PerformanceLevel::High) => POSITIVE_COLOR,
        Some(PerformanceLevel::Medium) => WARNING_COLOR,
        Some(PerformanceLevel::Low) => NEGATIVE_COLOR,
        Some(PerformanceLevel::Other(_)) | None => Color::Gray,
    }
}

pub fn tier_color(tier: Option<TierId>) -> Color {
    match tier {
        Some(TierId::Tier1) => Color::Magenta,
        Some(TierId::Tier2) => Color::Cyan,
        Some(TierId::Tier3) => Color::Blue,
        None => Color::DarkGray,
    }
}

pub fn notification_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => POSITIVE_COLOR,
        NotificationKind::Error => NEGATIVE_COLOR,
    }
}

/// Green above 0, red below.
pub fn change_color(change: f64) -> Color {
    if change >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

/// Text bar `width` cells wide filled to `percent`.
pub fn text_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
