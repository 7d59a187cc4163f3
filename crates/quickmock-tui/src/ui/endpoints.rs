//! Endpoint list view

use crate::theme::Theme;
use quickmock_core::Endpoint;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Lines for the endpoint list, one per endpoint in registry order.
pub fn list_lines(endpoints: &[Endpoint], cursor: usize, theme: &Theme) -> Vec<Line<'static>> {
    if endpoints.is_empty() {
        return vec![Line::from(Span::styled(
            "No endpoints. Press 'c' to create one.",
            Style::default().fg(theme.muted),
        ))];
    }

    endpoints
        .iter()
        .enumerate()
        .map(|(i, endpoint)| {
            let is_selected = i == cursor;
            let row_style = if is_selected {
                Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };

            Line::from(vec![
                Span::styled(if is_selected { " ▶ " } else { "   " }, row_style),
                Span::styled(
                    format!("{} {}", endpoint.method, endpoint.path),
                    row_style,
                ),
                Span::styled(
                    format!("  → {}", endpoint.response.code),
                    Style::default().fg(status_color(endpoint.response.code, theme)),
                ),
            ])
        })
        .collect()
}

/// Color a status code by class
pub(super) fn status_color(code: u16, theme: &Theme) -> ratatui::style::Color {
    match code {
        200..=299 => theme.success,
        300..=399 => theme.fg,
        400..=499 => theme.warning,
        500..=599 => theme.error,
        _ => theme.muted,
    }
}
