//! Endpoint detail view

use super::endpoints::status_color;
use crate::theme::Theme;
use quickmock_core::Endpoint;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Read-only view of one endpoint, body included verbatim.
pub fn detail_lines(endpoint: &Endpoint, theme: &Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Method:  ", label),
            Span::styled(endpoint.method.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Path:    ", label),
            Span::styled(endpoint.path.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Code:    ", label),
            Span::styled(
                endpoint.response.code.to_string(),
                value.fg(status_color(endpoint.response.code, theme)),
            ),
        ]),
        Line::from(Span::styled("Content:", label)),
    ];

    if endpoint.response.content.is_empty() {
        lines.push(Line::from(Span::styled("(empty)", label)));
    } else {
        lines.extend(
            endpoint
                .response
                .content
                .split('\n')
                .map(|l| Line::from(super::wizard::expand_tabs(l))),
        );
    }
    lines
}
