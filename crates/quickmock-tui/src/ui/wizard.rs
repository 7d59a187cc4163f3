//! Endpoint creation screens

use crate::app::COMMIT_KEY;
use crate::theme::Theme;
use quickmock_core::Method;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const CURSOR: &str = "█";

/// Method selector, one row per supported method.
pub fn method_select_lines(cursor: usize, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Select a method:",
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(Method::ALL.iter().enumerate().map(|(i, method)| {
        if i == cursor {
            Line::from(Span::styled(
                format!(" ▶ {}", method),
                Style::default()
                    .fg(theme.highlight_fg)
                    .bg(theme.highlight_bg)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("   {}", method),
                Style::default().fg(theme.fg),
            ))
        }
    }));
    lines
}

pub fn path_input_lines(
    method: Method,
    input: &str,
    error: Option<&str>,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        draft_summary(&[method.to_string()], theme),
        Line::default(),
        prompt_line("Enter path: ", input, theme),
    ];
    if let Some(error) = error {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(theme.error)),
            Span::styled(error.to_string(), Style::default().fg(theme.error)),
        ]));
    }
    lines
}

pub fn code_input_lines(
    method: Method,
    path: &str,
    input: &str,
    theme: &Theme,
) -> Vec<Line<'static>> {
    vec![
        draft_summary(&[method.to_string(), path.to_string()], theme),
        Line::default(),
        prompt_line("Enter HTTP response status code: ", input, theme),
        Line::from(Span::styled(
            "Unrecognized codes fall back to 200.",
            Style::default().fg(theme.muted),
        )),
    ]
}

pub fn response_input_lines(
    method: Method,
    path: &str,
    code: u16,
    input: &str,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        draft_summary(
            &[method.to_string(), path.to_string(), format!("→ {}", code)],
            theme,
        ),
        Line::default(),
        Line::from(Span::styled(
            format!("Enter response (confirm with {}):", COMMIT_KEY),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        )),
    ];

    let body: Vec<&str> = input.split('\n').collect();
    let last = body.len() - 1;
    lines.extend(body.into_iter().enumerate().map(|(i, text)| {
        let mut spans = vec![Span::raw(expand_tabs(text))];
        if i == last {
            spans.push(Span::styled(CURSOR, Style::default().fg(theme.key_fg)));
        }
        Line::from(spans)
    }));
    lines
}

/// Tabs are stored verbatim but drawn as spaces.
pub(super) fn expand_tabs(text: &str) -> String {
    text.replace('\t', "    ")
}

fn draft_summary(parts: &[String], theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("New endpoint: ", Style::default().fg(theme.muted)),
        Span::styled(
            parts.join(" "),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn prompt_line(prompt: &'static str, input: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(prompt, Style::default().fg(theme.fg)),
        Span::raw(input.to_string()),
        Span::styled(CURSOR, Style::default().fg(theme.key_fg)),
    ])
}
