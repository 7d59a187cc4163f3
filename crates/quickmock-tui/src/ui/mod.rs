//! UI rendering for the console
//!
//! Every screen has a function turning its state into lines of text. They
//! only read the console, so drawing a frame never changes what the next
//! key press does.

mod detail;
mod endpoints;
mod wizard;

use crate::app::{Console, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub use detail::detail_lines;
pub use endpoints::list_lines;
pub use wizard::{code_input_lines, method_select_lines, path_input_lines, response_input_lines};

/// Main draw function
pub fn draw(frame: &mut Frame, console: &Console) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(3), // Command bar
        ])
        .split(frame.area());

    draw_header(frame, console, chunks[0]);
    draw_body(frame, console, chunks[1]);
    draw_command_bar(frame, console, chunks[2]);
}

/// Lines for the active screen.
pub fn screen_lines(console: &Console) -> Vec<Line<'static>> {
    let theme = &console.theme;
    match console.screen() {
        Screen::List { cursor } => {
            list_lines(&console.registry().snapshot_for_match(), *cursor, theme)
        }
        Screen::Detail { endpoint, .. } => detail_lines(endpoint, theme),
        Screen::MethodSelect { cursor } => method_select_lines(*cursor, theme),
        Screen::PathInput {
            method,
            input,
            error,
        } => path_input_lines(*method, input, error.as_deref(), theme),
        Screen::CodeInput {
            method,
            path,
            input,
        } => code_input_lines(*method, path, input, theme),
        Screen::ResponseInput {
            method,
            path,
            code,
            input,
        } => response_input_lines(*method, path, *code, input, theme),
    }
}

fn screen_title(console: &Console) -> String {
    match console.screen() {
        Screen::List { .. } => format!(" Endpoints ({}) ", console.registry().len()),
        Screen::Detail { index, .. } => format!(" Endpoint #{} ", index),
        Screen::MethodSelect { .. } => " New endpoint: method ".to_string(),
        Screen::PathInput { .. } => " New endpoint: path ".to_string(),
        Screen::CodeInput { .. } => " New endpoint: status code ".to_string(),
        Screen::ResponseInput { .. } => " New endpoint: response ".to_string(),
    }
}

/// Draw the header bar
fn draw_header(frame: &mut Frame, console: &Console, area: Rect) {
    let theme = &console.theme;
    let stats = console.stats();

    let title = Line::from(vec![
        Span::styled(
            " Quickmock ",
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.header_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!("● Listening on {}", console.listen_addr()),
            Style::default().fg(theme.success),
        ),
        Span::raw(" │ "),
        Span::styled(
            format!(
                "Endpoints: {}  Requests: {}  Unmatched: {}",
                console.registry().len(),
                stats.total(),
                stats.unmatched()
            ),
            Style::default().fg(theme.muted),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    frame.render_widget(Paragraph::new(title).block(block), area);
}

fn draw_body(frame: &mut Frame, console: &Console, area: Rect) {
    let theme = &console.theme;
    let lines = screen_lines(console);

    // Keep the selected row visible in long lists
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = match console.screen() {
        Screen::List { cursor } | Screen::MethodSelect { cursor } if visible > 0 => {
            cursor.saturating_sub(visible - 1)
        }
        _ => 0,
    };

    let block = Block::default()
        .title(screen_title(console))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}

/// Command definition (key, label)
type Command = (&'static str, &'static str);

/// Get context-sensitive commands as (key, label) pairs
fn get_commands(screen: &Screen) -> Vec<Command> {
    match screen {
        Screen::List { .. } => vec![
            ("c", "Create"),
            ("d", "Delete"),
            ("↑/↓", "Navigate"),
            ("Enter", "View"),
            ("Esc", "Exit"),
        ],
        Screen::Detail { .. } => vec![("Esc", "Back"), ("^C", "Exit")],
        Screen::MethodSelect { .. } => vec![
            ("↑/↓", "Navigate"),
            ("Enter", "Select"),
            ("Esc", "Cancel"),
        ],
        Screen::PathInput { .. } | Screen::CodeInput { .. } => {
            vec![("Enter", "Next"), ("Esc", "Cancel")]
        }
        Screen::ResponseInput { .. } => vec![
            ("`", "Save"),
            ("Enter", "Newline"),
            ("Tab", "Tab"),
            ("Esc", "Cancel"),
        ],
    }
}

/// Draw the command bar with [key] notation and separators
fn draw_command_bar(frame: &mut Frame, console: &Console, area: Rect) {
    let theme = &console.theme;
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, label)) in get_commands(console.screen()).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(theme.key_fg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(theme.cmd_fg),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// Plain text of a rendered line, without styling.
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}
