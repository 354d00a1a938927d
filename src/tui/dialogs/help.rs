//! Help dialog
//!
//! Lists every keybinding, grouped by context, in two columns

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

const LEFT: [KeyContext; 3] = [KeyContext::Global, KeyContext::Dashboard, KeyContext::Todos];
const RIGHT: [KeyContext; 4] = [
    KeyContext::Quotes,
    KeyContext::QuoteCard,
    KeyContext::Form,
    KeyContext::Confirm,
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(80, 90, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    frame.render_widget(Paragraph::new(section_lines(&LEFT)), columns[0]);
    frame.render_widget(Paragraph::new(section_lines(&RIGHT)), columns[1]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        ))),
        rows[1],
    );
}

fn section_lines(contexts: &[KeyContext]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for &context in contexts {
        lines.push(Line::from(vec![Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]));
        for kb in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(kb), kb.description));
        }
        lines.push(Line::from(""));
    }

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
