//! Quote card
//!
//! Full view of a single quote, used for both row details and random picks.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::format_age;
use crate::models::Quote;
use crate::tui::layout::centered_rect;

fn card_lines(quote: &Quote) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", quote.text),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
    ];

    if !quote.author.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("- {}", quote.author),
            Style::default().fg(Color::Cyan),
        )));
    }
    if !quote.category.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("[{}]", quote.category),
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("#{} · added {} ago", quote.id, format_age(quote.age())),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Space]", Style::default().fg(Color::Green)),
        Span::raw(" Random  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Back"),
    ]));
    lines
}

/// Render the quote card
pub fn render(frame: &mut Frame, quote: &Quote) {
    let area = centered_rect(70, 50, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Quote ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = Paragraph::new(card_lines(quote))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
