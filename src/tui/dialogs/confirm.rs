//! Delete confirmation dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::truncate;
use crate::models::{Quote, Todo};
use crate::tui::layout::centered_rect_fixed;

/// Detail lines shown for a todo about to be deleted
pub fn todo_details(todo: &Todo) -> Vec<String> {
    vec![
        format!("ID: #{}", todo.id),
        format!("Description: {}", truncate(&todo.description, 40)),
        format!("Priority: {}", todo.priority),
        format!("Status: {}", todo.status),
    ]
}

pub fn quote_details(quote: &Quote) -> Vec<String> {
    let mut lines = vec![
        format!("ID: #{}", quote.id),
        format!("Quote: {}", truncate(&quote.text, 40)),
    ];
    if !quote.author.is_empty() {
        lines.push(format!("Author: {}", quote.author));
    }
    lines
}

/// Render a confirmation dialog
pub fn render(frame: &mut Frame, title: &str, details: &[String]) {
    let area = centered_rect_fixed(56, details.len() as u16 + 6, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![Line::from("")];
    lines.extend(
        details
            .iter()
            .map(|d| Line::from(Span::styled(d.clone(), Style::default().fg(Color::White)))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[Y]", Style::default().fg(Color::Green)),
        Span::raw(" Yes  "),
        Span::styled("[N]", Style::default().fg(Color::Red)),
        Span::raw(" No  "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Cancel"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Status};
    use chrono::Utc;

    #[test]
    fn test_todo_details() {
        let now = Utc::now();
        let todo = Todo {
            id: 4,
            description: "Water plants".into(),
            priority: Priority::High,
            status: Status::Done,
            created_at: now,
            updated_at: now,
            completed_at: Some(now),
        };
        assert_eq!(
            todo_details(&todo),
            vec![
                "ID: #4",
                "Description: Water plants",
                "Priority: HIGH",
                "Status: DONE"
            ]
        );
    }

    #[test]
    fn test_quote_details_skip_empty_author() {
        let now = Utc::now();
        let quote = Quote {
            id: 2,
            text: "Less is more".into(),
            author: String::new(),
            category: String::new(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(quote_details(&quote).len(), 2);
    }
}
