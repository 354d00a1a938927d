//! Status bar view
//!
//! Shows the current screen, row counts and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};

const HINTS: &str = " Tab:Switch  ?:Help  q:Quit ";
const FORM_HINTS: &str = " Tab:Next field  Enter:Save  Esc:Cancel ";

/// Key hints for the right side of the bar
pub fn hints(app: &App) -> &'static str {
    if app.in_text_entry() {
        FORM_HINTS
    } else {
        HINTS
    }
}

/// Summary text for the left side of the bar
pub fn summary(app: &App) -> String {
    match app.screen {
        Screen::Dashboard => match &app.dashboard.stats {
            Some(stats) => format!(
                "{}/{} todos done",
                stats.completed_todos, stats.total_todos
            ),
            None => String::new(),
        },
        Screen::Todos => {
            let open = app.todos.todos.iter().filter(|t| !t.is_done()).count();
            format!("{} shown, {} open", app.todos.todos.len(), open)
        }
        Screen::Quotes => format!("{} shown", app.quotes.quotes.len()),
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.screen.title()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    let summary = summary(app);
    if !summary.is_empty() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(summary, Style::default().fg(Color::White)));
    }

    let loading = match app.screen {
        Screen::Dashboard => app.dashboard.loading,
        Screen::Todos => app.todos.loading,
        Screen::Quotes => app.quotes.loading,
    };
    if loading {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("loading...", Style::default().fg(Color::Yellow)));
    }

    // Key hints (right-aligned)
    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
