//! Dashboard view
//!
//! Statistics cards above a menu of the other screens.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::services::DashboardStats;
use crate::tui::app::{App, MENU};
use crate::tui::layout::DashboardLayout;

/// Title and body lines of the three cards
pub fn card_contents(stats: &DashboardStats) -> [(&'static str, Vec<String>); 3] {
    [
        (
            "Todos",
            vec![
                format!("{} total", stats.total_todos),
                format!("{:.1}% complete", stats.completion_rate),
            ],
        ),
        ("Quotes", vec![format!("{} total", stats.total_quotes)]),
        ("Today", vec![format!("{} completed", stats.today_completed)]),
    ]
}

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = DashboardLayout::new(area);
    let state = &app.dashboard;

    match (&state.stats, &state.error) {
        (_, Some(err)) => {
            let block = Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red));
            let span = Span::styled(
                format!("Failed to load statistics: {}", err),
                Style::default().fg(Color::Red),
            );
            let full = Rect {
                width: area.width,
                ..layout.cards[0]
            };
            frame.render_widget(Paragraph::new(Line::from(span)).block(block), full);
        }
        (Some(stats), None) => {
            for ((title, body), rect) in card_contents(stats).into_iter().zip(layout.cards) {
                render_card(frame, rect, title, body);
            }
        }
        (None, None) => {
            for (title, rect) in ["Todos", "Quotes", "Today"].into_iter().zip(layout.cards) {
                render_card(frame, rect, title, vec!["Loading...".to_string()]);
            }
        }
    }

    render_menu(frame, app, layout.menu);
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, body: Vec<String>) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let lines: Vec<Line> = body
        .into_iter()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::White))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_menu(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Go to ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = MENU
        .iter()
        .map(|screen| ListItem::new(screen.title()))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.dashboard.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
