//! TUI Views module
//!
//! Contains the three screens plus the tab header and status bar.

pub mod dashboard;
pub mod quotes;
pub mod status_bar;
pub mod todos;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use super::app::{App, Screen};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    // Inline error for the current screen, above its content
    let error = match app.screen {
        Screen::Dashboard => None,
        Screen::Todos => app.todos.error.as_deref(),
        Screen::Quotes => app.quotes.error.as_deref(),
    };
    let main = match error {
        Some(err) if layout.main.height > 4 => {
            let line = Line::from(Span::styled(
                format!(" {}", err),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(
                Paragraph::new(line),
                Rect {
                    height: 1,
                    ..layout.main
                },
            );
            Rect {
                y: layout.main.y + 1,
                height: layout.main.height - 1,
                ..layout.main
            }
        }
        _ => layout.main,
    };

    match app.screen {
        Screen::Dashboard => dashboard::render(frame, app, main),
        Screen::Todos => todos::render(frame, app, main),
        Screen::Quotes => quotes::render(frame, app, main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        render_notification(frame, notification);
    }

    if app.show_help {
        dialogs::help::render(frame);
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = Screen::ALL.iter().map(|s| s.title().to_string()).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" tada ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL),
        )
        .select(app.screen.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}

/// Top-right toast
fn render_notification(frame: &mut Frame, notification: &super::widgets::Notification) {
    let area = frame.area();
    let width = 40.min(area.width);
    let rect = Rect::new(area.x + area.width - width, area.y + 1, width, 4).intersection(area);
    frame.render_widget(NotificationWidget::new(notification), rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DashboardStats;
    use crate::tui::commands::Message;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_dashboard_renders_stats_and_menu() {
        let mut app = App::new(Screen::Dashboard);
        app.update(Message::StatsLoaded(DashboardStats {
            total_todos: 4,
            completed_todos: 2,
            today_completed: 1,
            completion_rate: 50.0,
            total_quotes: 3,
        }));

        let screen = draw(&app);
        assert!(screen.contains("4 total"));
        assert!(screen.contains("50.0% complete"));
        assert!(screen.contains("1 completed"));
        assert!(screen.contains("Quotes"));
    }

    #[test]
    fn test_empty_todo_screen_and_error() {
        let mut app = App::new(Screen::Todos);
        app.update(Message::TodosFailed("Storage error: disk full".into()));

        let screen = draw(&app);
        assert!(screen.contains("No todos found."));
        assert!(screen.contains("Storage error: disk full"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = App::new(Screen::Quotes);
        app.toggle_help();
        assert!(draw(&app).contains("Press any key to close"));
    }
}
