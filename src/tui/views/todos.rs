//! Todo manager view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::{short_age, truncate};
use crate::models::{Priority, Todo};
use crate::tui::app::{App, TodoMode};
use crate::tui::dialogs;

/// Cell text for one row: id, priority, status, age, description
pub fn row_cells(todo: &Todo) -> [String; 5] {
    [
        todo.id.to_string(),
        todo.priority.to_string(),
        todo.status.to_string(),
        short_age(todo.age()),
        truncate(&todo.description, 80),
    ]
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

/// Render the todo screen and any dialog it has open
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let screen = &app.todos;

    let filter = screen
        .status_filter
        .map(|s| s.to_string().to_lowercase())
        .unwrap_or_else(|| "all".to_string());
    let title = format!(" Todos ({}) ", filter);

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if screen.todos.is_empty() {
        let text = if screen.loading {
            "Loading..."
        } else {
            "No todos found. Press 'a' to add one."
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
    } else {
        let widths = [
            Constraint::Length(6),  // ID
            Constraint::Length(12), // Priority
            Constraint::Length(8),  // Status
            Constraint::Length(6),  // Age
            Constraint::Min(20),    // Description
        ];

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let header = Row::new(vec![
            Cell::from("ID").style(bold),
            Cell::from("Priority").style(bold),
            Cell::from("Status").style(bold),
            Cell::from("Age").style(bold),
            Cell::from("Description").style(bold),
        ])
        .style(Style::default().fg(Color::Yellow))
        .height(1);

        let rows: Vec<Row> = screen
            .todos
            .iter()
            .map(|todo| {
                let [id, priority, status, age, description] = row_cells(todo);
                let row_style = if todo.is_done() {
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT)
                } else {
                    Style::default().fg(Color::White)
                };
                Row::new(vec![
                    Cell::from(id),
                    Cell::from(priority).style(Style::default().fg(priority_color(todo.priority))),
                    Cell::from(status),
                    Cell::from(age),
                    Cell::from(description),
                ])
                .style(row_style)
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = TableState::default();
        state.select(Some(screen.selected));

        frame.render_stateful_widget(table, area, &mut state);
    }

    match &screen.mode {
        TodoMode::Browsing => {}
        TodoMode::Adding(form) | TodoMode::Editing { form, .. } => {
            dialogs::form::render(frame, form);
        }
        TodoMode::ConfirmDelete(todo) => {
            dialogs::confirm::render(frame, "Delete Todo?", &dialogs::confirm::todo_details(todo));
        }
    }
}
