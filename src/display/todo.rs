//! Todo display formatting
//!
//! Formats todos for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_age, priority_marker, short_age, truncate};
use crate::models::Todo;

const DESCRIPTION_WIDTH: usize = 60;

#[derive(Tabled)]
struct TodoRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Age")]
    age: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Todo> for TodoRow {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            priority: format!("{} {}", priority_marker(todo.priority), todo.priority),
            status: todo.status.to_string(),
            age: short_age(todo.age()),
            description: truncate(&todo.description, DESCRIPTION_WIDTH),
        }
    }
}

/// Format a list of todos as a table
pub fn format_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }

    let rows: Vec<TodoRow> = todos.iter().map(TodoRow::from).collect();
    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} todo{}\n",
        todos.len(),
        if todos.len() == 1 { "" } else { "s" }
    ));
    output
}

/// Format a single todo with its age and completion time
pub fn format_todo(todo: &Todo) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} [#{}] {}\n",
        priority_marker(todo.priority),
        todo.id,
        todo.description
    ));
    output.push_str(&format!(
        "   Priority: {:<8} Status: {:<6} Age: {}\n",
        todo.priority.to_string(),
        todo.status.to_string(),
        format_age(todo.age())
    ));

    if let Some(completed) = todo.completed_age() {
        output.push_str(&format!("   Completed: {} ago\n", format_age(completed)));
    }

    output
}

/// Confirmation shown after `add`
pub fn format_created(todo: &Todo) -> String {
    format!(
        "Created todo #{}: {}\n   Priority: {}\n   Status: {}\n",
        todo.id, todo.description, todo.priority, todo.status
    )
}
