//! Todo CLI commands
//!
//! Implements the top-level todo verbs: add, list, update, delete, done, open.

use clap::Subcommand;
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_created, format_todo, format_todo_list};
use crate::error::TadaResult;
use crate::models::{Priority, Status, TodoChange, TodoFilter};
use crate::services::TodoService;
use crate::storage::Storage;

/// Todo subcommands
#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// Add a todo task
    Add {
        /// What needs doing
        description: String,
        /// Priority (low/l, medium/m, high/h)
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// List todo tasks
    List {
        /// Status filter (open/o, done/d, all/a)
        #[arg(short, long, default_value = "open")]
        status: String,
        /// Priority filter (low/l, medium/m, high/h, all/a)
        #[arg(short, long, default_value = "all")]
        priority: String,
    },
    /// Update a todo task
    Update {
        /// Todo ID
        id: i64,
        /// New status (open/o, done/d)
        #[arg(short, long)]
        status: Option<String>,
        /// New priority (low/l, medium/m, high/h)
        #[arg(short, long)]
        priority: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Open the todo screen of the TUI instead
        #[arg(short, long)]
        tui: bool,
    },
    /// Delete a todo task
    Delete {
        /// Todo ID
        id: i64,
    },
    /// Mark a todo task as done
    Done {
        /// Todo ID
        id: i64,
    },
    /// Reopen a todo task
    Open {
        /// Todo ID
        id: i64,
    },
}

/// Parse a list filter value where "all"/"a" means no filter
fn parse_optional<T>(value: &str, parse: fn(&str) -> TadaResult<T>) -> TadaResult<Option<T>> {
    match value.trim().to_lowercase().as_str() {
        "all" | "a" => Ok(None),
        _ => parse(value).map(Some),
    }
}

/// Collect the requested field changes in status, priority, description order
fn collect_changes(
    status: Option<String>,
    priority: Option<String>,
    description: Option<String>,
) -> TadaResult<Vec<TodoChange>> {
    let mut changes = Vec::new();
    if let Some(status) = status {
        changes.push(TodoChange::Status(Status::parse(&status)?));
    }
    if let Some(priority) = priority {
        changes.push(TodoChange::Priority(Priority::parse(&priority)?));
    }
    if let Some(description) = description {
        changes.push(TodoChange::Description(description));
    }
    Ok(changes)
}

/// Handle a todo command
///
/// `Update` with `tui` set is expected to be intercepted by the caller.
pub fn handle_todo_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TodoCommands,
) -> TadaResult<()> {
    let service = TodoService::new(storage);
    debug!(?cmd, "todo command");

    match cmd {
        TodoCommands::Add {
            description,
            priority,
        } => {
            let priority = match priority {
                Some(p) => Priority::parse(&p)?,
                None => settings.default_priority,
            };
            let todo = service.create(&description, priority)?;
            print!("{}", format_created(&todo));
        }

        TodoCommands::List { status, priority } => {
            let filter = TodoFilter {
                status: parse_optional(&status, Status::parse)?,
                priority: parse_optional(&priority, Priority::parse)?,
            };
            let todos = service.list(&filter)?;
            println!("{}", format_todo_list(&todos).trim_end());
        }

        TodoCommands::Update {
            id,
            status,
            priority,
            description,
            tui: _,
        } => {
            let changes = collect_changes(status, priority, description)?;
            let todo = service.update(id, &changes)?;
            println!("Updated todo:");
            print!("{}", format_todo(&todo));
        }

        TodoCommands::Delete { id } => {
            let todo = service.delete(id)?;
            println!("Deleted todo #{}: {}", todo.id, todo.description);
        }

        TodoCommands::Done { id } => {
            let todo = service.set_status(id, Status::Done)?;
            println!("Marked as done:");
            print!("{}", format_todo(&todo));
        }

        TodoCommands::Open { id } => {
            let todo = service.set_status(id, Status::Open)?;
            println!("Reopened:");
            print!("{}", format_todo(&todo));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_all() {
        assert_eq!(parse_optional("all", Status::parse).unwrap(), None);
        assert_eq!(parse_optional("A", Priority::parse).unwrap(), None);
        assert_eq!(
            parse_optional("d", Status::parse).unwrap(),
            Some(Status::Done)
        );
        assert!(parse_optional("bogus", Priority::parse).is_err());
    }

    #[test]
    fn test_collect_changes() {
        assert!(collect_changes(None, None, None).unwrap().is_empty());

        let changes =
            collect_changes(Some("done".into()), Some("h".into()), Some("x".into())).unwrap();
        assert_eq!(
            changes,
            vec![
                TodoChange::Status(Status::Done),
                TodoChange::Priority(Priority::High),
                TodoChange::Description("x".into()),
            ]
        );

        assert!(collect_changes(Some("later".into()), None, None)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_handle_add_uses_default_priority() {
        let storage = Storage::open_in_memory().unwrap();
        let settings = Settings {
            default_priority: Priority::Low,
            ..Settings::default()
        };

        handle_todo_command(
            &storage,
            &settings,
            TodoCommands::Add {
                description: "Write tests".into(),
                priority: None,
            },
        )
        .unwrap();

        let todos = storage.todos().list(&TodoFilter::all()).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].priority, Priority::Low);
    }

    #[test]
    fn test_handle_update_without_flags_is_rejected() {
        let storage = Storage::open_in_memory().unwrap();
        let err = handle_todo_command(
            &storage,
            &Settings::default(),
            TodoCommands::Update {
                id: 1,
                status: None,
                priority: None,
                description: None,
                tui: false,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_handle_delete_missing_is_not_found() {
        let storage = Storage::open_in_memory().unwrap();
        let err = handle_todo_command(
            &storage,
            &Settings::default(),
            TodoCommands::Delete { id: 42 },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
