//! Todo service
//!
//! Validates user input before it reaches the store and re-reads records
//! after mutation so callers always see what was persisted.

use tracing::{info, warn};

use crate::error::{TadaError, TadaResult};
use crate::models::{validate_description, NewTodo, Priority, Status, Todo, TodoChange, TodoFilter};
use crate::storage::Storage;

/// Service for todo management
pub struct TodoService<'a> {
    storage: &'a Storage,
}

impl<'a> TodoService<'a> {
    /// Create a new todo service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new todo
    pub fn create(&self, description: &str, priority: Priority) -> TadaResult<Todo> {
        let description = validate_description(description)?;
        self.storage
            .todos()
            .create(&NewTodo::new(description, priority))
    }

    pub fn get(&self, id: i64) -> TadaResult<Todo> {
        self.storage.todos().get(id)
    }

    pub fn list(&self, filter: &TodoFilter) -> TadaResult<Vec<Todo>> {
        self.storage.todos().list(filter)
    }

    /// Apply a set of field changes and return the updated todo.
    ///
    /// Every change is validated before any is written. Fails with
    /// `NotFound` if the todo does not exist afterwards.
    pub fn update(&self, id: i64, changes: &[TodoChange]) -> TadaResult<Todo> {
        if changes.is_empty() {
            return Err(TadaError::Validation(
                "at least one of status, priority or description must be provided".into(),
            ));
        }

        let changes = changes
            .iter()
            .map(|change| match change {
                TodoChange::Description(d) => validate_description(d).map(TodoChange::Description),
                other => Ok(other.clone()),
            })
            .collect::<TadaResult<Vec<_>>>()?;

        let repo = self.storage.todos();
        for change in &changes {
            repo.update(id, change)?;
        }

        repo.get(id).inspect_err(|e| warn!(id, error = %e, "update target missing"))
    }

    /// Set the status and return the updated todo
    pub fn set_status(&self, id: i64, status: Status) -> TadaResult<Todo> {
        self.update(id, &[TodoChange::Status(status)])
    }

    /// Flip Open and Done
    pub fn toggle(&self, id: i64) -> TadaResult<Todo> {
        let todo = self.get(id)?;
        self.set_status(id, todo.status.toggled())
    }

    /// Delete a todo, returning the record as it was before deletion
    pub fn delete(&self, id: i64) -> TadaResult<Todo> {
        let todo = self.get(id)?;
        self.storage.todos().delete(id)?;
        info!(id, "todo removed");
        Ok(todo)
    }
}
