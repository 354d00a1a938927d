//! Todo repository
//!
//! CRUD for the `todos` table.

use chrono::Utc;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use crate::error::{TadaError, TadaResult};
use crate::models::{NewTodo, Priority, Status, Todo, TodoChange, TodoFilter};

const SELECT_COLUMNS: &str =
    "SELECT id, description, priority, status, created_at, updated_at, completed_at FROM todos";

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        Priority::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        Status::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        description: row.get(1)?,
        priority: row.get(2)?,
        status: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        completed_at: row.get(6)?,
    })
}

/// Repository for todo persistence
pub struct TodoRepository<'a> {
    conn: &'a Connection,
}

impl<'a> TodoRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a todo and return it as stored
    pub fn create(&self, new: &NewTodo) -> TadaResult<Todo> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO todos (description, priority, status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![new.description, new.priority, Status::Open, now],
        )?;

        let id = self.conn.last_insert_rowid();
        info!(id, priority = %new.priority, "created todo");
        self.get(id)
    }

    /// Get a todo by ID
    pub fn get(&self, id: i64) -> TadaResult<Todo> {
        self.conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE id = ?1"),
                params![id],
                todo_from_row,
            )
            .optional()?
            .ok_or_else(|| TadaError::todo_not_found(id))
    }

    /// List todos matching the filter, newest first
    pub fn list(&self, filter: &TodoFilter) -> TadaResult<Vec<Todo>> {
        let mut sql = format!("{SELECT_COLUMNS} WHERE 1=1");
        let mut args: Vec<&dyn ToSql> = Vec::new();

        if let Some(status) = &filter.status {
            sql.push_str(" AND status = ?");
            args.push(status);
        }
        if let Some(priority) = &filter.priority {
            sql.push_str(" AND priority = ?");
            args.push(priority);
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");

        debug!(?filter, "listing todos");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(args.as_slice(), todo_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Apply one field change. Affects zero rows silently if the ID is absent.
    pub fn update(&self, id: i64, change: &TodoChange) -> TadaResult<()> {
        let now = Utc::now();
        let affected = match change {
            TodoChange::Status(status) => {
                let completed_at = match status {
                    Status::Done => Some(now),
                    Status::Open => None,
                };
                self.conn.execute(
                    "UPDATE todos SET status = ?1, completed_at = ?2, updated_at = ?3 WHERE id = ?4",
                    params![status, completed_at, now, id],
                )?
            }
            TodoChange::Priority(priority) => self.conn.execute(
                "UPDATE todos SET priority = ?1, updated_at = ?2 WHERE id = ?3",
                params![priority, now, id],
            )?,
            TodoChange::Description(description) => self.conn.execute(
                "UPDATE todos SET description = ?1, updated_at = ?2 WHERE id = ?3",
                params![description, now, id],
            )?,
        };

        info!(id, ?change, affected, "updated todo");
        Ok(())
    }

    pub fn update_status(&self, id: i64, status: Status) -> TadaResult<()> {
        self.update(id, &TodoChange::Status(status))
    }

    /// Delete a todo. Deleting an absent ID is not an error.
    pub fn delete(&self, id: i64) -> TadaResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", params![id])?;
        info!(id, affected, "deleted todo");
        Ok(())
    }

    pub fn count(&self) -> TadaResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    fn storage() -> Storage {
        Storage::open_in_memory().unwrap()
    }

    #[test]
    fn test_create_returns_stored_record() {
        let storage = storage();
        let todo = storage
            .todos()
            .create(&NewTodo::new("Fix bug", Priority::High))
            .unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.description, "Fix bug");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.status, Status::Open);
        assert!(todo.completed_at.is_none());
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let storage = storage();
        let repo = storage.todos();
        let created = repo.create(&NewTodo::new("Write docs", Priority::Low)).unwrap();

        assert_eq!(repo.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let storage = storage();
        let err = storage.todos().get(999).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_status_transitions_maintain_completed_at() {
        let storage = storage();
        let repo = storage.todos();
        let todo = repo.create(&NewTodo::new("Ship", Priority::Medium)).unwrap();

        repo.update_status(todo.id, Status::Done).unwrap();
        let done = repo.get(todo.id).unwrap();
        assert_eq!(done.status, Status::Done);
        assert!(done.completed_at.is_some());
        assert!(done.updated_at >= todo.updated_at);

        // Setting Done again keeps the invariant
        repo.update_status(todo.id, Status::Done).unwrap();
        assert!(repo.get(todo.id).unwrap().completed_at.is_some());

        repo.update_status(todo.id, Status::Open).unwrap();
        let reopened = repo.get(todo.id).unwrap();
        assert_eq!(reopened.status, Status::Open);
        assert!(reopened.completed_at.is_none());

        repo.update_status(todo.id, Status::Open).unwrap();
        assert!(repo.get(todo.id).unwrap().completed_at.is_none());
    }

    #[test]
    fn test_update_fields() {
        let storage = storage();
        let repo = storage.todos();
        let todo = repo.create(&NewTodo::new("Old", Priority::Low)).unwrap();

        repo.update(todo.id, &TodoChange::Description("New".into()))
            .unwrap();
        repo.update(todo.id, &TodoChange::Priority(Priority::High))
            .unwrap();

        let updated = repo.get(todo.id).unwrap();
        assert_eq!(updated.description, "New");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.created_at, todo.created_at);
    }

    #[test]
    fn test_update_missing_is_silent() {
        let storage = storage();
        let repo = storage.todos();
        repo.update_status(12345, Status::Done).unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let storage = storage();
        let repo = storage.todos();
        let todo = repo.create(&NewTodo::new("Temp", Priority::Low)).unwrap();

        repo.delete(todo.id).unwrap();
        repo.delete(todo.id).unwrap();
        assert!(repo.get(todo.id).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_orders_newest_first() {
        let storage = storage();
        let repo = storage.todos();
        let first = repo.create(&NewTodo::new("first", Priority::Low)).unwrap();
        let second = repo.create(&NewTodo::new("second", Priority::Low)).unwrap();
        let third = repo.create(&NewTodo::new("third", Priority::Low)).unwrap();

        let ids: Vec<i64> = repo
            .list(&TodoFilter::all())
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[test]
    fn test_list_filters() {
        let storage = storage();
        let repo = storage.todos();
        repo.create(&NewTodo::new("a", Priority::High)).unwrap();
        let b = repo.create(&NewTodo::new("b", Priority::High)).unwrap();
        repo.create(&NewTodo::new("c", Priority::Medium)).unwrap();
        repo.update_status(b.id, Status::Done).unwrap();

        let high = repo
            .list(&TodoFilter::all().with_priority(Priority::High))
            .unwrap();
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|t| t.priority == Priority::High));

        let done = repo
            .list(&TodoFilter::all().with_status(Status::Done))
            .unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, b.id);

        let open_high = repo
            .list(
                &TodoFilter::all()
                    .with_status(Status::Open)
                    .with_priority(Priority::High),
            )
            .unwrap();
        assert_eq!(open_high.len(), 1);
        assert_eq!(open_high[0].description, "a");

        assert_eq!(repo.list(&TodoFilter::all()).unwrap().len(), 3);
    }

    #[test]
    fn test_invalid_stored_code_is_storage_error() {
        let storage = storage();
        let result: rusqlite::Result<Priority> = storage
            .connection()
            .query_row("SELECT 7", [], |row| row.get(0));
        let err: TadaError = result.unwrap_err().into();
        assert!(matches!(err, TadaError::Storage(_)));
    }
}
