//! Database schema
//!
//! Creates tables and indexes idempotently on every open.

use rusqlite::Connection;

use crate::error::TadaResult;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        description TEXT NOT NULL,
        priority INTEGER NOT NULL DEFAULT 2 CHECK(priority IN (1, 2, 3)),
        status INTEGER NOT NULL DEFAULT 1 CHECK(status IN (1, 2)),
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        completed_at TEXT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_todos_status ON todos(status);
    CREATE INDEX IF NOT EXISTS idx_todos_priority ON todos(priority);
    CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos(created_at);

    CREATE TABLE IF NOT EXISTS quotes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        text TEXT NOT NULL,
        author TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes(author);
    CREATE INDEX IF NOT EXISTS idx_quotes_category ON quotes(category);
    CREATE INDEX IF NOT EXISTS idx_quotes_created_at ON quotes(created_at);
"#;

/// Create the schema if it does not exist yet
pub fn migrate(conn: &Connection) -> TadaResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
