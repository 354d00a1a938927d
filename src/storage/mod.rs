//! Storage layer for tada
//!
//! A single SQLite database holds todos and quotes. The schema is created on
//! open; repositories borrow the connection.

pub mod quotes;
pub mod schema;
pub mod todos;

pub use quotes::{parse_seed_quote, QuoteRepository};
pub use todos::TodoRepository;

use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use crate::config::paths::TadaPaths;
use crate::error::TadaResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open the database under the configured data directory
    pub fn new(paths: &TadaPaths) -> TadaResult<Self> {
        paths.ensure_directories()?;
        Self::open(&paths.database_file())
    }

    /// Open (creating if missing) the database file at `path`
    pub fn open(path: &Path) -> TadaResult<Self> {
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened database");
        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> TadaResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> TadaResult<Self> {
        schema::migrate(&conn)?;
        Ok(Self { conn })
    }

    pub fn todos(&self) -> TodoRepository<'_> {
        TodoRepository::new(&self.conn)
    }

    pub fn quotes(&self) -> QuoteRepository<'_> {
        QuoteRepository::new(&self.conn)
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}
