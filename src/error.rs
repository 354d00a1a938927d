//! Custom error types for tada
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tada operations
#[derive(Error, Debug)]
pub enum TadaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Bad user input (empty or over-long text, unparseable enum)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: #{identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A random pick was requested from an empty table
    #[error("No {0} available")]
    EmptyStore(&'static str),

    /// Database errors (I/O or constraint failures)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TadaError {
    /// Create a "not found" error for todos
    pub fn todo_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Todo",
            identifier: id.to_string(),
        }
    }

    /// Create a "not found" error for quotes
    pub fn quote_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Quote",
            identifier: id.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TadaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TadaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for TadaError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for tada operations
pub type TadaResult<T> = Result<T, TadaError>;
