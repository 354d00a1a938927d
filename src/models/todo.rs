//! Todo model
//!
//! Represents a task with a priority and an open/done status.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{TadaError, TadaResult};

/// Maximum description length, in characters, after trimming
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Task priority. Stored as 1/2/3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Parse a priority from user input.
    ///
    /// Accepts the full name, its first letter or the numeric code,
    /// case-insensitively and ignoring surrounding whitespace.
    pub fn parse(s: &str) -> TadaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "l" | "1" => Ok(Self::Low),
            "medium" | "m" | "2" => Ok(Self::Medium),
            "high" | "h" | "3" => Ok(Self::High),
            _ => Err(TadaError::Validation(
                "priority must be one of: low, medium, high (or l, m, h / 1, 2, 3)".into(),
            )),
        }
    }

    /// Integer code used by the storage layer
    pub fn code(self) -> i64 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Inverse of [`Priority::code`]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Task completion status. Stored as 1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Open,
    Done,
}

impl Status {
    /// Parse a status from user input (`open`/`o`/`1`, `done`/`d`/`2`)
    pub fn parse(s: &str) -> TadaResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "open" | "o" | "1" => Ok(Self::Open),
            "done" | "d" | "2" => Ok(Self::Done),
            _ => Err(TadaError::Validation(
                "status must be one of: open, done (or o, d / 1, 2)".into(),
            )),
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Open => 1,
            Self::Done => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Open),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Done,
            Self::Done => Self::Open,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Done => write!(f, "DONE"),
        }
    }
}

/// A todo as read back from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier
    pub id: i64,

    pub description: String,

    pub priority: Priority,

    pub status: Status,

    /// When the todo was created
    pub created_at: DateTime<Utc>,

    /// When the todo was last modified
    pub updated_at: DateTime<Utc>,

    /// Set iff `status == Done`
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Time elapsed since creation
    pub fn age(&self) -> Duration {
        Utc::now() - self.created_at
    }

    /// Time elapsed since completion, if completed
    pub fn completed_age(&self) -> Option<Duration> {
        self.completed_at.map(|at| Utc::now() - at)
    }

    pub fn is_done(&self) -> bool {
        self.status == Status::Done
    }
}

/// Fields needed to create a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub description: String,
    pub priority: Priority,
}

impl NewTodo {
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        Self {
            description: description.into(),
            priority,
        }
    }
}

/// Optional equality predicates for listing todos (combined with AND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TodoFilter {
    /// No predicates: every todo
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.status.map_or(true, |s| s == todo.status)
            && self.priority.map_or(true, |p| p == todo.priority)
    }
}

/// A single-field change to an existing todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoChange {
    Status(Status),
    Priority(Priority),
    Description(String),
}

/// Trim a description and check it is 1..=255 characters
pub fn validate_description(description: &str) -> TadaResult<String> {
    let description = description.trim();
    if description.is_empty() {
        return Err(TadaError::Validation("description cannot be empty".into()));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TadaError::Validation(format!(
            "description too long (max {} characters)",
            MAX_DESCRIPTION_LEN
        )));
    }
    Ok(description.to_string())
}
