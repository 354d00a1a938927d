//! Display formatting for terminal output
//!
//! Provides utilities for formatting todos and quotes for the command line,
//! plus the age and marker helpers the TUI tables share.

pub mod format;
pub mod quote;
pub mod todo;

pub use format::{format_age, or_placeholder, priority_marker, short_age, truncate};
pub use quote::{format_quote, format_quote_created, format_quote_details, format_quote_list};
pub use todo::{format_created, format_todo, format_todo_list};
