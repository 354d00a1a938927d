//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod quote;
pub mod todo;

pub use quote::{handle_quote_command, QuoteCommands};
pub use todo::{handle_todo_command, TodoCommands};
