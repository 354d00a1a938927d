//! Terminal User Interface module
//!
//! This module provides the tada TUI using ratatui: a dashboard plus todo
//! and quote managers, each with add/edit forms and delete confirmation.
//! Store access runs on a worker thread and results come back as events.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod worker;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Store commands and keybindings
pub mod commands;
pub mod keybindings;

pub use app::{App, Screen};
pub use terminal::run_tui;
