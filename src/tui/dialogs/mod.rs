//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the current screen

pub mod confirm;
pub mod form;
pub mod help;
pub mod quote;
pub mod quote_card;
pub mod todo;
