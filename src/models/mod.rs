//! Core data models for tada
//!
//! This module contains the records persisted by the store (todos and quotes),
//! their enums, filters and field-level changes, plus input validators.

pub mod quote;
pub mod todo;

pub use quote::{
    validate_author, validate_category, validate_quote_text, NewQuote, Quote, QuoteChange,
    QuoteFilter,
};
pub use todo::{validate_description, NewTodo, Priority, Status, Todo, TodoChange, TodoFilter};
