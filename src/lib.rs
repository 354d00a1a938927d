//! tada - Terminal todo list and quote keeper
//!
//! This library provides the core functionality for tada: todos with a
//! priority and open/done status, a collection of quotes, a SQLite store for
//! both, and the command-line and TUI front ends built on top of them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Todos, quotes, filters and validators
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `display`: Plain-text output for the command line
//! - `cli`: Command handlers
//! - `logging`: File-based tracing setup
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use tada::config::{paths::TadaPaths, settings::Settings};
//! use tada::storage::Storage;
//!
//! let paths = TadaPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{TadaError, TadaResult};
