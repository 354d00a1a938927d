//! Configuration module for tada
//!
//! This module provides configuration management including:
//! - Path resolution for the database, settings and log file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TadaPaths;
pub use settings::Settings;
