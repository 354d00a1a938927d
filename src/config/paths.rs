//! Path management for tada
//!
//! Resolves where the database, settings and log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `TADA_DATA_DIR` environment variable (if set)
//! 2. The platform config directory joined with `tada`
//!    (`~/.config/tada` on Linux, `%APPDATA%\tada` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TadaError;

/// Manages all paths used by tada
#[derive(Debug, Clone)]
pub struct TadaPaths {
    /// Base directory for all tada data
    base_dir: PathBuf,
}

impl TadaPaths {
    /// Create a new TadaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TadaError> {
        let base_dir = if let Ok(custom) = std::env::var("TADA_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TadaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the SQLite database
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join("tada.db")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("tada.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TadaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TadaError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, TadaError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| TadaError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("tada"))
}
