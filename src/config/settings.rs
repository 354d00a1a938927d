//! User settings for tada
//!
//! Manages user preferences including the default priority for new todos,
//! the built-in quote list used for seeding, and TUI/logging knobs.

use serde::{Deserialize, Serialize};

use super::paths::TadaPaths;
use crate::error::TadaError;
use crate::models::Priority;

/// Quotes inserted the first time the quote table is found empty
const BUILTIN_QUOTES: &[&str] = &[
    "Shower thoughts only work when you put in the work.",
    "Take the time it takes so it takes less time.",
    "Don't go out and try to find the quotes, they should come to you.",
    "Nobody cares how hard you worked, only the results.",
    "If you want everything to be familiar, you will never learn anything new.",
    "Do or do not. There is no try.",
    "Inspiration is perishable. Act on it immediately",
    "The way to get started is to quit talking and begin doing. - Walt Disney",
    "Don't let yesterday take up too much of today. - Will Rogers",
    "You learn more from failure than from success. Don't let it stop you. Failure builds character. - Unknown",
    "It's not whether you get knocked down, it's whether you get up. - Vince Lombardi",
    "If you are working on something that you really care about, you don't have to be pushed. The vision pulls you. - Steve Jobs",
    "Knowing is not enough; we must apply. Wishing is not enough; we must do. - Johann Wolfgang von Goethe",
    "Whether you think you can or you think you can't, you're right. - Henry Ford",
];

/// User settings for tada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Priority given to todos added without an explicit priority
    #[serde(default)]
    pub default_priority: Priority,

    /// Quote strings ("text - author") used to seed an empty quote table
    #[serde(default = "default_seed_quotes")]
    pub seed_quotes: Vec<String>,

    /// Category assigned to seeded quotes
    #[serde(default = "default_seed_category")]
    pub seed_category: String,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log level used when `TADA_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_seed_quotes() -> Vec<String> {
    BUILTIN_QUOTES.iter().map(|q| q.to_string()).collect()
}

fn default_seed_category() -> String {
    "motivational".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_priority: Priority::default(),
            seed_quotes: default_seed_quotes(),
            seed_category: default_seed_category(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TadaPaths) -> Result<Self, TadaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TadaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TadaError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TadaPaths) -> Result<(), TadaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TadaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TadaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
