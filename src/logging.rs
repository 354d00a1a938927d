//! Logging setup
//!
//! Events go to `tada.log` in the data directory. The terminal is reserved
//! for command output and the TUI, so nothing is written to stdout/stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::paths::TadaPaths;
use crate::config::settings::Settings;
use crate::error::{TadaError, TadaResult};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "TADA_LOG";

/// Build the filter from `TADA_LOG`, falling back to the configured level
fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file
pub fn init(paths: &TadaPaths, settings: &Settings) -> TadaResult<()> {
    paths.ensure_directories()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())?;

    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .with_filter(build_filter(settings));
    let subscriber = tracing_subscriber::Registry::default().with(file_log);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| TadaError::Config(format!("failed to set tracing subscriber: {}", e)))
}
