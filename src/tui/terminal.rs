//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use tracing::info;

use crate::config::paths::TadaPaths;
use crate::config::settings::Settings;
use crate::storage::Storage;

use super::app::{App, Screen};
use super::commands::QuoteSeed;
use super::event::EventHandler;
use super::handler::handle_event;
use super::worker::Worker;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application on `screen`
pub fn run_tui(paths: &TadaPaths, settings: &Settings, screen: Screen) -> Result<()> {
    // Opened before entering raw mode
    let storage = Storage::new(paths).context("Failed to open the database")?;

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, storage, settings, screen);
    restore_terminal()?;

    result
}

fn event_loop(
    terminal: &mut Tui,
    storage: Storage,
    settings: &Settings,
    screen: Screen,
) -> Result<()> {
    let events = EventHandler::new(Duration::from_millis(settings.tick_rate_ms));
    let worker = Worker::spawn(storage, QuoteSeed::from_settings(settings), events.sender());

    let mut app = App::new(screen);
    info!(screen = screen.title(), "tui started");
    worker.dispatch_all(app.init());

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;

        let event = events.next()?;
        let commands = handle_event(&mut app, event);
        if !worker.dispatch_all(commands) {
            anyhow::bail!("store worker stopped unexpectedly");
        }
    }

    worker.shutdown();
    info!("tui stopped");
    Ok(())
}
