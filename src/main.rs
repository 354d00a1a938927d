use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::warn;

use tada::cli::{handle_quote_command, handle_todo_command, QuoteCommands, TodoCommands};
use tada::config::{paths::TadaPaths, settings::Settings};
use tada::logging;
use tada::storage::Storage;
use tada::tui::{run_tui, Screen};

#[derive(Parser)]
#[command(
    name = "tada",
    version = env!("CARGO_PKG_VERSION"),
    about = "A command line todo app",
    long_about = "tada helps you keep a todo list from the terminal: add, list, \
                  update and close tasks, keep a collection of quotes, or browse \
                  everything in an interactive interface."
)]
struct Cli {
    /// Launch the interactive TUI (dashboard, todos or quotes)
    #[arg(long, value_name = "SCREEN", num_args = 0..=1, default_missing_value = "dashboard")]
    tui: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Todo(TodoCommands),

    /// Show a random quote, or manage quotes
    Quote {
        #[command(subcommand)]
        command: Option<QuoteCommands>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TadaPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    if let Err(e) = logging::init(&paths, &settings) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Some(screen) = cli.tui.as_deref() {
        return run_tui(&paths, &settings, Screen::from_name(screen));
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let result = match command {
        Commands::Todo(TodoCommands::Update { tui: true, .. }) => {
            return run_tui(&paths, &settings, Screen::Todos);
        }
        Commands::Todo(cmd) => {
            let storage = Storage::new(&paths)?;
            handle_todo_command(&storage, &settings, cmd)
        }
        Commands::Quote { command } => {
            let storage = Storage::new(&paths)?;
            handle_quote_command(&storage, &settings, command)
        }
        Commands::Config => {
            println!("tada configuration");
            println!("==================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Default priority: {}", settings.default_priority);
            println!("  Seed quotes:      {}", settings.seed_quotes.len());
            println!("  Seed category:    {}", settings.seed_category);
            println!("  Tick rate:        {}ms", settings.tick_rate_ms);
            println!("  Log level:        {}", settings.log_level);
            Ok(())
        }
    };

    if let Err(e) = result {
        warn!(error = %e, "command failed");
        eprintln!("Error: {}", e);
    }

    Ok(())
}
