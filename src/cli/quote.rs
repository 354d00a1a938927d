//! Quote CLI commands
//!
//! `tada quote` with no subcommand prints a random quote, seeding the
//! built-in list first when the collection is empty.

use clap::Subcommand;
use tracing::debug;

use crate::config::settings::Settings;
use crate::display::{format_quote, format_quote_created, format_quote_list};
use crate::error::TadaResult;
use crate::models::{NewQuote, QuoteChange, QuoteFilter};
use crate::services::QuoteService;
use crate::storage::Storage;

/// Quote subcommands
#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Add a quote
    Add {
        /// Quote text
        text: String,
        /// Who said it
        #[arg(short, long, default_value = "")]
        author: String,
        /// Category
        #[arg(short, long, default_value = "")]
        category: String,
    },
    /// List quotes
    List {
        /// Filter by author
        #[arg(short, long)]
        author: Option<String>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Update a quote
    Update {
        /// Quote ID
        id: i64,
        /// New text
        #[arg(short, long)]
        text: Option<String>,
        /// New author
        #[arg(short, long)]
        author: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a quote
    Delete {
        /// Quote ID
        id: i64,
    },
}

/// Handle `tada quote [SUBCOMMAND]`
pub fn handle_quote_command(
    storage: &Storage,
    settings: &Settings,
    cmd: Option<QuoteCommands>,
) -> TadaResult<()> {
    let service = QuoteService::new(storage);
    debug!(?cmd, "quote command");

    let Some(cmd) = cmd else {
        let quote = service.seeded_random(&settings.seed_quotes, &settings.seed_category)?;
        print!("{}", format_quote(&quote));
        return Ok(());
    };

    match cmd {
        QuoteCommands::Add {
            text,
            author,
            category,
        } => {
            let quote = service.create(NewQuote::new(text, author, category))?;
            print!("{}", format_quote_created(&quote));
        }

        QuoteCommands::List { author, category } => {
            // Empty flag values mean no filter
            let filter = QuoteFilter {
                author: author.filter(|a| !a.is_empty()),
                category: category.filter(|c| !c.is_empty()),
            };
            let quotes = service.list(&filter)?;
            println!("{}", format_quote_list(&quotes).trim_end());
        }

        QuoteCommands::Update {
            id,
            text,
            author,
            category,
        } => {
            let changes: Vec<QuoteChange> = [
                text.map(QuoteChange::Text),
                author.map(QuoteChange::Author),
                category.map(QuoteChange::Category),
            ]
            .into_iter()
            .flatten()
            .collect();

            let quote = service.update(id, &changes)?;
            println!("Updated quote:");
            print!("{}", format_quote(&quote));
        }

        QuoteCommands::Delete { id } => {
            let quote = service.delete(id)?;
            println!("Deleted quote #{}: {}", quote.id, quote.text);
        }
    }

    Ok(())
}
