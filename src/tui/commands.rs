//! Store commands and their result messages
//!
//! The UI never touches the store directly. It emits [`Command`] values which
//! the worker runs against [`Storage`], and every command produces exactly one
//! [`Message`] that re-enters the event loop.
//!
//! Quote reads seed the built-in quotes first, so an empty store fills up
//! the first time the quote screen loads.

use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::error::TadaError;
use crate::models::{NewQuote, NewTodo, Quote, QuoteChange, QuoteFilter, Todo, TodoChange, TodoFilter};
use crate::services::{load_stats, DashboardStats, QuoteService, TodoService};
use crate::storage::Storage;

/// A unit of store work requested by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadTodos(TodoFilter),
    LoadQuotes(QuoteFilter),
    LoadStats,
    CreateTodo(NewTodo),
    UpdateTodo { id: i64, changes: Vec<TodoChange> },
    ToggleTodo(i64),
    DeleteTodo(i64),
    CreateQuote(NewQuote),
    UpdateQuote { id: i64, changes: Vec<QuoteChange> },
    DeleteQuote(i64),
    RandomQuote,
}

/// The outcome of a command
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    TodosLoaded(Vec<Todo>),
    TodosFailed(String),
    /// A todo mutation succeeded; carries the notification text
    TodoSaved(String),
    TodoFailed(String),
    QuotesLoaded(Vec<Quote>),
    QuotesFailed(String),
    QuoteSaved(String),
    QuoteFailed(String),
    RandomQuoteLoaded(Quote),
    StatsLoaded(DashboardStats),
    StatsFailed(String),
}

/// Built-in quotes inserted when the quote table is empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteSeed {
    pub quotes: Vec<String>,
    pub category: String,
}

impl QuoteSeed {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            quotes: settings.seed_quotes.clone(),
            category: settings.seed_category.clone(),
        }
    }

    fn apply(&self, storage: &Storage) -> Result<usize, TadaError> {
        storage.quotes().seed(&self.quotes, &self.category)
    }
}

fn describe(err: TadaError) -> String {
    warn!(error = %err, "store command failed");
    err.to_string()
}

/// Run one command against the store
pub fn execute(storage: &Storage, seed: &QuoteSeed, command: Command) -> Message {
    debug!(?command, "executing");

    let todos = TodoService::new(storage);
    let quotes = QuoteService::new(storage);

    match command {
        Command::LoadTodos(filter) => match todos.list(&filter) {
            Ok(list) => Message::TodosLoaded(list),
            Err(e) => Message::TodosFailed(describe(e)),
        },
        Command::LoadQuotes(filter) => {
            match seed.apply(storage).and_then(|_| quotes.list(&filter)) {
                Ok(list) => Message::QuotesLoaded(list),
                Err(e) => Message::QuotesFailed(describe(e)),
            }
        }
        Command::LoadStats => match load_stats(storage) {
            Ok(stats) => Message::StatsLoaded(stats),
            Err(e) => Message::StatsFailed(describe(e)),
        },
        Command::CreateTodo(new) => todo_saved(
            todos
                .create(&new.description, new.priority)
                .map(|t| format!("Created todo #{}", t.id)),
        ),
        Command::UpdateTodo { id, changes } => todo_saved(
            todos
                .update(id, &changes)
                .map(|t| format!("Updated todo #{}", t.id)),
        ),
        Command::ToggleTodo(id) => todo_saved(todos.toggle(id).map(|t| {
            if t.is_done() {
                format!("Marked todo #{} as done", t.id)
            } else {
                format!("Reopened todo #{}", t.id)
            }
        })),
        Command::DeleteTodo(id) => {
            todo_saved(todos.delete(id).map(|t| format!("Deleted todo #{}", t.id)))
        }
        Command::CreateQuote(new) => {
            quote_saved(quotes.create(new).map(|q| format!("Added quote #{}", q.id)))
        }
        Command::UpdateQuote { id, changes } => quote_saved(
            quotes
                .update(id, &changes)
                .map(|q| format!("Updated quote #{}", q.id)),
        ),
        Command::DeleteQuote(id) => {
            quote_saved(quotes.delete(id).map(|q| format!("Deleted quote #{}", q.id)))
        }
        Command::RandomQuote => {
            match seed.apply(storage).and_then(|_| quotes.random()) {
                Ok(quote) => Message::RandomQuoteLoaded(quote),
                Err(e) => Message::QuoteFailed(describe(e)),
            }
        }
    }
}

fn todo_saved(result: Result<String, TadaError>) -> Message {
    match result {
        Ok(text) => Message::TodoSaved(text),
        Err(e) => Message::TodoFailed(describe(e)),
    }
}

fn quote_saved(result: Result<String, TadaError>) -> Message {
    match result {
        Ok(text) => Message::QuoteSaved(text),
        Err(e) => Message::QuoteFailed(describe(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Status};

    fn storage() -> Storage {
        Storage::open_in_memory().unwrap()
    }

    fn execute(storage: &Storage, command: Command) -> Message {
        super::execute(storage, &QuoteSeed::default(), command)
    }

    fn seed() -> QuoteSeed {
        QuoteSeed {
            quotes: vec!["Stay hungry - Jobs".into(), "Keep going - Anon".into()],
            category: "motivational".into(),
        }
    }

    #[test]
    fn test_todo_lifecycle() {
        let storage = storage();

        let msg = execute(
            &storage,
            Command::CreateTodo(NewTodo::new("Plan trip", Priority::High)),
        );
        assert_eq!(msg, Message::TodoSaved("Created todo #1".into()));

        let msg = execute(&storage, Command::ToggleTodo(1));
        assert_eq!(msg, Message::TodoSaved("Marked todo #1 as done".into()));

        match execute(
            &storage,
            Command::LoadTodos(TodoFilter::all().with_status(Status::Done)),
        ) {
            Message::TodosLoaded(todos) => {
                assert_eq!(todos.len(), 1);
                assert_eq!(todos[0].description, "Plan trip");
            }
            other => panic!("unexpected {:?}", other),
        }

        let msg = execute(&storage, Command::DeleteTodo(1));
        assert_eq!(msg, Message::TodoSaved("Deleted todo #1".into()));
    }

    #[test]
    fn test_failures_become_messages() {
        let storage = storage();

        match execute(&storage, Command::DeleteTodo(42)) {
            Message::TodoFailed(text) => assert!(text.contains("not found")),
            other => panic!("unexpected {:?}", other),
        }

        match execute(
            &storage,
            Command::UpdateTodo {
                id: 1,
                changes: vec![],
            },
        ) {
            Message::TodoFailed(text) => assert!(text.starts_with("Validation error")),
            other => panic!("unexpected {:?}", other),
        }

        match execute(&storage, Command::RandomQuote) {
            Message::QuoteFailed(text) => assert_eq!(text, "No quotes available"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_quote_commands_and_stats() {
        let storage = storage();

        let msg = execute(
            &storage,
            Command::CreateQuote(NewQuote::new("Be kind", "Anon", "life")),
        );
        assert_eq!(msg, Message::QuoteSaved("Added quote #1".into()));

        match execute(&storage, Command::RandomQuote) {
            Message::RandomQuoteLoaded(q) => assert_eq!(q.text, "Be kind"),
            other => panic!("unexpected {:?}", other),
        }

        match execute(&storage, Command::LoadStats) {
            Message::StatsLoaded(stats) => {
                assert_eq!(stats.total_quotes, 1);
                assert_eq!(stats.total_todos, 0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_load_quotes_seeds_empty_store() {
        let storage = storage();

        match super::execute(&storage, &seed(), Command::LoadQuotes(QuoteFilter::all())) {
            Message::QuotesLoaded(quotes) => {
                assert_eq!(quotes.len(), 2);
                assert!(quotes.iter().all(|q| q.category == "motivational"));
                assert!(quotes.iter().any(|q| q.text == "Stay hungry" && q.author == "Jobs"));
            }
            other => panic!("unexpected {:?}", other),
        }

        // Already populated, nothing more is inserted
        match super::execute(&storage, &seed(), Command::LoadQuotes(QuoteFilter::all())) {
            Message::QuotesLoaded(quotes) => assert_eq!(quotes.len(), 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_random_quote_seeds_empty_store() {
        let storage = storage();

        match super::execute(&storage, &seed(), Command::RandomQuote) {
            Message::RandomQuoteLoaded(q) => assert!(!q.text.is_empty()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_seed_skipped_when_quotes_exist() {
        let storage = storage();
        execute(
            &storage,
            Command::CreateQuote(NewQuote::new("Mine", "Me", "")),
        );

        match super::execute(&storage, &seed(), Command::LoadQuotes(QuoteFilter::all())) {
            Message::QuotesLoaded(quotes) => {
                assert_eq!(quotes.len(), 1);
                assert_eq!(quotes[0].text, "Mine");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
