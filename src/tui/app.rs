//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Store results are folded in by [`App::update`], which returns the follow-up
//! commands to dispatch.

use crate::models::{Quote, QuoteFilter, Status, Todo, TodoFilter};
use crate::services::DashboardStats;

use super::commands::{Command, Message};
use super::dialogs::form::FormState;
use super::widgets::notification::{Notification, NotificationQueue};

/// Top-level screens, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    Todos,
    Quotes,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Dashboard, Screen::Todos, Screen::Quotes];

    pub fn index(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Todos => 1,
            Self::Quotes => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Todos => "Todos",
            Self::Quotes => "Quotes",
        }
    }

    /// Parse a screen name, falling back to the dashboard
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "todos" | "todo" => Self::Todos,
            "quotes" | "quote" => Self::Quotes,
            _ => Self::Dashboard,
        }
    }
}

/// Screens reachable from the dashboard menu
pub const MENU: [Screen; 2] = [Screen::Todos, Screen::Quotes];

/// Dashboard state
#[derive(Debug, Default)]
pub struct DashboardState {
    pub stats: Option<DashboardStats>,
    pub loading: bool,
    pub error: Option<String>,
    /// Index into [`MENU`]
    pub selected: usize,
}

/// What the todo screen is doing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TodoMode {
    #[default]
    Browsing,
    Adding(FormState),
    Editing { id: i64, form: FormState },
    ConfirmDelete(Todo),
}

/// Todo screen state
#[derive(Debug, Default)]
pub struct TodoScreen {
    pub todos: Vec<Todo>,
    pub selected: usize,
    pub status_filter: Option<Status>,
    pub loading: bool,
    pub error: Option<String>,
    pub mode: TodoMode,
}

impl TodoScreen {
    pub fn filter(&self) -> TodoFilter {
        TodoFilter {
            status: self.status_filter,
            priority: None,
        }
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.selected)
    }

    /// None, Open, Done, then back to None
    pub fn cycle_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(Status::Open),
            Some(Status::Open) => Some(Status::Done),
            Some(Status::Done) => None,
        };
    }
}

/// What the quote screen is doing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuoteMode {
    #[default]
    Browsing,
    Adding(FormState),
    Editing { id: i64, form: FormState },
    ConfirmDelete(Quote),
    /// Card view of one quote
    Viewing(Quote),
}

/// Quote screen state
#[derive(Debug, Default)]
pub struct QuoteScreen {
    pub quotes: Vec<Quote>,
    pub selected: usize,
    pub category_filter: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub mode: QuoteMode,
}

impl QuoteScreen {
    pub fn filter(&self) -> QuoteFilter {
        QuoteFilter {
            author: None,
            category: self.category_filter.clone(),
        }
    }

    pub fn selected_quote(&self) -> Option<&Quote> {
        self.quotes.get(self.selected)
    }

    /// Distinct non-empty categories of the loaded rows, first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !quote.category.is_empty() && !seen.contains(&quote.category) {
                seen.push(quote.category.clone());
            }
        }
        seen
    }

    /// None, each loaded category in turn, then back to None
    pub fn cycle_filter(&mut self) {
        let categories = self.categories();
        self.category_filter = match &self.category_filter {
            None => categories.first().cloned(),
            Some(current) => categories
                .iter()
                .position(|c| c == current)
                .and_then(|i| categories.get(i + 1))
                .cloned(),
        };
    }
}

/// Keep a selection index inside a list of `len` rows
fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,

    pub screen: Screen,

    /// Help overlay visible
    pub show_help: bool,

    pub dashboard: DashboardState,
    pub todos: TodoScreen,
    pub quotes: QuoteScreen,

    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App instance starting on `screen`
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            ..Self::default()
        }
    }

    /// Initial loads for every screen
    pub fn init(&mut self) -> Vec<Command> {
        // Quotes before stats so a freshly seeded store is counted
        vec![
            self.load_quotes(),
            self.load_todos(),
            self.load_stats(),
        ]
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn load_stats(&mut self) -> Command {
        self.dashboard.loading = true;
        Command::LoadStats
    }

    pub fn load_todos(&mut self) -> Command {
        self.todos.loading = true;
        Command::LoadTodos(self.todos.filter())
    }

    pub fn load_quotes(&mut self) -> Command {
        self.quotes.loading = true;
        Command::LoadQuotes(self.quotes.filter())
    }

    /// Reload whatever the current screen shows
    pub fn reload(&mut self) -> Vec<Command> {
        match self.screen {
            Screen::Dashboard => vec![self.load_stats()],
            Screen::Todos => vec![self.load_todos()],
            Screen::Quotes => vec![self.load_quotes()],
        }
    }

    /// Switch to a screen and refresh it
    pub fn switch_screen(&mut self, screen: Screen) -> Vec<Command> {
        self.screen = screen;
        self.reload()
    }

    /// True while a form has keyboard focus
    pub fn in_text_entry(&self) -> bool {
        match self.screen {
            Screen::Dashboard => false,
            Screen::Todos => matches!(
                self.todos.mode,
                TodoMode::Adding(_) | TodoMode::Editing { .. }
            ),
            Screen::Quotes => matches!(
                self.quotes.mode,
                QuoteMode::Adding(_) | QuoteMode::Editing { .. }
            ),
        }
    }

    /// Move selection up on the current screen
    pub fn move_up(&mut self) {
        let selected = match self.screen {
            Screen::Dashboard => &mut self.dashboard.selected,
            Screen::Todos => &mut self.todos.selected,
            Screen::Quotes => &mut self.quotes.selected,
        };
        *selected = selected.saturating_sub(1);
    }

    /// Move selection down on the current screen
    pub fn move_down(&mut self) {
        let (selected, len) = match self.screen {
            Screen::Dashboard => (&mut self.dashboard.selected, MENU.len()),
            Screen::Todos => (&mut self.todos.selected, self.todos.todos.len()),
            Screen::Quotes => (&mut self.quotes.selected, self.quotes.quotes.len()),
        };
        if *selected + 1 < len {
            *selected += 1;
        }
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::success(message));
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::error(message));
    }

    /// Drop expired notifications
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Fold a store result into the state, returning follow-up commands
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::StatsLoaded(stats) => {
                self.dashboard.stats = Some(stats);
                self.dashboard.loading = false;
                self.dashboard.error = None;
                vec![]
            }
            Message::StatsFailed(err) => {
                self.dashboard.loading = false;
                self.dashboard.error = Some(err);
                vec![]
            }
            Message::TodosLoaded(todos) => {
                self.todos.selected = clamp(self.todos.selected, todos.len());
                self.todos.todos = todos;
                self.todos.loading = false;
                self.todos.error = None;
                vec![]
            }
            Message::TodosFailed(err) => {
                self.todos.loading = false;
                self.todos.error = Some(err.clone());
                self.notify_error(err);
                vec![]
            }
            Message::TodoSaved(text) => {
                self.notify_success(text);
                vec![self.load_todos(), self.load_stats()]
            }
            Message::TodoFailed(err) => {
                self.todos.error = Some(err.clone());
                self.notify_error(err);
                vec![self.load_todos()]
            }
            Message::QuotesLoaded(quotes) => {
                self.quotes.selected = clamp(self.quotes.selected, quotes.len());
                self.quotes.quotes = quotes;
                self.quotes.loading = false;
                self.quotes.error = None;
                vec![]
            }
            Message::QuotesFailed(err) => {
                self.quotes.loading = false;
                self.quotes.error = Some(err.clone());
                self.notify_error(err);
                vec![]
            }
            Message::QuoteSaved(text) => {
                self.notify_success(text);
                vec![self.load_quotes(), self.load_stats()]
            }
            Message::QuoteFailed(err) => {
                self.quotes.error = Some(err.clone());
                self.notify_error(err);
                vec![self.load_quotes()]
            }
            Message::RandomQuoteLoaded(quote) => {
                self.quotes.mode = QuoteMode::Viewing(quote);
                vec![]
            }
        }
    }
}
