//! Event handler for the TUI
//!
//! Routes keyboard events to the current screen and mode, and store results
//! to [`App::update`]. Every path returns the commands to dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TadaError;

use super::app::{App, QuoteMode, Screen, TodoMode, MENU};
use super::commands::Command;
use super::dialogs::form::{FormAction, FormState};
use super::dialogs::{quote as quote_form, todo as todo_form};
use super::event::Event;
use super::keybindings::{lookup, Action, KeyContext};

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Vec<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Mouse(_) | Event::Resize(_, _) => vec![],
        Event::Tick => {
            app.on_tick();
            vec![]
        }
        Event::Message(message) => app.update(message),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Vec<Command> {
    // Ctrl+C quits even from a form
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return vec![];
    }

    // Any key closes help
    if app.show_help {
        app.show_help = false;
        return vec![];
    }

    match app.screen {
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Todos => handle_todos_key(app, key),
        Screen::Quotes => handle_quotes_key(app, key),
    }
}

/// Keys available outside text entry
fn handle_global_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    match lookup(KeyContext::Global, &key) {
        Some(Action::Quit) => app.quit(),
        Some(Action::Help) => app.toggle_help(),
        Some(Action::NextScreen) => {
            let next = app.screen.next();
            return app.switch_screen(next);
        }
        Some(Action::PrevScreen) => {
            let prev = app.screen.prev();
            return app.switch_screen(prev);
        }
        Some(Action::Up) => app.move_up(),
        Some(Action::Down) => app.move_down(),
        Some(Action::Reload) => return app.reload(),
        _ => {}
    }
    vec![]
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    match lookup(KeyContext::Dashboard, &key) {
        Some(Action::Select) => {
            let target = MENU
                .get(app.dashboard.selected)
                .copied()
                .unwrap_or(Screen::Todos);
            app.switch_screen(target)
        }
        _ => handle_global_key(app, key),
    }
}

/// Message shown inside a form for a rejected submission
fn form_error(err: TadaError) -> String {
    match err {
        TadaError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

/// Outcome of a key press inside a form
enum FormOutcome<T> {
    Editing(FormState),
    Cancelled,
    Submitted(T),
}

fn drive_form<T>(
    mut form: FormState,
    key: KeyEvent,
    parse: impl Fn(&FormState) -> Result<T, TadaError>,
) -> FormOutcome<T> {
    match form.handle_key(key) {
        FormAction::Continue => FormOutcome::Editing(form),
        FormAction::Cancel => FormOutcome::Cancelled,
        FormAction::Submit => match parse(&form) {
            Ok(value) => FormOutcome::Submitted(value),
            Err(e) => {
                form.set_error(form_error(e));
                FormOutcome::Editing(form)
            }
        },
    }
}

fn handle_todos_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    match std::mem::take(&mut app.todos.mode) {
        TodoMode::Browsing => handle_todos_browse_key(app, key),
        TodoMode::Adding(form) => match drive_form(form, key, todo_form::parse_new) {
            FormOutcome::Editing(form) => {
                app.todos.mode = TodoMode::Adding(form);
                vec![]
            }
            FormOutcome::Cancelled => vec![],
            FormOutcome::Submitted(new) => vec![Command::CreateTodo(new)],
        },
        TodoMode::Editing { id, form } => match drive_form(form, key, todo_form::parse_changes) {
            FormOutcome::Editing(form) => {
                app.todos.mode = TodoMode::Editing { id, form };
                vec![]
            }
            FormOutcome::Cancelled => vec![],
            FormOutcome::Submitted(changes) => vec![Command::UpdateTodo { id, changes }],
        },
        TodoMode::ConfirmDelete(todo) => match lookup(KeyContext::Confirm, &key) {
            Some(Action::Confirm) => vec![Command::DeleteTodo(todo.id)],
            Some(Action::Cancel) => vec![],
            _ => {
                app.todos.mode = TodoMode::ConfirmDelete(todo);
                handle_global_key(app, key)
            }
        },
    }
}

fn handle_todos_browse_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    match lookup(KeyContext::Todos, &key) {
        Some(Action::Add) => {
            app.todos.mode = TodoMode::Adding(todo_form::add_form());
            vec![]
        }
        Some(Action::Edit) => {
            if let Some(todo) = app.todos.selected_todo() {
                let id = todo.id;
                let form = todo_form::edit_form(todo);
                app.todos.mode = TodoMode::Editing { id, form };
            }
            vec![]
        }
        Some(Action::Delete) => {
            if let Some(todo) = app.todos.selected_todo().cloned() {
                app.todos.mode = TodoMode::ConfirmDelete(todo);
            }
            vec![]
        }
        Some(Action::Toggle) => app
            .todos
            .selected_todo()
            .map(|todo| vec![Command::ToggleTodo(todo.id)])
            .unwrap_or_default(),
        Some(Action::Filter) => {
            app.todos.cycle_filter();
            vec![app.load_todos()]
        }
        _ => handle_global_key(app, key),
    }
}

fn handle_quotes_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    match std::mem::take(&mut app.quotes.mode) {
        QuoteMode::Browsing => handle_quotes_browse_key(app, key),
        QuoteMode::Adding(form) => match drive_form(form, key, quote_form::parse_new) {
            FormOutcome::Editing(form) => {
                app.quotes.mode = QuoteMode::Adding(form);
                vec![]
            }
            FormOutcome::Cancelled => vec![],
            FormOutcome::Submitted(new) => vec![Command::CreateQuote(new)],
        },
        QuoteMode::Editing { id, form } => {
            match drive_form(form, key, quote_form::parse_changes) {
                FormOutcome::Editing(form) => {
                    app.quotes.mode = QuoteMode::Editing { id, form };
                    vec![]
                }
                FormOutcome::Cancelled => vec![],
                FormOutcome::Submitted(changes) => vec![Command::UpdateQuote { id, changes }],
            }
        }
        QuoteMode::ConfirmDelete(quote) => match lookup(KeyContext::Confirm, &key) {
            Some(Action::Confirm) => vec![Command::DeleteQuote(quote.id)],
            Some(Action::Cancel) => vec![],
            _ => {
                app.quotes.mode = QuoteMode::ConfirmDelete(quote);
                handle_global_key(app, key)
            }
        },
        QuoteMode::Viewing(quote) => match lookup(KeyContext::QuoteCard, &key) {
            Some(Action::Random) => {
                app.quotes.mode = QuoteMode::Viewing(quote);
                vec![Command::RandomQuote]
            }
            Some(Action::Back) => vec![],
            _ => {
                app.quotes.mode = QuoteMode::Viewing(quote);
                handle_global_key(app, key)
            }
        },
    }
}

fn handle_quotes_browse_key(app: &mut App, key: KeyEvent) -> Vec<Command> {
    match lookup(KeyContext::Quotes, &key) {
        Some(Action::Add) => {
            app.quotes.mode = QuoteMode::Adding(quote_form::add_form());
            vec![]
        }
        Some(Action::Edit) => {
            if let Some(quote) = app.quotes.selected_quote() {
                let id = quote.id;
                let form = quote_form::edit_form(quote);
                app.quotes.mode = QuoteMode::Editing { id, form };
            }
            vec![]
        }
        Some(Action::Delete) => {
            if let Some(quote) = app.quotes.selected_quote().cloned() {
                app.quotes.mode = QuoteMode::ConfirmDelete(quote);
            }
            vec![]
        }
        Some(Action::Select) => {
            if let Some(quote) = app.quotes.selected_quote().cloned() {
                app.quotes.mode = QuoteMode::Viewing(quote);
            }
            vec![]
        }
        Some(Action::Random) => vec![Command::RandomQuote],
        Some(Action::Filter) => {
            app.quotes.cycle_filter();
            vec![app.load_quotes()]
        }
        _ => handle_global_key(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        NewQuote, NewTodo, Priority, Quote, QuoteFilter, Status, Todo, TodoChange, TodoFilter,
    };
    use crate::tui::commands::Message;
    use chrono::Utc;

    fn press(app: &mut App, code: KeyCode) -> Vec<Command> {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn todo(id: i64, description: &str) -> Todo {
        let now = Utc::now();
        Todo {
            id,
            description: description.to_string(),
            priority: Priority::Medium,
            status: Status::Open,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    fn quote(id: i64, text: &str, category: &str) -> Quote {
        let now = Utc::now();
        Quote {
            id,
            text: text.to_string(),
            author: String::new(),
            category: category.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn todo_app() -> App {
        let mut app = App::new(Screen::Todos);
        app.update(Message::TodosLoaded(vec![todo(2, "Second"), todo(1, "First")]));
        app
    }

    #[test]
    fn test_tab_cycles_screens_and_loads() {
        let mut app = App::new(Screen::Dashboard);
        let commands = press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Todos);
        assert_eq!(commands, vec![Command::LoadTodos(TodoFilter::all())]);

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
        );
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn test_dashboard_menu_navigates() {
        let mut app = App::new(Screen::Dashboard);
        press(&mut app, KeyCode::Down);
        let commands = press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Quotes);
        assert_eq!(commands, vec![Command::LoadQuotes(QuoteFilter::all())]);
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = App::new(Screen::Dashboard);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        // Any key closes help without acting
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_add_todo_flow() {
        let mut app = todo_app();
        press(&mut app, KeyCode::Char('a'));
        assert!(app.in_text_entry());

        // 'q' is text here, not quit
        type_text(&mut app, "Buy quinoa");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "high");

        let commands = press(&mut app, KeyCode::Enter);
        assert_eq!(
            commands,
            vec![Command::CreateTodo(NewTodo::new("Buy quinoa", Priority::High))]
        );
        assert_eq!(app.todos.mode, TodoMode::Browsing);
    }

    #[test]
    fn test_invalid_form_stays_open_with_error() {
        let mut app = todo_app();
        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Task");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "urgent");

        assert!(press(&mut app, KeyCode::Enter).is_empty());
        match &app.todos.mode {
            TodoMode::Adding(form) => assert!(form.error().unwrap().starts_with("priority must be one of")),
            other => panic!("unexpected {:?}", other),
        }

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.todos.mode, TodoMode::Browsing);
    }

    #[test]
    fn test_edit_prefills_selected_row() {
        let mut app = todo_app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));

        let commands = press(&mut app, KeyCode::Enter);
        assert_eq!(
            commands,
            vec![Command::UpdateTodo {
                id: 1,
                changes: vec![
                    TodoChange::Description("First".into()),
                    TodoChange::Priority(Priority::Medium)
                ],
            }]
        );
    }

    #[test]
    fn test_toggle_and_delete_confirmation() {
        let mut app = todo_app();
        assert_eq!(press(&mut app, KeyCode::Enter), vec![Command::ToggleTodo(2)]);

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.todos.mode, TodoMode::ConfirmDelete(ref t) if t.id == 2));
        assert!(press(&mut app, KeyCode::Char('n')).is_empty());
        assert_eq!(app.todos.mode, TodoMode::Browsing);

        press(&mut app, KeyCode::Delete);
        assert_eq!(press(&mut app, KeyCode::Char('y')), vec![Command::DeleteTodo(2)]);
    }

    #[test]
    fn test_actions_on_empty_table_are_noops() {
        let mut app = App::new(Screen::Todos);
        assert!(press(&mut app, KeyCode::Char('e')).is_empty());
        assert!(press(&mut app, KeyCode::Char('d')).is_empty());
        assert!(press(&mut app, KeyCode::Char('t')).is_empty());
        assert_eq!(app.todos.mode, TodoMode::Browsing);
    }

    #[test]
    fn test_todo_filter_key_reloads() {
        let mut app = todo_app();
        let commands = press(&mut app, KeyCode::Char('f'));
        assert_eq!(
            commands,
            vec![Command::LoadTodos(TodoFilter::all().with_status(Status::Open))]
        );
    }

    #[test]
    fn test_quote_flows() {
        let mut app = App::new(Screen::Quotes);
        app.update(Message::QuotesLoaded(vec![
            quote(1, "Act", "life"),
            quote(2, "Rest", "health"),
        ]));

        // Filter cycles through loaded categories
        assert_eq!(
            press(&mut app, KeyCode::Char('f')),
            vec![Command::LoadQuotes(QuoteFilter::all().with_category("life"))]
        );

        // Card view and back
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.quotes.mode, QuoteMode::Viewing(ref q) if q.id == 1));
        assert_eq!(press(&mut app, KeyCode::Char(' ')), vec![Command::RandomQuote]);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.quotes.mode, QuoteMode::Browsing);

        // Add
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Ship it");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Anon");
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            vec![Command::CreateQuote(NewQuote::new("Ship it", "Anon", ""))]
        );
    }

    #[test]
    fn test_messages_route_through_handler() {
        let mut app = todo_app();
        let commands = handle_event(&mut app, Event::Message(Message::QuoteSaved("ok".into())));
        assert_eq!(
            commands,
            vec![Command::LoadQuotes(QuoteFilter::all()), Command::LoadStats]
        );
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let mut app = todo_app();
        press(&mut app, KeyCode::Char('a'));
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        );
        assert!(app.should_quit);
    }
}
