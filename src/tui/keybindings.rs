//! Keybinding definitions
//!
//! Every shortcut lives in one table. The handler resolves key events to
//! actions through it and the help overlay renders it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    NextScreen,
    PrevScreen,
    Up,
    Down,
    Reload,
    Select,
    Add,
    Edit,
    Delete,
    Toggle,
    Filter,
    Random,
    Back,
    NextField,
    PrevField,
    Submit,
    Cancel,
    Confirm,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere except text entry
    Global,
    Dashboard,
    Todos,
    Quotes,
    /// Quote card (detail or random)
    QuoteCard,
    /// Add and edit forms
    Form,
    /// Delete confirmation
    Confirm,
}

impl KeyContext {
    /// Section heading in the help overlay
    pub fn title(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Dashboard => "Dashboard",
            Self::Todos => "Todos",
            Self::Quotes => "Quotes",
            Self::QuoteCard => "Quote Card",
            Self::Form => "Forms",
            Self::Confirm => "Delete Confirmation",
        }
    }
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// Keys that trigger the action, first one is shown first in help
    pub keys: &'static [(KeyCode, KeyModifiers)],
    pub action: Action,
    /// Description of what the key does
    pub description: &'static str,
    pub context: KeyContext,
}

const NONE: KeyModifiers = KeyModifiers::NONE;

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        keys: &[(KeyCode::Char('q'), NONE), (KeyCode::Char('c'), KeyModifiers::CONTROL)],
        action: Action::Quit,
        description: "Quit",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[(KeyCode::Char('?'), NONE)],
        action: Action::Help,
        description: "Show/hide help",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[(KeyCode::Tab, NONE)],
        action: Action::NextScreen,
        description: "Next screen",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[(KeyCode::BackTab, NONE)],
        action: Action::PrevScreen,
        description: "Previous screen",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[(KeyCode::Char('k'), NONE), (KeyCode::Up, NONE)],
        action: Action::Up,
        description: "Move up",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[(KeyCode::Char('j'), NONE), (KeyCode::Down, NONE)],
        action: Action::Down,
        description: "Move down",
        context: KeyContext::Global,
    },
    Keybinding {
        keys: &[(KeyCode::Char('r'), NONE)],
        action: Action::Reload,
        description: "Reload",
        context: KeyContext::Global,
    },
    // Dashboard
    Keybinding {
        keys: &[(KeyCode::Enter, NONE)],
        action: Action::Select,
        description: "Open selected screen",
        context: KeyContext::Dashboard,
    },
    // Todos
    Keybinding {
        keys: &[(KeyCode::Char('a'), NONE), (KeyCode::Char('n'), NONE)],
        action: Action::Add,
        description: "Add todo",
        context: KeyContext::Todos,
    },
    Keybinding {
        keys: &[(KeyCode::Char('e'), NONE)],
        action: Action::Edit,
        description: "Edit todo",
        context: KeyContext::Todos,
    },
    Keybinding {
        keys: &[(KeyCode::Char('d'), NONE), (KeyCode::Delete, NONE)],
        action: Action::Delete,
        description: "Delete todo",
        context: KeyContext::Todos,
    },
    Keybinding {
        keys: &[(KeyCode::Char('t'), NONE), (KeyCode::Enter, NONE)],
        action: Action::Toggle,
        description: "Toggle open/done",
        context: KeyContext::Todos,
    },
    Keybinding {
        keys: &[(KeyCode::Char('f'), NONE)],
        action: Action::Filter,
        description: "Cycle status filter",
        context: KeyContext::Todos,
    },
    // Quotes
    Keybinding {
        keys: &[(KeyCode::Char('a'), NONE), (KeyCode::Char('n'), NONE)],
        action: Action::Add,
        description: "Add quote",
        context: KeyContext::Quotes,
    },
    Keybinding {
        keys: &[(KeyCode::Char('e'), NONE)],
        action: Action::Edit,
        description: "Edit quote",
        context: KeyContext::Quotes,
    },
    Keybinding {
        keys: &[(KeyCode::Char('d'), NONE), (KeyCode::Delete, NONE)],
        action: Action::Delete,
        description: "Delete quote",
        context: KeyContext::Quotes,
    },
    Keybinding {
        keys: &[(KeyCode::Enter, NONE)],
        action: Action::Select,
        description: "View quote",
        context: KeyContext::Quotes,
    },
    Keybinding {
        keys: &[(KeyCode::Char(' '), NONE)],
        action: Action::Random,
        description: "Random quote",
        context: KeyContext::Quotes,
    },
    Keybinding {
        keys: &[(KeyCode::Char('f'), NONE)],
        action: Action::Filter,
        description: "Cycle category filter",
        context: KeyContext::Quotes,
    },
    // Quote card
    Keybinding {
        keys: &[(KeyCode::Char(' '), NONE)],
        action: Action::Random,
        description: "Another random quote",
        context: KeyContext::QuoteCard,
    },
    Keybinding {
        keys: &[(KeyCode::Esc, NONE), (KeyCode::Enter, NONE)],
        action: Action::Back,
        description: "Back to list",
        context: KeyContext::QuoteCard,
    },
    // Forms
    Keybinding {
        keys: &[(KeyCode::Tab, NONE), (KeyCode::Down, NONE)],
        action: Action::NextField,
        description: "Next field",
        context: KeyContext::Form,
    },
    Keybinding {
        keys: &[(KeyCode::BackTab, NONE), (KeyCode::Up, NONE)],
        action: Action::PrevField,
        description: "Previous field",
        context: KeyContext::Form,
    },
    Keybinding {
        keys: &[(KeyCode::Enter, NONE)],
        action: Action::Submit,
        description: "Save",
        context: KeyContext::Form,
    },
    Keybinding {
        keys: &[(KeyCode::Esc, NONE)],
        action: Action::Cancel,
        description: "Cancel",
        context: KeyContext::Form,
    },
    // Confirm
    Keybinding {
        keys: &[(KeyCode::Enter, NONE), (KeyCode::Char('y'), NONE)],
        action: Action::Confirm,
        description: "Delete",
        context: KeyContext::Confirm,
    },
    Keybinding {
        keys: &[(KeyCode::Esc, NONE), (KeyCode::Char('n'), NONE)],
        action: Action::Cancel,
        description: "Keep",
        context: KeyContext::Confirm,
    },
];

/// Shift is implied by the character itself (and by BackTab), so it is
/// ignored for those keys when matching.
fn normalized_modifiers(key: &KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    }
}

/// Resolve a key event within a single context
pub fn lookup(context: KeyContext, key: &KeyEvent) -> Option<Action> {
    let modifiers = normalized_modifiers(key);
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .find(|kb| {
            kb.keys
                .iter()
                .any(|(code, mods)| *code == key.code && *mods == modifiers)
        })
        .map(|kb| kb.action)
}

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context)
        .collect()
}

fn format_key(code: KeyCode, modifiers: KeyModifiers) -> String {
    let key_str = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        _ => format!("{:?}", code),
    };

    if modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{}", key_str)
    } else {
        key_str
    }
}

/// Format a keybinding for display ("j/↓")
pub fn format_keybinding(kb: &Keybinding) -> String {
    kb.keys
        .iter()
        .map(|(code, mods)| format_key(*code, *mods))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_lookup_by_context() {
        assert_eq!(
            lookup(KeyContext::Todos, &key(KeyCode::Enter)),
            Some(Action::Toggle)
        );
        assert_eq!(
            lookup(KeyContext::Quotes, &key(KeyCode::Enter)),
            Some(Action::Select)
        );
        assert_eq!(
            lookup(KeyContext::Global, &key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(lookup(KeyContext::Todos, &key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_lookup_ignores_shift_on_characters() {
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(lookup(KeyContext::Global, &question), Some(Action::Help));

        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            lookup(KeyContext::Global, &back_tab),
            Some(Action::PrevScreen)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(lookup(KeyContext::Global, &ctrl_c), Some(Action::Quit));
        assert_eq!(lookup(KeyContext::Global, &key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_format_keybinding() {
        let quit = &get_keybindings(KeyContext::Global)[0];
        assert_eq!(format_keybinding(quit), "q/Ctrl+c");

        let random = get_keybindings(KeyContext::Quotes)
            .into_iter()
            .find(|kb| kb.action == Action::Random)
            .unwrap();
        assert_eq!(format_keybinding(random), "Space");
    }
}
