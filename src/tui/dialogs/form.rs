//! Generic form dialog
//!
//! A modal list of labelled text fields with tab navigation, required-field
//! checks and an inline error line. Domain validation happens in the caller,
//! which reports failures back through [`FormState::set_error`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::keybindings::{lookup, Action, KeyContext};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// One labelled input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub input: TextInput,
    pub required: bool,
}

/// Result of feeding a key to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Key consumed, keep editing
    Continue,
    Submit,
    Cancel,
}

/// State for a form dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    fields: Vec<FormField>,
    focused: usize,
    error: Option<String>,
}

impl FormState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            focused: 0,
            error: None,
        }
    }

    /// Append a field
    pub fn field(
        mut self,
        label: &'static str,
        required: bool,
        placeholder: &str,
        value: &str,
    ) -> Self {
        self.fields.push(FormField {
            label,
            input: TextInput::new().placeholder(placeholder).content(value),
            required,
        });
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Value of the field at `index`, or "" if absent
    pub fn value(&self, index: usize) -> &str {
        self.fields
            .get(index)
            .map(|f| f.input.value())
            .unwrap_or_default()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        self.fields.get_mut(self.focused).map(|f| &mut f.input)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Check every required field is non-blank
    pub fn check_required(&self) -> Result<(), String> {
        match self
            .fields
            .iter()
            .find(|f| f.required && f.input.value().trim().is_empty())
        {
            Some(field) => Err(format!("{} is required", field.label)),
            None => Ok(()),
        }
    }

    /// Handle key input for the form
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match lookup(KeyContext::Form, &key) {
            Some(Action::NextField) => {
                self.next_field();
                return FormAction::Continue;
            }
            Some(Action::PrevField) => {
                self.prev_field();
                return FormAction::Continue;
            }
            Some(Action::Submit) => return FormAction::Submit,
            Some(Action::Cancel) => return FormAction::Cancel,
            _ => {}
        }

        let Some(input) = self.focused_input() else {
            return FormAction::Continue;
        };

        match key.code {
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_start(),
            KeyCode::End => input.move_end(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
            _ => return FormAction::Continue,
        }

        self.clear_error();
        FormAction::Continue
    }
}

/// Render a form dialog
pub fn render(frame: &mut Frame, form: &FormState) {
    let height = form.fields.len() as u16 * 2 + 6;
    let area = centered_rect_fixed(70, height, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", form.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect();
    constraints.extend([
        Constraint::Length(1), // Error
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Hints
        Constraint::Min(0),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in form.fields.iter().enumerate() {
        let label = if field.required {
            format!("{}*", field.label)
        } else {
            field.label.to_string()
        };
        let line = field.input.line(&label, i == form.focused);
        frame.render_widget(Paragraph::new(line), chunks[i * 2]);
    }

    let base = form.fields.len() * 2;
    if let Some(error) = form.error() {
        let error_line = Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[base]);
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[base + 2]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> FormState {
        FormState::new("Add")
            .field("Description", true, "What needs doing?", "")
            .field("Priority", false, "medium", "")
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut form = form();
        for c in "Ship".chars() {
            assert_eq!(form.handle_key(key(KeyCode::Char(c))), FormAction::Continue);
        }
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Char('h')));

        assert_eq!(form.value(0), "Ship");
        assert_eq!(form.value(1), "h");
        assert_eq!(form.value(9), "");
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = form();
        form.handle_key(key(KeyCode::Up));
        assert_eq!(form.focused(), 1);
        form.handle_key(key(KeyCode::Down));
        assert_eq!(form.focused(), 0);
        form.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(form.focused(), 1);
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut form = form();
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Submit);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
    }

    #[test]
    fn test_required_fields() {
        let mut form = form();
        assert_eq!(
            form.check_required().unwrap_err(),
            "Description is required"
        );

        form.handle_key(key(KeyCode::Char(' ')));
        assert!(form.check_required().is_err());

        form.handle_key(key(KeyCode::Char('x')));
        assert!(form.check_required().is_ok());
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = form();
        form.set_error("bad");
        assert_eq!(form.error(), Some("bad"));
        form.handle_key(key(KeyCode::Char('a')));
        assert_eq!(form.error(), None);
    }
}
