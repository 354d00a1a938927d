//! Text input widget
//!
//! A single-line text buffer with a character-indexed cursor.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A simple text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Shown when empty and unfocused
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.set_value(content);
        self
    }

    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as `label: value` with a block cursor when focused
    pub fn line(&self, label: &str, focused: bool) -> Line<'static> {
        let label_style = if focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let value_style = Style::default().fg(Color::White);

        let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];

        if !focused {
            if self.content.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(self.content.clone(), value_style));
            }
            return Line::from(spans);
        }

        let before: String = self.content.chars().take(self.cursor).collect();
        let mut rest = self.content.chars().skip(self.cursor);
        let cursor_char = rest.next().unwrap_or(' ');
        let after: String = rest.collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
        Line::from(spans)
    }
}
