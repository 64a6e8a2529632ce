//! Form field and form handling utilities.
//!
//! Signup screens are built from a [`Form`] of [`FormField`]s. Fields own
//! their text and cursor; the form owns focus and validation.

use crate::styles::theme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// A single form field with text input support.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Stable identifier (also the key used when the value is stored).
    pub key: &'static str,
    /// The current value of the field.
    pub value: String,
    /// The cursor position within the value, in characters.
    pub cursor: usize,
    /// Label displayed in the field's border.
    pub label: String,
    /// Optional placeholder text shown when value is empty.
    pub placeholder: Option<String>,
    /// Whether this field currently has focus.
    pub is_focused: bool,
    /// Optional validation function. Returns None if valid, Some(error) if invalid.
    validator: Option<fn(&str) -> Option<String>>,
    /// Cached validation error message.
    validation_error: Option<String>,
}

impl FormField {
    /// Create a new form field with the given key and label.
    pub fn new(key: &'static str, label: &str) -> Self {
        Self {
            key,
            value: String::new(),
            cursor: 0,
            label: label.to_string(),
            placeholder: None,
            is_focused: false,
            validator: None,
            validation_error: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Set a validation function for this field.
    pub fn with_validator(mut self, validator: fn(&str) -> Option<String>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Set the field value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = value.chars().count();
        self.validation_error = None;
    }

    /// Get the current value trimmed.
    pub fn value_trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Check if the field is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Whether a validator is attached (rendered with a `*`)
    pub fn is_required(&self) -> bool {
        self.validator.is_some()
    }

    /// Validate the field and return whether it's valid.
    pub fn validate(&mut self) -> bool {
        self.validation_error = self.validator.and_then(|validator| validator(&self.value));
        self.validation_error.is_none()
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    /// Handle a key press event.
    ///
    /// Returns true if the event was handled.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        let handled = match key {
            KeyCode::Char(c) if !c.is_control() => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                true
            }
            KeyCode::Delete => {
                self.handle_delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        };
        if handled {
            // Editing clears a stale error until the next submit
            self.validation_error = None;
        }
        handled
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_index(self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let start = self.byte_index(self.cursor - 1);
            let end = self.byte_index(self.cursor);
            self.value.replace_range(start..end, "");
            self.cursor -= 1;
        }
    }

    fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let start = self.byte_index(self.cursor);
            let end = self.byte_index(self.cursor + 1);
            self.value.replace_range(start..end, "");
        }
    }

    /// Render the field (3 rows: border, text, border).
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let border_style = if self.validation_error.is_some() {
            t.error_style()
        } else if self.is_focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        let marker = if self.is_required() { " *" } else { "" };
        let title = match &self.validation_error {
            Some(error) => format!(" {}{} - {} ", self.label, marker, error),
            None => format!(" {}{} ", self.label, marker),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title);

        let (text, style) = match (&self.placeholder, self.value.is_empty()) {
            (Some(placeholder), true) => (placeholder.clone(), t.muted_style()),
            _ => (self.value.clone(), t.text_style()),
        };

        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if self.is_focused {
            let cursor_x = area.x + 1 + self.cursor as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
    }
}

/// A form containing multiple fields.
#[derive(Debug, Default)]
pub struct Form {
    pub fields: Vec<FormField>,
    /// Index of the currently focused field.
    pub focused_index: usize,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to the form.
    pub fn add_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.key == key)
    }

    /// Trimmed value of a field, empty if missing
    pub fn value(&self, key: &str) -> &str {
        self.field(key).map(FormField::value_trimmed).unwrap_or("")
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused_index)
    }

    pub fn is_last_field_focused(&self) -> bool {
        self.focused_index + 1 >= self.fields.len()
    }

    /// Move focus to the next field (wrapping).
    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus((self.focused_index + 1) % self.fields.len());
        }
    }

    /// Move focus to the previous field (wrapping).
    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            let len = self.fields.len();
            self.focus((self.focused_index + len - 1) % len);
        }
    }

    /// Focus a specific field by index.
    pub fn focus(&mut self, index: usize) {
        if index < self.fields.len() {
            for (i, field) in self.fields.iter_mut().enumerate() {
                field.is_focused = i == index;
            }
            self.focused_index = index;
        }
    }

    /// Pass a key to the focused field.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        self.focused_field_mut()
            .is_some_and(|field| field.handle_key(key))
    }

    /// Validate all fields, focusing the first invalid one.
    ///
    /// Returns the error messages of invalid fields.
    pub fn validate(&mut self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut first_invalid = None;
        for (i, field) in self.fields.iter_mut().enumerate() {
            if !field.validate() {
                first_invalid.get_or_insert(i);
                if let Some(error) = field.validation_error() {
                    errors.push(format!("{}: {}", field.label, error));
                }
            }
        }
        if let Some(index) = first_invalid {
            self.focus(index);
        }
        errors
    }

    /// Reset focus to the first field.
    pub fn init_focus(&mut self) {
        self.focus(0);
    }
}

/// Common validators for form fields.
pub mod validators {
    /// Validate that a field is not empty.
    pub fn required(value: &str) -> Option<String> {
        if value.trim().is_empty() {
            Some("required".to_string())
        } else {
            None
        }
    }

    /// Validate that a field looks like an email address.
    pub fn email(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() {
            return Some("required".to_string());
        }
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => None,
            _ => Some("must be an email address".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_insert_char() {
        let mut field = FormField::new("name", "Name");
        field.handle_key(KeyCode::Char('h'));
        field.handle_key(KeyCode::Char('i'));
        assert_eq!(field.value, "hi");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn test_field_editing_unicode() {
        let mut field = FormField::new("name", "Name");
        field.set_value("José");
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value, "Jos");
        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value, "os");
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn test_field_cursor_movement() {
        let mut field = FormField::new("name", "Name");
        field.set_value("hello");
        field.handle_key(KeyCode::Home);
        assert_eq!(field.cursor, 0);
        field.handle_key(KeyCode::Left);
        assert_eq!(field.cursor, 0);
        field.handle_key(KeyCode::End);
        assert_eq!(field.cursor, 5);
        field.handle_key(KeyCode::Right);
        assert_eq!(field.cursor, 5);
    }

    #[test]
    fn test_form_navigation_wraps() {
        let mut form = Form::new()
            .add_field(FormField::new("a", "A"))
            .add_field(FormField::new("b", "B"));
        form.init_focus();
        assert!(form.fields[0].is_focused);

        form.next_field();
        assert_eq!(form.focused_index, 1);
        assert!(!form.fields[0].is_focused);
        assert!(form.is_last_field_focused());

        form.next_field();
        assert_eq!(form.focused_index, 0);
        form.prev_field();
        assert_eq!(form.focused_index, 1);
    }

    #[test]
    fn test_validate_focuses_first_invalid() {
        let mut form = Form::new()
            .add_field(FormField::new("name", "Name").with_validator(validators::required))
            .add_field(FormField::new("email", "Email").with_validator(validators::email));
        form.focus(1);
        form.field_mut("email").unwrap().set_value("nope");

        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(form.focused_index, 0);

        form.field_mut("name").unwrap().set_value("Ada");
        form.field_mut("email").unwrap().set_value("ada@example.com");
        assert!(form.validate().is_empty());
        assert_eq!(form.value("name"), "Ada");
    }

    #[test]
    fn test_validators() {
        assert!(validators::required("   ").is_some());
        assert!(validators::required("x").is_none());
        assert!(validators::email("a@x.com").is_none());
        assert!(validators::email("@x.com").is_some());
        assert!(validators::email("ax.com").is_some());
        assert!(validators::email("").is_some());
    }
}
