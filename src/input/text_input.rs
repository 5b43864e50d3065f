use crate::input::{Input, InputBase, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::validators::Validator;
use unicode_width::UnicodeWidthChar;

pub struct TextInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor_pos: 0,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor_pos = self.value.chars().count();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    fn handle_char(&mut self, ch: char) {
        let byte_pos = self
            .value
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len());
        self.value.insert(byte_pos, ch);
        self.cursor_pos += 1;
        self.base.error = None;
    }

    fn handle_backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self
            .value
            .char_indices()
            .nth(self.cursor_pos - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.value.remove(byte_pos);
        self.cursor_pos -= 1;
        self.base.error = None;
    }

    fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    fn move_right(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            self.cursor_pos += 1;
        }
    }

    fn is_separator(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '.' | '/' | ',' | '-' | '@')
    }

    fn move_word_left(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            pos -= 1;
        }
        self.cursor_pos = pos;
    }

    fn move_word_right(&mut self) {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            pos += 1;
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            pos += 1;
        }
        self.cursor_pos = pos;
    }

    fn delete_word_impl(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }

        let mut chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor_pos;

        while pos > 0 && chars.get(pos - 1).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos - 1);
            pos -= 1;
        }

        self.value = chars.into_iter().collect();
        self.cursor_pos = pos;
        self.base.error = None;
    }

    fn delete_word_forward_impl(&mut self) {
        let mut chars: Vec<char> = self.value.chars().collect();
        let pos = self.cursor_pos;

        while pos < chars.len() && chars.get(pos).is_some_and(|c| Self::is_separator(*c)) {
            chars.remove(pos);
        }
        while pos < chars.len() && chars.get(pos).is_some_and(|c| !Self::is_separator(*c)) {
            chars.remove(pos);
        }

        self.value = chars.into_iter().collect();
        self.base.error = None;
    }
}

impl Input for TextInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: String) {
        self.cursor_pos = value.chars().count();
        self.value = value;
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
    }

    fn error(&self) -> Option<&str> {
        self.base.error.as_deref()
    }

    fn set_error(&mut self, error: Option<String>) {
        self.base.error = error;
    }

    fn validators(&self) -> &[Validator] {
        &self.base.validators
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) => {
                self.handle_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                KeyResult::Handled
            }
            KeyCode::Left => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_left();
                } else {
                    self.move_left();
                }
                KeyResult::Handled
            }
            KeyCode::Right => {
                if modifiers.contains(KeyModifiers::CONTROL) {
                    self.move_word_right();
                } else {
                    self.move_right();
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, _theme: &Theme) -> Vec<Span> {
        vec![Span::new(&self.value).no_wrap()]
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        Some(
            self.value
                .chars()
                .take(self.cursor_pos)
                .map(|c| c.width().unwrap_or(0))
                .sum(),
        )
    }

    fn delete_word(&mut self) {
        self.delete_word_impl();
    }

    fn delete_word_forward(&mut self) {
        self.delete_word_forward_impl();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) {
        input.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn typing_inserts_at_cursor() {
        let mut input = TextInput::new("name", "Rap Name");
        for ch in "Mike".chars() {
            press(&mut input, KeyCode::Char(ch));
        }
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Char('K'));
        assert_eq!(input.value(), "KMike");
        assert_eq!(input.cursor_offset_in_content(), Some(1));
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::new("name", "Rap Name").with_value("Mike");
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "Mik");
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Backspace);
        assert_eq!(input.value(), "Mik");
    }

    #[test]
    fn word_delete_stops_at_separator() {
        let mut input = TextInput::new("email", "Email").with_value("snoop@dogg.pound");
        input.delete_word();
        assert_eq!(input.value(), "snoop@dogg.");
        input.delete_word();
        assert_eq!(input.value(), "snoop@");
    }

    #[test]
    fn ctrl_arrows_jump_words() {
        let mut input = TextInput::new("name", "Rap Name").with_value("Killer Mike");
        input.handle_key(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(input.cursor_offset_in_content(), Some(7));
        input.handle_key(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(input.cursor_offset_in_content(), Some(0));
        input.handle_key(KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(input.cursor_offset_in_content(), Some(6));
    }

    #[test]
    fn enter_requests_submit() {
        let mut input = TextInput::new("name", "Rap Name");
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            KeyResult::Submit
        );
    }
}
