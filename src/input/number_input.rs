use crate::input::{Input, InputBase, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::validators::Validator;
use unicode_width::UnicodeWidthStr;

pub const GOLD_RECORD_UNIT: u64 = 1_000_000;
pub const GOLD_RECORD_CAP: u64 = 4;

/// Digit-only input with Up/Down stepping and a derived gold-record
/// reward: one record per full million units, capped at four.
pub struct NumberInput {
    base: InputBase,
    value: String,
    cursor_pos: usize,
    step: u64,
}

impl NumberInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: InputBase::new(id, label),
            value: String::new(),
            cursor_pos: 0,
            step: 1,
        }
    }

    pub fn with_value(mut self, value: u64) -> Self {
        self.value = value.to_string();
        self.cursor_pos = self.value.len();
        self
    }

    pub fn with_step(mut self, step: u64) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn amount(&self) -> u64 {
        self.value.parse().unwrap_or(0)
    }

    pub fn gold_records(&self) -> u64 {
        (self.amount() / GOLD_RECORD_UNIT).min(GOLD_RECORD_CAP)
    }

    fn set_amount(&mut self, amount: u64) {
        self.value = amount.to_string();
        self.cursor_pos = self.cursor_pos.min(self.value.len());
    }

    fn insert_digit(&mut self, ch: char) {
        if !ch.is_ascii_digit() {
            return;
        }
        // Value stays ASCII digits, so the cursor is a byte index too.
        self.value.insert(self.cursor_pos, ch);
        self.cursor_pos += 1;
        self.base.error = None;
    }

    fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        self.value.remove(self.cursor_pos - 1);
        self.cursor_pos -= 1;
        self.base.error = None;
    }
}

impl Input for NumberInput {
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
        if value.chars().all(|c| c.is_ascii_digit()) {
            self.cursor_pos = value.len();
            self.value = value;
        }
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

    fn handle_key(&mut self, code: KeyCode, _modifiers: KeyModifiers) -> KeyResult {
        match code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                self.insert_digit(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Up => {
                self.set_amount(self.amount().saturating_add(self.step));
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.set_amount(self.amount().saturating_sub(self.step));
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                KeyResult::Handled
            }
            KeyCode::Right => {
                if self.cursor_pos < self.value.len() {
                    self.cursor_pos += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.value.len();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = vec![Span::new(&self.value).no_wrap()];
        let records = self.gold_records();
        if records > 0 {
            spans.push(Span::new("  ").no_wrap());
            spans.push(Span::styled("◉ ".repeat(records as usize), theme.reward).no_wrap());
        }
        spans
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        Some(self.value[..self.cursor_pos].width())
    }
}
