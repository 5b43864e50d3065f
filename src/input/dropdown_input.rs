use crate::input::{Input, InputBase, InputCaps, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::validators::Validator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    pub label: String,
    pub detail: String,
}

impl DropdownItem {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

/// Collapsible list picker. Space toggles the list, Up/Down move the
/// highlight, Enter commits, Esc dismisses without committing.
pub struct DropdownInput {
    base: InputBase,
    items: Vec<DropdownItem>,
    placeholder: String,
    committed: Option<usize>,
    highlighted: usize,
    open: bool,
}

impl DropdownInput {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        items: Vec<DropdownItem>,
    ) -> Self {
        Self {
            base: InputBase::new(id, label),
            items,
            placeholder: "Select".to_string(),
            committed: None,
            highlighted: 0,
            open: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn committed_item(&self) -> Option<&DropdownItem> {
        self.committed.and_then(|i| self.items.get(i))
    }

    fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.highlighted = self.committed.unwrap_or(0);
        }
    }

    fn commit_highlighted(&mut self) {
        if self.items.is_empty() {
            self.open = false;
            return;
        }
        self.committed = Some(self.highlighted);
        self.open = false;
        self.base.error = None;
    }

    fn move_highlight(&mut self, direction: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let current = self.highlighted as isize;
        self.highlighted = ((current + direction + len) % len) as usize;
    }
}

impl Input for DropdownInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.committed_item()
            .map(|item| item.label.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: String) {
        if value.is_empty() {
            self.committed = None;
            return;
        }
        if let Some(pos) = self.items.iter().position(|item| item.label == value) {
            self.committed = Some(pos);
        }
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_esc: self.open,
            ..InputCaps::default()
        }
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
        if !focused {
            self.open = false;
        }
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
            KeyCode::Char(' ') => {
                self.toggle();
                KeyResult::Handled
            }
            KeyCode::Up if self.open => {
                self.move_highlight(-1);
                KeyResult::Handled
            }
            KeyCode::Down if self.open => {
                self.move_highlight(1);
                KeyResult::Handled
            }
            KeyCode::Esc if self.open => {
                self.open = false;
                KeyResult::Handled
            }
            KeyCode::Enter => {
                if self.open {
                    self.commit_highlighted();
                    KeyResult::Handled
                } else {
                    KeyResult::Submit
                }
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::new();

        match self.committed_item() {
            Some(item) => {
                spans.push(Span::styled(format!("{}  ", item.detail), theme.hint).no_wrap());
                spans.push(Span::new(item.label.clone()).no_wrap());
            }
            None => {
                spans.push(Span::styled(self.placeholder.clone(), theme.placeholder).no_wrap());
            }
        }
        spans.push(Span::new(if self.open { " ▴" } else { " ▾" }).no_wrap());

        if self.open {
            for (idx, item) in self.items.iter().enumerate() {
                let selected = idx == self.highlighted;
                let marker = if selected { "  ▸ " } else { "    " };
                let style = if selected {
                    theme.selection
                } else {
                    crate::ui::style::Style::default()
                };
                spans.push(Span::line_break());
                spans.push(Span::new(marker).no_wrap());
                spans.push(Span::styled(format!("{}  ", item.detail), theme.hint).no_wrap());
                spans.push(Span::styled(item.label.clone(), style).no_wrap());
            }
        }

        spans
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn albums() -> DropdownInput {
        DropdownInput::new(
            "top_album",
            "Top Album",
            vec![
                DropdownItem::new("Doggystyle", "1993"),
                DropdownItem::new("Tha Doggfather", "1996"),
                DropdownItem::new("Da Game Is to Be Sold, Not to Be Told", "1998"),
            ],
        )
        .with_placeholder("Select Top Album")
    }

    #[test]
    fn starts_closed_and_empty() {
        let input = albums();
        assert!(!input.is_open());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn space_opens_and_enter_commits() {
        let mut input = albums();
        input.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(input.is_open());
        input.handle_key(KeyCode::Down, KeyModifiers::NONE);
        input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(!input.is_open());
        assert_eq!(input.value(), "Tha Doggfather");
    }

    #[test]
    fn esc_dismisses_without_committing() {
        let mut input = albums();
        input.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        input.handle_key(KeyCode::Down, KeyModifiers::NONE);
        input.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!input.is_open());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn esc_is_captured_only_while_open() {
        let mut input = albums();
        assert!(!input.capabilities().captures_key(KeyCode::Esc, KeyModifiers::NONE));
        input.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(input.capabilities().captures_key(KeyCode::Esc, KeyModifiers::NONE));
    }

    #[test]
    fn enter_submits_when_closed() {
        let mut input = albums();
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            KeyResult::Submit
        );
    }

    #[test]
    fn highlight_wraps_and_resumes_from_commit() {
        let mut input = albums();
        input.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        input.handle_key(KeyCode::Up, KeyModifiers::NONE);
        input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(input.value(), "Da Game Is to Be Sold, Not to Be Told");
        input.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
        input.handle_key(KeyCode::Down, KeyModifiers::NONE);
        input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(input.value(), "Doggystyle");
    }
}
