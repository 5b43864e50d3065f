use crate::input::{Input, InputBase, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::validators::Validator;

/// Horizontal option cycler. Starts on the placeholder until the user
/// picks an option; cycling wraps back through the placeholder.
pub struct SelectInput {
    base: InputBase,
    options: Vec<String>,
    placeholder: Option<String>,
    selected: Option<usize>,
}

impl SelectInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>, options: Vec<String>) -> Self {
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            base: InputBase::new(id, label),
            options,
            placeholder: None,
            selected,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self.selected = None;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    fn current_option(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    fn move_right(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(0),
            Some(i) if i + 1 < self.options.len() => Some(i + 1),
            Some(_) => {
                if self.placeholder.is_some() {
                    None
                } else {
                    Some(0)
                }
            }
        };
    }

    fn move_left(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = match self.selected {
            None => Some(self.options.len() - 1),
            Some(0) => {
                if self.placeholder.is_some() {
                    None
                } else {
                    Some(self.options.len() - 1)
                }
            }
            Some(i) => Some(i - 1),
        };
    }
}

impl Input for SelectInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.current_option().unwrap_or("").to_string()
    }

    fn set_value(&mut self, value: String) {
        if value.is_empty() && self.placeholder.is_some() {
            self.selected = None;
            return;
        }
        if let Some(pos) = self.options.iter().position(|opt| opt == &value) {
            self.selected = Some(pos);
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
            KeyCode::Left => {
                self.move_left();
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.move_right();
                KeyResult::Handled
            }
            KeyCode::Enter => KeyResult::Submit,
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        match self.current_option() {
            Some(option) => {
                let text = if self.base.focused {
                    format!("‹ {} ›", option)
                } else {
                    option.to_string()
                };
                vec![Span::new(text).no_wrap()]
            }
            None => {
                let placeholder = self.placeholder.as_deref().unwrap_or("");
                let text = if self.base.focused {
                    format!("‹ {} ›", placeholder)
                } else {
                    placeholder.to_string()
                };
                vec![Span::styled(text, theme.placeholder).no_wrap()]
            }
        }
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        None
    }
}
