use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::theme::Theme;
use crate::validators::Validator;

pub type NodeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    Handled,
    NotHandled,
    Submit,
}

/// Keys the focused input claims ahead of the global action bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputCaps {
    pub capture_tab: bool,
    pub capture_esc: bool,
}

impl InputCaps {
    pub fn captures_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Tab if modifiers == KeyModifiers::NONE => self.capture_tab,
            KeyCode::Esc => self.capture_esc,
            _ => false,
        }
    }
}

pub trait Input: Send {
    fn id(&self) -> &NodeId;
    fn label(&self) -> &str;
    fn value(&self) -> String;
    fn set_value(&mut self, value: String);

    /// Whether a partially-entered value can be validated as-is.
    fn is_complete(&self) -> bool {
        true
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps::default()
    }

    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);

    fn error(&self) -> Option<&str>;
    fn set_error(&mut self, error: Option<String>);

    fn validators(&self) -> &[Validator];

    /// Structural checks that run before the value validators.
    fn validate_internal(&self) -> Result<(), String> {
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> KeyResult;

    fn render_content(&self, theme: &Theme) -> Vec<Span>;

    /// Display-width offset of the terminal cursor inside the rendered
    /// content, or None for inputs that hide the cursor.
    fn cursor_offset_in_content(&self) -> Option<usize>;

    fn delete_word(&mut self) {}
    fn delete_word_forward(&mut self) {}
}

pub struct InputBase {
    pub id: NodeId,
    pub label: String,
    pub focused: bool,
    pub error: Option<String>,
    pub validators: Vec<Validator>,
}

impl InputBase {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            focused: false,
            error: None,
            validators: Vec::new(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_caps_capture_nothing() {
        let caps = InputCaps::default();
        assert!(!caps.captures_key(KeyCode::Tab, KeyModifiers::NONE));
        assert!(!caps.captures_key(KeyCode::Esc, KeyModifiers::NONE));
    }

    #[test]
    fn tab_capture_requires_no_modifiers() {
        let caps = InputCaps {
            capture_tab: true,
            capture_esc: false,
        };
        assert!(caps.captures_key(KeyCode::Tab, KeyModifiers::NONE));
        assert!(!caps.captures_key(KeyCode::Tab, KeyModifiers::CONTROL));
    }
}
