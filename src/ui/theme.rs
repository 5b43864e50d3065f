use crate::ui::style::{Color, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub prompt: Style,
    pub hint: Style,
    pub label: Style,
    pub focused: Style,
    pub placeholder: Style,
    pub error: Style,
    pub highlight: Style,
    pub selection: Style,
    pub reward: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            prompt: Style::new().with_bold(),
            hint: Style::new().with_color(Color::DarkGrey),
            label: Style::new(),
            focused: Style::new().with_color(Color::Cyan).with_bold(),
            placeholder: Style::new().with_color(Color::DarkGrey),
            error: Style::new().with_color(Color::Red).with_bold(),
            highlight: Style::new().with_color(Color::Cyan).with_bold(),
            selection: Style::new().with_color(Color::Cyan),
            reward: Style::new().with_color(Color::Yellow),
        }
    }
}
