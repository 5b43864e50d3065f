#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    DarkGrey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn merge(self, other: Style) -> Style {
        Style {
            color: other.color.or(self.color),
            background: other.background.or(self.background),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_overlay_color() {
        let base = Style::new().with_color(Color::White).with_dim();
        let overlay = Style::new().with_color(Color::Cyan).with_bold();
        let merged = base.merge(overlay);
        assert_eq!(merged.color, Some(Color::Cyan));
        assert!(merged.bold);
        assert!(merged.dim);
    }

    #[test]
    fn merge_keeps_base_when_overlay_unset() {
        let base = Style::new().with_background(Color::Black);
        let merged = base.merge(Style::new());
        assert_eq!(merged.background, Some(Color::Black));
    }
}
