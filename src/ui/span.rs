use crate::ui::style::Style;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrap {
    Yes,
    No,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    text: String,
    style: Style,
    wrap: Wrap,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
            wrap: Wrap::Yes,
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            wrap: Wrap::Yes,
        }
    }

    /// A span carrying only a line break; the layout starts a new line for it.
    pub fn line_break() -> Self {
        Self::new("\n")
    }

    pub fn no_wrap(mut self) -> Self {
        self.wrap = Wrap::No;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    pub fn is_line_break(&self) -> bool {
        self.text == "\n"
    }

    pub fn width(&self) -> usize {
        if self.is_line_break() {
            0
        } else {
            self.text.width()
        }
    }

    /// Splits at a display-width boundary, keeping the style on both halves.
    pub fn split_at_width(self, width: usize) -> (Span, Option<Span>) {
        let mut head = String::new();
        let mut head_width = 0usize;
        let mut split_byte = self.text.len();

        for (idx, ch) in self.text.char_indices() {
            let ch_width = ch.to_string().width();
            if head_width + ch_width > width {
                split_byte = idx;
                break;
            }
            head.push(ch);
            head_width += ch_width;
        }

        if split_byte == self.text.len() {
            return (self, None);
        }

        let tail = self.text[split_byte..].to_string();
        let style = self.style;
        let wrap = self.wrap;
        let head_span = Span {
            text: head,
            style,
            wrap,
        };
        let tail_span = Span {
            text: tail,
            style,
            wrap,
        };
        (head_span, Some(tail_span))
    }
}

pub type SpanLine = Vec<Span>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_style() {
        let style = Style::new().with_bold();
        let (head, tail) = Span::styled("abcdef", style).split_at_width(4);
        assert_eq!(head.text(), "abcd");
        let tail = tail.expect("tail expected");
        assert_eq!(tail.text(), "ef");
        assert_eq!(tail.style(), style);
    }

    #[test]
    fn split_within_width_returns_whole() {
        let (head, tail) = Span::new("abc").split_at_width(5);
        assert_eq!(head.text(), "abc");
        assert!(tail.is_none());
    }

    #[test]
    fn line_break_has_no_width() {
        assert_eq!(Span::line_break().width(), 0);
        assert!(Span::line_break().is_line_break());
    }
}
