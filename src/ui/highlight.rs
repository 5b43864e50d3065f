use crate::ui::span::Span;
use crate::ui::style::Style;

/// Splits `text` into spans so the char ranges in `highlights` carry the
/// merged highlight style. Ranges are (start, end) char indices.
pub fn render_text_spans(
    text: &str,
    highlights: &[(usize, usize)],
    base_style: Style,
    highlight_style: Style,
) -> Vec<Span> {
    if highlights.is_empty() {
        return vec![Span::styled(text.to_string(), base_style).no_wrap()];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sorted = highlights.to_vec();
    sorted.sort_unstable_by(|left, right| left.0.cmp(&right.0).then(left.1.cmp(&right.1)));

    let mut spans = Vec::<Span>::new();
    let mut cursor = 0usize;
    for (start, end) in sorted {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > cursor {
            let plain: String = chars[cursor..start].iter().collect();
            spans.push(Span::styled(plain, base_style).no_wrap());
        }
        if end > start {
            let highlighted: String = chars[start..end].iter().collect();
            spans.push(Span::styled(highlighted, base_style.merge(highlight_style)).no_wrap());
        }
        cursor = end.max(cursor);
    }
    if cursor < chars.len() {
        let tail: String = chars[cursor..].iter().collect();
        spans.push(Span::styled(tail, base_style).no_wrap());
    }
    if spans.is_empty() {
        spans.push(Span::styled(text.to_string(), base_style).no_wrap());
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::style::{Color, Style};

    #[test]
    fn splits_around_single_range() {
        let bold = Style::new().with_bold();
        let spans = render_text_spans("Germany", &[(0, 3)], Style::default(), bold);
        let texts: Vec<&str> = spans.iter().map(|s| s.text()).collect();
        assert_eq!(texts, vec!["Ger", "many"]);
        assert!(spans[0].style().bold);
        assert!(!spans[1].style().bold);
    }

    #[test]
    fn no_ranges_yields_single_plain_span() {
        let spans = render_text_spans("France", &[], Style::default(), Style::new().with_bold());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text(), "France");
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let hl = Style::new().with_color(Color::Cyan);
        let spans = render_text_spans("Mali", &[(2, 99)], Style::default(), hl);
        let texts: Vec<&str> = spans.iter().map(|s| s.text()).collect();
        assert_eq!(texts, vec!["Ma", "li"]);
    }
}
