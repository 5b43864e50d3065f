use crate::input::{Input, InputBase, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use crate::validators::Validator;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentKind {
    Day,
    Month,
    Year,
}

impl SegmentKind {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "DD" => Some(SegmentKind::Day),
            "MM" => Some(SegmentKind::Month),
            "YYYY" => Some(SegmentKind::Year),
            _ => None,
        }
    }

    fn min_value(self) -> u32 {
        match self {
            SegmentKind::Year => 1900,
            SegmentKind::Month | SegmentKind::Day => 1,
        }
    }

    fn max_value(self) -> u32 {
        match self {
            SegmentKind::Year => 2100,
            SegmentKind::Month => 12,
            SegmentKind::Day => 31,
        }
    }

    fn length(self) -> usize {
        match self {
            SegmentKind::Year => 4,
            _ => 2,
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SegmentKind::Day => "dd",
            SegmentKind::Month => "mm",
            SegmentKind::Year => "yyyy",
        }
    }
}

#[derive(Debug, Clone)]
struct Segment {
    kind: SegmentKind,
    value: String,
}

impl Segment {
    fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn is_complete(&self) -> bool {
        self.value.len() == self.kind.length()
    }

    fn numeric_value(&self) -> u32 {
        self.value.parse().unwrap_or(0)
    }

    fn increment(&mut self) {
        let current = self.numeric_value();
        let (min, max) = (self.kind.min_value(), self.kind.max_value());
        let next = if current >= max || current < min {
            min
        } else {
            current + 1
        };
        self.value = format!("{:0width$}", next, width = self.kind.length());
    }

    fn decrement(&mut self) {
        let current = self.numeric_value();
        let (min, max) = (self.kind.min_value(), self.kind.max_value());
        let prev = if current <= min || current == 0 {
            max
        } else {
            current - 1
        };
        self.value = format!("{:0width$}", prev, width = self.kind.length());
    }

    fn insert_digit(&mut self, digit: char) {
        if self.value.len() >= self.kind.length() {
            self.value = digit.to_string();
            return;
        }
        self.value.push(digit);
        if let Ok(val) = self.value.parse::<u32>() {
            if val > self.kind.max_value() {
                self.value = digit.to_string();
            }
        }
    }

    fn delete_digit(&mut self) {
        self.value.pop();
    }

    fn display_string(&self) -> String {
        let len = self.kind.length();
        if self.value.is_empty() {
            self.kind.placeholder().to_string()
        } else if self.value.len() < len {
            format!("{}{}", self.value, &self.kind.placeholder()[self.value.len()..len])
        } else {
            self.value.clone()
        }
    }

    fn normalize(&mut self) {
        if self.value.is_empty() || self.value.len() >= self.kind.length() {
            return;
        }
        if let Ok(val) = self.value.parse::<u32>() {
            self.value = format!("{:0width$}", val, width = self.kind.length());
        }
    }
}

/// Segmented date input driven by a format string such as "DD/MM/YYYY".
/// Left/Right move between segments, Up/Down step the focused one.
pub struct DateInput {
    base: InputBase,
    segments: Vec<Segment>,
    separators: Vec<String>,
    focused_segment: usize,
}

impl DateInput {
    pub fn new(id: impl Into<String>, label: impl Into<String>, format: &str) -> Self {
        let (segments, separators) = Self::parse_format(format);
        Self {
            base: InputBase::new(id, label),
            segments,
            separators,
            focused_segment: 0,
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    fn parse_format(format: &str) -> (Vec<Segment>, Vec<String>) {
        let mut segments = Vec::new();
        let mut separators = Vec::new();
        let mut current_sep = String::new();
        let mut chars = format.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_alphabetic() {
                let mut token = String::from(ch);
                while chars.peek() == Some(&ch) {
                    token.push(ch);
                    chars.next();
                }
                if let Some(kind) = SegmentKind::from_token(&token) {
                    separators.push(std::mem::take(&mut current_sep));
                    segments.push(Segment::new(kind));
                } else {
                    current_sep.push_str(&token);
                }
            } else {
                current_sep.push(ch);
            }
        }
        separators.push(current_sep);
        (segments, separators)
    }

    fn format_value(&self) -> String {
        let mut result = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            result.push_str(&self.separators[i]);
            result.push_str(&segment.value);
        }
        result.push_str(&self.separators[self.segments.len()]);
        result
    }

    fn is_complete_internal(&self) -> bool {
        self.segments.iter().all(|s| s.is_complete())
    }

    fn move_next(&mut self) -> bool {
        if let Some(segment) = self.segments.get_mut(self.focused_segment) {
            segment.normalize();
        }
        if self.focused_segment + 1 < self.segments.len() {
            self.focused_segment += 1;
            true
        } else {
            false
        }
    }

    fn move_prev(&mut self) -> bool {
        if self.focused_segment > 0 {
            self.focused_segment -= 1;
            true
        } else {
            false
        }
    }
}

impl Input for DateInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        if self.is_complete_internal() {
            self.format_value()
        } else {
            String::new()
        }
    }

    fn set_value(&mut self, value: String) {
        if value.is_empty() {
            for segment in &mut self.segments {
                segment.value.clear();
            }
            return;
        }

        let mut pos = 0usize;
        let mut parsed: Vec<String> = Vec::with_capacity(self.segments.len());
        for (i, segment) in self.segments.iter().enumerate() {
            let sep = self.separators[i].as_str();
            if !value[pos..].starts_with(sep) {
                return;
            }
            pos += sep.len();

            let len = segment.kind.length();
            if pos + len > value.len() {
                return;
            }
            let part = &value[pos..pos + len];
            if !part.chars().all(|c| c.is_ascii_digit()) {
                return;
            }
            parsed.push(part.to_string());
            pos += len;
        }

        for (segment, part) in self.segments.iter_mut().zip(parsed) {
            segment.value = part;
        }
    }

    fn is_complete(&self) -> bool {
        // All segments empty counts as untouched, not half-entered.
        self.segments.iter().all(|s| s.is_empty()) || self.is_complete_internal()
    }

    fn validate_internal(&self) -> Result<(), String> {
        for segment in &self.segments {
            if segment.is_complete() {
                let val = segment.numeric_value();
                if val < segment.kind.min_value() || val > segment.kind.max_value() {
                    return Err("Invalid date".to_string());
                }
            }
        }
        Ok(())
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
        if !focused {
            for segment in &mut self.segments {
                segment.normalize();
            }
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
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if let Some(segment) = self.segments.get_mut(self.focused_segment) {
                    segment.insert_digit(ch);
                    if segment.is_complete() {
                        self.move_next();
                    }
                    self.base.error = None;
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Char('/') => {
                if self.move_next() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Backspace => {
                if let Some(segment) = self.segments.get_mut(self.focused_segment) {
                    if segment.is_empty() {
                        self.move_prev();
                    } else {
                        segment.delete_digit();
                    }
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Left => {
                if self.move_prev() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Right => {
                if self.move_next() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Up => {
                if let Some(segment) = self.segments.get_mut(self.focused_segment) {
                    segment.increment();
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Down => {
                if let Some(segment) = self.segments.get_mut(self.focused_segment) {
                    segment.decrement();
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Enter => {
                if let Some(segment) = self.segments.get_mut(self.focused_segment) {
                    segment.normalize();
                }
                KeyResult::Submit
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = Vec::new();

        for (i, segment) in self.segments.iter().enumerate() {
            if !self.separators[i].is_empty() {
                spans.push(Span::new(self.separators[i].clone()).no_wrap());
            }

            let mut style = if segment.is_empty() {
                theme.placeholder
            } else {
                Style::default()
            };
            if i == self.focused_segment && self.base.focused {
                style = style.merge(theme.focused);
            }

            spans.push(Span::styled(segment.display_string(), style).no_wrap());
        }

        let trailing = &self.separators[self.segments.len()];
        if !trailing.is_empty() {
            spans.push(Span::new(trailing.clone()).no_wrap());
        }

        spans
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        let mut offset = 0;
        for i in 0..self.focused_segment {
            offset += self.separators[i].width();
            offset += self.segments[i].display_string().width();
        }
        offset += self.separators[self.focused_segment].width();
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> DateInput {
        DateInput::new("start_date", "Start Date", "DD/MM/YYYY")
    }

    fn type_str(input: &mut DateInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn parses_format_into_segments() {
        let input = date();
        assert_eq!(input.segments.len(), 3);
        assert_eq!(input.separators, vec!["", "/", "/", ""]);
    }

    #[test]
    fn typing_fills_segments_and_advances() {
        let mut input = date();
        type_str(&mut input, "24061993");
        assert_eq!(input.value(), "24/06/1993");
        assert!(input.is_complete());
    }

    #[test]
    fn partial_entry_has_no_value() {
        let mut input = date();
        type_str(&mut input, "24");
        assert_eq!(input.value(), "");
        assert!(!input.is_complete());
    }

    #[test]
    fn untouched_input_counts_as_complete() {
        let input = date();
        assert!(input.is_complete());
    }

    #[test]
    fn overflowing_digit_restarts_the_segment() {
        let mut input = date();
        // Month segment caps at 12; "19" overflows and keeps the "9".
        type_str(&mut input, "01");
        type_str(&mut input, "19");
        assert_eq!(input.segments[1].value, "9");
    }

    #[test]
    fn up_steps_within_bounds() {
        let mut input = date();
        input.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(input.segments[0].value, "01");
        input.handle_key(KeyCode::Down, KeyModifiers::NONE);
        input.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(input.segments[0].value, "30");
    }

    #[test]
    fn set_value_round_trips() {
        let mut input = date();
        input.set_value("24/06/1993".to_string());
        assert_eq!(input.value(), "24/06/1993");
        input.set_value(String::new());
        assert_eq!(input.value(), "");
    }

    #[test]
    fn set_value_rejects_malformed_strings() {
        let mut input = date();
        input.set_value("24-06-1993".to_string());
        assert_eq!(input.value(), "");
        input.set_value("2a/06/1993".to_string());
        assert_eq!(input.value(), "");
    }
}
