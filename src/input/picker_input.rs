use crate::core::search::autocomplete::suggest;
use crate::core::search::matcher::{
    MatcherConfig, ScoredCandidate, best_alignment, exact_match, rank,
};
use crate::input::{Input, InputBase, InputCaps, KeyResult, NodeId};
use crate::terminal::{KeyCode, KeyModifiers};
use crate::ui::highlight::render_text_spans;
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;
use crate::validators::Validator;
use unicode_width::UnicodeWidthChar;

const DEFAULT_LIMIT: usize = 3;

/// Catalog picker with incremental fuzzy search. Every keystroke
/// re-ranks the catalog; typing a catalog entry outright commits it
/// directly and bypasses the suggestion list.
pub struct PickerInput {
    base: InputBase,
    catalog: Vec<String>,
    config: MatcherConfig,
    limit: usize,
    query: String,
    cursor_pos: usize,
    suggestions: Vec<ScoredCandidate>,
    selected: usize,
    committed: Option<usize>,
    list_hidden: bool,
}

impl PickerInput {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        catalog: Vec<String>,
    ) -> Self {
        Self {
            base: InputBase::new(id, label),
            catalog,
            config: MatcherConfig::default(),
            limit: DEFAULT_LIMIT,
            query: String::new(),
            cursor_pos: 0,
            suggestions: Vec::new(),
            selected: 0,
            committed: None,
            list_hidden: false,
        }
    }

    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.base = self.base.with_validator(validator);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestion_labels(&self) -> Vec<&str> {
        self.suggestions
            .iter()
            .filter_map(|s| self.catalog.get(s.index))
            .map(String::as_str)
            .collect()
    }

    fn list_visible(&self) -> bool {
        self.base.focused
            && !self.list_hidden
            && self.committed.is_none()
            && !self.query.is_empty()
            && !self.suggestions.is_empty()
    }

    /// Recomputes the ranking after any query edit. An exact catalog hit
    /// short-circuits the list entirely.
    fn refresh(&mut self) {
        self.list_hidden = false;
        self.selected = 0;

        if let Some(index) = exact_match(&self.query, &self.catalog) {
            self.committed = Some(index);
            self.suggestions.clear();
            return;
        }

        self.committed = None;
        if self.query.is_empty() {
            self.suggestions.clear();
        } else {
            self.suggestions = rank(&self.query, &self.catalog, self.limit, self.config);
        }
    }

    fn commit_selected(&mut self) {
        let Some(candidate) = self.suggestions.get(self.selected) else {
            return;
        };
        let index = candidate.index;
        let Some(label) = self.catalog.get(index) else {
            return;
        };
        self.query = label.clone();
        self.cursor_pos = self.query.chars().count();
        self.committed = Some(index);
        self.suggestions.clear();
        self.base.error = None;
    }

    fn complete_from_suggestion(&mut self) -> bool {
        let Some(completion) = suggest(&self.query, &self.suggestions, &self.catalog) else {
            return false;
        };
        self.query = completion;
        self.cursor_pos = self.query.chars().count();
        self.refresh();
        true
    }

    fn insert_char(&mut self, ch: char) {
        let byte_pos = self
            .query
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len());
        self.query.insert(byte_pos, ch);
        self.cursor_pos += 1;
        self.base.error = None;
        self.refresh();
    }

    fn backspace(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let byte_pos = self
            .query
            .char_indices()
            .nth(self.cursor_pos - 1)
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.query.remove(byte_pos);
        self.cursor_pos -= 1;
        self.base.error = None;
        self.refresh();
    }

    fn move_selection(&mut self, direction: isize) {
        if self.suggestions.is_empty() {
            return;
        }
        let len = self.suggestions.len() as isize;
        let current = self.selected as isize;
        self.selected = ((current + direction + len) % len) as usize;
    }
}

impl Input for PickerInput {
    fn id(&self) -> &NodeId {
        &self.base.id
    }

    fn label(&self) -> &str {
        &self.base.label
    }

    fn value(&self) -> String {
        self.committed
            .and_then(|i| self.catalog.get(i))
            .cloned()
            .unwrap_or_default()
    }

    fn set_value(&mut self, value: String) {
        if value.is_empty() {
            self.query.clear();
            self.cursor_pos = 0;
            self.refresh();
            return;
        }
        if let Some(index) = exact_match(&value, &self.catalog) {
            self.query = self.catalog[index].clone();
            self.cursor_pos = self.query.chars().count();
            self.committed = Some(index);
            self.suggestions.clear();
        }
    }

    fn capabilities(&self) -> InputCaps {
        InputCaps {
            capture_tab: self.list_visible(),
            capture_esc: self.list_visible(),
        }
    }

    fn is_focused(&self) -> bool {
        self.base.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.base.focused = focused;
        if !focused {
            self.list_hidden = false;
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
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                KeyResult::Handled
            }
            KeyCode::Backspace => {
                self.backspace();
                KeyResult::Handled
            }
            KeyCode::Up if self.list_visible() => {
                self.move_selection(-1);
                KeyResult::Handled
            }
            KeyCode::Down if self.list_visible() => {
                self.move_selection(1);
                KeyResult::Handled
            }
            KeyCode::Tab if self.list_visible() => {
                if self.complete_from_suggestion() {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
            KeyCode::Esc if self.list_visible() => {
                self.list_hidden = true;
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.cursor_pos = self.cursor_pos.saturating_sub(1);
                KeyResult::Handled
            }
            KeyCode::Right => {
                if self.cursor_pos < self.query.chars().count() {
                    self.cursor_pos += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                KeyResult::Handled
            }
            KeyCode::End => {
                self.cursor_pos = self.query.chars().count();
                KeyResult::Handled
            }
            KeyCode::Enter => {
                if self.list_visible() {
                    self.commit_selected();
                    KeyResult::Handled
                } else {
                    KeyResult::Submit
                }
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn render_content(&self, theme: &Theme) -> Vec<Span> {
        let mut spans = vec![Span::new(&self.query).no_wrap()];

        if self.committed.is_some() {
            spans.push(Span::styled(" ✓", theme.selection).no_wrap());
        }

        if self.list_visible() {
            for (row, candidate) in self.suggestions.iter().enumerate() {
                let Some(label) = self.catalog.get(candidate.index) else {
                    continue;
                };
                let selected = row == self.selected;
                let marker = if selected { "  ▸ " } else { "    " };
                let base = if selected {
                    theme.selection
                } else {
                    Style::default()
                };

                spans.push(Span::line_break());
                spans.push(Span::new(marker).no_wrap());
                let ranges: Vec<(usize, usize)> = best_alignment(&self.query, label)
                    .into_iter()
                    .collect();
                spans.extend(render_text_spans(label, &ranges, base, theme.highlight));
            }
        }

        spans
    }

    fn cursor_offset_in_content(&self) -> Option<usize> {
        Some(
            self.query
                .chars()
                .take(self.cursor_pos)
                .map(|c| c.width().unwrap_or(0))
                .sum(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries() -> Vec<String> {
        ["France", "Germany", "Greece", "Argentina", "Spain"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn picker() -> PickerInput {
        let mut input = PickerInput::new("country", "Country", countries());
        input.set_focused(true);
        input
    }

    fn type_str(input: &mut PickerInput, text: &str) {
        for ch in text.chars() {
            input.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_surfaces_ranked_suggestions() {
        let mut input = picker();
        type_str(&mut input, "ger");
        let labels = input.suggestion_labels();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0], "Germany");
    }

    #[test]
    fn suggestions_update_per_keystroke() {
        let mut input = picker();
        type_str(&mut input, "g");
        let first = input.suggestion_labels().first().copied().map(String::from);
        type_str(&mut input, "re");
        assert_eq!(input.suggestion_labels()[0], "Greece");
        // "g" alone favored Germany or Greece; the refined query must
        // have re-ranked rather than filtered in place.
        assert!(first.is_some());
    }

    #[test]
    fn enter_commits_highlighted_suggestion() {
        let mut input = picker();
        type_str(&mut input, "ger");
        input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(input.value(), "Germany");
        assert_eq!(input.query(), "Germany");
    }

    #[test]
    fn up_down_move_the_highlight() {
        let mut input = picker();
        type_str(&mut input, "ger");
        input.handle_key(KeyCode::Down, KeyModifiers::NONE);
        input.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_ne!(input.value(), "Germany");
        assert!(!input.value().is_empty());
    }

    #[test]
    fn exact_query_short_circuits_the_list() {
        let mut input = picker();
        type_str(&mut input, "france");
        assert_eq!(input.value(), "France");
        assert!(input.suggestion_labels().is_empty());
        assert_eq!(input.query(), "france");
    }

    #[test]
    fn editing_a_committed_value_reopens_the_search() {
        let mut input = picker();
        type_str(&mut input, "france");
        assert_eq!(input.value(), "France");
        type_str(&mut input, "x");
        assert_eq!(input.value(), "");
        assert!(!input.suggestion_labels().is_empty());
    }

    #[test]
    fn tab_completes_to_the_top_prefix_match() {
        let mut input = picker();
        type_str(&mut input, "arg");
        assert!(input.capabilities().captures_key(KeyCode::Tab, KeyModifiers::NONE));
        input.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(input.query(), "Argentina");
        assert_eq!(input.value(), "Argentina");
    }

    #[test]
    fn esc_hides_the_list_until_the_next_edit() {
        let mut input = picker();
        type_str(&mut input, "ger");
        input.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!input.capabilities().captures_key(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            KeyResult::Submit
        );
        type_str(&mut input, "m");
        assert!(!input.suggestion_labels().is_empty());
    }

    #[test]
    fn enter_submits_when_nothing_is_pending() {
        let mut input = picker();
        assert_eq!(
            input.handle_key(KeyCode::Enter, KeyModifiers::NONE),
            KeyResult::Submit
        );
    }
}
