use crate::core::node::Node;
use crate::core::step::Step;
use crate::terminal::Terminal;
use crate::ui::layout::Layout;
use crate::ui::span::{Span, SpanLine};
use crate::ui::theme::Theme;
use std::io;
use unicode_width::UnicodeWidthStr;

const FOCUS_MARKER: &str = "› ";
const BLUR_MARKER: &str = "  ";

/// Draws the step in place, keeping track of the rows it owns so
/// successive frames redraw over the same region.
pub struct Renderer {
    origin_row: Option<u16>,
    last_height: usize,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            origin_row: None,
            last_height: 0,
        }
    }

    pub fn render(
        &mut self,
        step: &Step,
        theme: &Theme,
        terminal: &mut Terminal,
    ) -> io::Result<()> {
        let size = terminal.refresh_size()?;
        let rows = build_rows(step, theme);
        let (frame, cursor) = Layout::new().compose(rows, size.width);
        let height = frame.height();

        let start = self.ensure_region(terminal, height)?;

        terminal.queue_hide_cursor()?;
        terminal.queue_move_cursor(0, start)?;
        terminal.queue_clear_down()?;
        terminal.render_frame(&frame)?;

        if let Some((col, row)) = cursor {
            terminal.queue_move_cursor(col as u16, start + row as u16)?;
            terminal.queue_show_cursor()?;
        }

        terminal.flush()?;
        self.last_height = height;
        Ok(())
    }

    pub fn move_to_end(&self, terminal: &mut Terminal) -> io::Result<()> {
        if let Some(origin) = self.origin_row {
            terminal.queue_move_cursor(0, origin + self.last_height as u16)?;
            terminal.flush()?;
        }
        Ok(())
    }

    /// Reserves enough rows for the frame, scrolling when the region
    /// grows past the bottom of the screen, and returns the first row.
    fn ensure_region(&mut self, terminal: &mut Terminal, height: usize) -> io::Result<u16> {
        match self.origin_row {
            None => {
                let pos = terminal.refresh_cursor_position()?;
                terminal.queue_move_cursor(0, pos.y)?;
                terminal.flush()?;
                for _ in 0..height {
                    terminal.write_newline()?;
                }
                terminal.flush()?;

                let pos = terminal.refresh_cursor_position()?;
                let start = pos.y.saturating_sub(height as u16);
                self.origin_row = Some(start);
                Ok(start)
            }
            Some(origin) if height > self.last_height => {
                terminal.queue_move_cursor(0, origin + self.last_height as u16)?;
                terminal.flush()?;
                for _ in 0..height - self.last_height {
                    terminal.write_newline()?;
                }
                terminal.flush()?;

                let pos = terminal.refresh_cursor_position()?;
                let start = pos.y.saturating_sub(height as u16).min(origin);
                self.origin_row = Some(start);
                Ok(start)
            }
            Some(origin) => Ok(origin),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_rows(step: &Step, theme: &Theme) -> Vec<(SpanLine, Option<usize>)> {
    let mut rows = Vec::new();

    rows.push((
        vec![Span::styled(step.prompt.clone(), theme.prompt)],
        None,
    ));
    if let Some(hint) = &step.hint {
        rows.push((vec![Span::styled(hint.clone(), theme.hint)], None));
    }

    for node in &step.nodes {
        match node {
            Node::Text(text) => {
                rows.push((vec![Span::new(text.clone())], None));
            }
            Node::Input(input) => {
                let focused = input.is_focused();

                let mut spans = Vec::new();
                if focused {
                    spans.push(Span::styled(FOCUS_MARKER, theme.focused).no_wrap());
                } else {
                    spans.push(Span::new(BLUR_MARKER).no_wrap());
                }

                let label = format!("{}: ", input.label());
                let label_width = label.width();
                let label_style = if focused { theme.focused } else { theme.label };
                spans.push(Span::styled(label, label_style).no_wrap());
                spans.extend(input.render_content(theme));

                let cursor_offset = if focused {
                    input
                        .cursor_offset_in_content()
                        .map(|offset| FOCUS_MARKER.width() + label_width + offset)
                } else {
                    None
                };

                rows.push((spans, cursor_offset));

                if let Some(error) = input.error() {
                    rows.push((
                        vec![Span::styled(format!("  ! {}", error), theme.error)],
                        None,
                    ));
                }
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::form_engine::FormEngine;
    use crate::text_input::TextInput;

    fn step() -> Step {
        Step {
            prompt: "Fill in your profile".to_string(),
            hint: Some("Tab moves between fields".to_string()),
            nodes: vec![
                Node::input(TextInput::new("name", "Name").with_value("Mike")),
                Node::input(TextInput::new("email", "Email")),
            ],
        }
    }

    fn row_text(row: &(SpanLine, Option<usize>)) -> String {
        row.0.iter().map(Span::text).collect()
    }

    #[test]
    fn rows_start_with_prompt_and_hint() {
        let step = step();
        let rows = build_rows(&step, &Theme::default_theme());
        assert_eq!(row_text(&rows[0]), "Fill in your profile");
        assert_eq!(row_text(&rows[1]), "Tab moves between fields");
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn focused_input_gets_marker_and_cursor() {
        let mut step = step();
        let _engine = FormEngine::from_nodes(&mut step.nodes);
        let rows = build_rows(&step, &Theme::default_theme());

        assert_eq!(row_text(&rows[2]), "› Name: Mike");
        // marker (2) + "Name: " (6) + cursor after "Mike" (4)
        assert_eq!(rows[2].1, Some(12));
        assert_eq!(row_text(&rows[3]), "  Email: ");
        assert_eq!(rows[3].1, None);
    }

    #[test]
    fn error_line_follows_its_input() {
        let mut step = step();
        if let Some(input) = step.nodes[1].as_input_mut() {
            input.set_error(Some("Please enter a valid email address".to_string()));
        }
        let rows = build_rows(&step, &Theme::default_theme());
        assert_eq!(
            row_text(rows.last().unwrap()),
            "  ! Please enter a valid email address"
        );
    }
}
