use crate::ui::frame::Frame;
use crate::ui::span::{Span, SpanLine, Wrap};

/// Composes logical span rows into terminal lines, wrapping at the given
/// width and resolving one logical cursor offset into a (col, row) cell.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    margin: usize,
}

impl Layout {
    pub fn new() -> Self {
        Self { margin: 0 }
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn compose<I>(&self, rows: I, width: u16) -> (Frame, Option<(usize, usize)>)
    where
        I: IntoIterator<Item = (SpanLine, Option<usize>)>,
    {
        let mut ctx = LayoutContext::new(width as usize, self.margin);

        for (spans, cursor_offset) in rows {
            ctx.begin_row(cursor_offset);
            for span in spans {
                if span.is_line_break() {
                    ctx.new_line();
                    continue;
                }
                ctx.place_span(span);
            }
            ctx.end_row();
        }

        ctx.finish()
    }
}

struct LayoutContext {
    frame: Frame,
    width: usize,
    current_width: usize,
    pending_cursor: Option<usize>,
    cursor: Option<(usize, usize)>,
}

impl LayoutContext {
    fn new(width: usize, margin: usize) -> Self {
        let mut frame = Frame::new();
        frame.ensure_line();
        Self {
            frame,
            width: width.saturating_sub(margin),
            current_width: 0,
            pending_cursor: None,
            cursor: None,
        }
    }

    fn begin_row(&mut self, cursor_offset: Option<usize>) {
        if self.cursor.is_none() {
            self.pending_cursor = cursor_offset;
        }
    }

    fn end_row(&mut self) {
        if self.pending_cursor.take().is_some() {
            // Offset past the row's content: park the cursor at the row end.
            self.record_cursor(0);
        }
        self.new_line();
    }

    fn place_span(&mut self, span: Span) {
        if self.width == 0 || span.width() == 0 {
            return;
        }
        match span.wrap() {
            Wrap::No => self.place_no_wrap(span),
            Wrap::Yes => self.place_wrap(span),
        }
    }

    fn place_no_wrap(&mut self, span: Span) {
        let span_width = span.width();
        if self.current_width > 0 && span_width > self.available_width() {
            self.new_line();
        }

        let (head, _) = if span_width > self.width {
            span.split_at_width(self.width)
        } else {
            (span, None)
        };

        self.push_span(head);
    }

    fn place_wrap(&mut self, mut span: Span) {
        while span.width() > 0 {
            if self.current_width >= self.width {
                self.new_line();
            }

            let available = self.available_width();
            if span.width() <= available {
                self.push_span(span);
                return;
            }

            let (head, tail) = span.split_at_width(available);
            if head.width() > 0 {
                self.push_span(head);
            }
            self.new_line();

            match tail {
                Some(rest) => span = rest,
                None => return,
            }
        }
    }

    fn push_span(&mut self, span: Span) {
        let w = span.width();
        if let Some(remaining) = self.pending_cursor {
            if remaining <= w {
                self.record_cursor(remaining);
            } else {
                self.pending_cursor = Some(remaining - w);
            }
        }
        self.frame.current_line_mut().push(span);
        self.current_width += w;
    }

    fn record_cursor(&mut self, ahead: usize) {
        let row = self.frame.height().saturating_sub(1);
        self.cursor = Some((self.current_width + ahead, row));
        self.pending_cursor = None;
    }

    fn new_line(&mut self) {
        self.frame.new_line();
        self.current_width = 0;
    }

    fn available_width(&self) -> usize {
        self.width.saturating_sub(self.current_width)
    }

    fn finish(mut self) -> (Frame, Option<(usize, usize)>) {
        self.frame.trim_trailing_empty();
        (self.frame, self.cursor)
    }
}
