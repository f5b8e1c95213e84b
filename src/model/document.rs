//! Post document - the append-only text buffer with a scrollback limit

use std::borrow::Cow;

use ropey::Rope;

use super::selection::Position;

/// The post window's text buffer
#[derive(Debug, Clone, Default)]
pub struct PostDocument {
    /// The text buffer
    pub buffer: Rope,
    /// Maximum line count; 0 keeps everything
    max_lines: usize,
}

impl PostDocument {
    /// Create an empty document with a scrollback limit
    pub fn new(max_lines: usize) -> Self {
        Self {
            buffer: Rope::new(),
            max_lines,
        }
    }

    /// Create a document holding `text` (no scrollback limit)
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            max_lines: 0,
        }
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Change the scrollback limit, trimming at once
    ///
    /// Returns the number of lines removed from the top.
    pub fn set_max_lines(&mut self, max_lines: usize) -> usize {
        self.max_lines = max_lines;
        self.trim()
    }

    /// Number of lines, counting the empty line after a trailing newline
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    /// Append text at the end and enforce the scrollback limit
    ///
    /// Returns the number of lines removed from the top.
    pub fn append(&mut self, text: &str) -> usize {
        let end = self.buffer.len_chars();
        self.buffer.insert(end, text);
        self.trim()
    }

    pub fn clear(&mut self) {
        self.buffer = Rope::new();
    }

    fn trim(&mut self) -> usize {
        let count = self.line_count();
        if self.max_lines == 0 || count <= self.max_lines {
            return 0;
        }
        let removed = count - self.max_lines;
        let end = self.buffer.line_to_char(removed);
        self.buffer.remove(0..end);
        tracing::trace!(removed, "Trimmed post window scrollback");
        removed
    }

    /// Line content without its line ending
    pub fn line_text(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }
        let line = self.buffer.line(line_idx);
        let len = line.len_chars() - self.line_ending_len(line_idx);
        let slice = line.slice(..len);
        Some(match slice.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(slice.to_string()),
        })
    }

    /// Number of characters on a line, excluding the line ending
    pub fn line_length(&self, line_idx: usize) -> usize {
        if line_idx >= self.buffer.len_lines() {
            return 0;
        }
        self.buffer.line(line_idx).len_chars() - self.line_ending_len(line_idx)
    }

    fn line_ending_len(&self, line_idx: usize) -> usize {
        let line = self.buffer.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2
            } else {
                1
            }
        } else {
            0
        }
    }

    /// Clamp a position to the document
    pub fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        Position::new(line, pos.column.min(self.line_length(line)))
    }

    /// Convert a (clamped) position to a char offset in the buffer
    pub fn position_to_offset(&self, pos: Position) -> usize {
        let pos = self.clamp(pos);
        self.buffer.line_to_char(pos.line) + pos.column
    }

    /// Text between two positions, in document order
    pub fn text_between(&self, a: Position, b: Position) -> String {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let start = self.position_to_offset(start);
        let end = self.position_to_offset(end);
        self.buffer.slice(start..end).to_string()
    }

    /// The whole buffer as a string
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }
}
