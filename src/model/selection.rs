//! Cursor position, selection and viewport of the post window

/// A position in the document (line and column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number in characters (0-indexed)
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Shift up after `removed` lines were dropped from the top
    ///
    /// Positions inside the dropped lines collapse to the document start.
    pub fn shifted_up(self, removed: usize) -> Self {
        if self.line < removed {
            Position::default()
        } else {
            Position::new(self.line - removed, self.column)
        }
    }
}

/// A text selection with anchor (start) and head (cursor end)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: Position,
    /// Where the cursor is (moving point)
    pub head: Position,
}

impl Selection {
    /// Create a new empty selection at a position
    pub fn new(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn from_anchor_head(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// Check if selection is empty (cursor without selection)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// The earlier of anchor and head
    pub fn start(&self) -> Position {
        self.anchor.min(self.head)
    }

    /// The later of anchor and head
    pub fn end(&self) -> Position {
        self.anchor.max(self.head)
    }

    pub fn shifted_up(self, removed: usize) -> Self {
        Self {
            anchor: self.anchor.shifted_up(removed),
            head: self.head.shifted_up(removed),
        }
    }
}

/// The visible window onto the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
}

impl Viewport {
    pub fn new(visible_lines: usize) -> Self {
        Self {
            top_line: 0,
            visible_lines,
        }
    }

    /// Largest top line that still fills the view
    pub fn max_top_line(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.visible_lines.max(1))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(25)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_order() {
        let sel = Selection::from_anchor_head(Position::new(2, 1), Position::new(0, 4));
        assert_eq!(sel.start(), Position::new(0, 4));
        assert_eq!(sel.end(), Position::new(2, 1));
        assert!(!sel.is_empty());
    }

    #[test]
    fn test_shifted_up() {
        assert_eq!(Position::new(5, 3).shifted_up(2), Position::new(3, 3));
        assert_eq!(Position::new(1, 3).shifted_up(2), Position::new(0, 0));
    }

    #[test]
    fn test_max_top_line() {
        let viewport = Viewport::new(10);
        assert_eq!(viewport.max_top_line(5), 0);
        assert_eq!(viewport.max_top_line(30), 20);
        assert_eq!(Viewport::new(0).max_top_line(3), 2);
    }
}
