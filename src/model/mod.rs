//! Post window model - the complete state of the panel
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod selection;

pub use document::PostDocument;
pub use selection::{Position, Selection, Viewport};

use crate::config::PostConfig;
use crate::keymap::{Command, Keybinding, Keymap};
use crate::theme::Palette;
use crate::util::{char_col_to_visual_col, word_at_with, word_range_at};

/// Font family and point size in effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub size: i32,
}

/// Compute a zoomed font size
///
/// Returns `current` unchanged when the result would not be positive.
pub fn apply_zoom(current: i32, steps: i32) -> i32 {
    let new_size = current.saturating_add(steps);
    if new_size <= 0 {
        current
    } else {
        new_size
    }
}

/// The post window state
#[derive(Debug, Clone)]
pub struct PostWindow {
    pub document: PostDocument,
    /// Cursor position (equals `selection.head`)
    pub cursor: Position,
    pub selection: Selection,
    pub viewport: Viewport,
    pub font: FontSpec,
    pub palette: Palette,
    /// Tab stop width in spaces
    pub tab_width: usize,
    pub line_wrap: bool,
    /// Extra characters that belong to a symbol
    pub word_chars: String,
    /// The action table (shortcuts, enabled and checked state)
    pub actions: Keymap,
    /// Keymap bindings that settings overrides are layered on
    bindings: Vec<Keybinding>,
    /// Settings as last applied, with local changes such as line wrap
    pub config: PostConfig,
}

impl PostWindow {
    /// Create the post window and apply settings
    pub fn new(config: PostConfig, bindings: Vec<Keybinding>) -> Self {
        let mut window = Self {
            document: PostDocument::new(config.scrollback),
            cursor: Position::default(),
            selection: Selection::default(),
            viewport: Viewport::default(),
            font: FontSpec {
                family: config.font.family.clone(),
                size: config.font.size,
            },
            palette: Palette::default(),
            tab_width: config.indent_width,
            line_wrap: config.line_wrap,
            word_chars: config.word_chars.clone(),
            actions: Keymap::with_bindings(bindings.clone()),
            bindings,
            config: config.clone(),
        };
        window.apply_settings(&config);
        window
    }

    /// Apply a configuration snapshot
    ///
    /// The snapshot replaces earlier settings entirely: colors that are not
    /// configured fall back to the host defaults, and shortcuts are rebuilt
    /// from the keymap before the overrides are layered on.
    pub fn apply_settings(&mut self, config: &PostConfig) {
        let removed = self.document.set_max_lines(config.scrollback);
        self.shift_up(removed);

        if config.font.size > 0 {
            self.font = FontSpec {
                family: config.font.family.clone(),
                size: config.font.size,
            };
        } else {
            tracing::warn!("Ignoring non-positive font size {}", config.font.size);
            self.font.family = config.font.family.clone();
        }

        self.palette = Palette::from_config(&config.colors);

        self.tab_width = config.indent_width;
        self.word_chars = config.word_chars.clone();
        self.set_line_wrap(config.line_wrap);

        self.actions.clear_shortcuts();
        self.actions.apply_bindings(&self.bindings);
        for (command, shortcut) in config.shortcut_overrides() {
            tracing::debug!(
                "Rebinding {} to {}",
                command,
                shortcut
                    .as_ref()
                    .map(|s| s.display_string())
                    .unwrap_or_else(|| "nothing".to_string())
            );
            self.actions.set_shortcut(command, shortcut);
        }

        self.config = config.clone();
        self.config.line_wrap = self.line_wrap;
    }

    /// Settings to persist: the applied config with the current wrap state
    pub fn stored_settings(&self) -> PostConfig {
        let mut config = self.config.clone();
        config.line_wrap = self.line_wrap;
        config
    }

    pub fn auto_scroll(&self) -> bool {
        self.actions.is_checked(Command::AutoScroll)
    }

    /// Set wrap mode and keep the Wrap Text action and settings in sync
    pub fn set_line_wrap(&mut self, on: bool) {
        self.line_wrap = on;
        self.actions.set_checked(Command::LineWrap, on);
        self.config.line_wrap = on;
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selected_text(&self) -> String {
        self.document
            .text_between(self.selection.anchor, self.selection.head)
    }

    /// Selection verbatim if there is one, otherwise the word at the cursor
    pub fn symbol_under_cursor(&self) -> String {
        if self.has_selection() {
            return self.selected_text();
        }
        let line = self
            .document
            .line_text(self.cursor.line)
            .unwrap_or_default();
        word_at_with(&line, self.cursor.column, &self.word_chars)
    }

    /// Character span of the word at a position on its line
    pub fn word_range(&self, pos: Position) -> (usize, usize) {
        let line = self.document.line_text(pos.line).unwrap_or_default();
        word_range_at(&line, pos.column, &self.word_chars)
    }

    /// Screen column of a position, with tabs expanded to `tab_width`
    pub fn visual_column(&self, pos: Position) -> usize {
        let line = self.document.line_text(pos.line).unwrap_or_default();
        char_col_to_visual_col(&line, pos.column, self.tab_width)
    }

    /// Zoom the font; returns false when the size would not stay positive
    pub fn zoom(&mut self, steps: i32) -> bool {
        let new_size = apply_zoom(self.font.size, steps);
        if new_size == self.font.size {
            return false;
        }
        self.font.size = new_size;
        true
    }

    pub fn max_top_line(&self) -> usize {
        self.viewport.max_top_line(self.document.line_count())
    }

    pub fn is_at_bottom(&self) -> bool {
        self.viewport.top_line >= self.max_top_line()
    }

    pub fn scroll_to_bottom(&mut self) {
        self.viewport.top_line = self.max_top_line();
    }

    /// Scroll by `delta` lines, clamped to the document
    pub fn scroll_by(&mut self, delta: i32) {
        let top = self.viewport.top_line as i64 + delta as i64;
        self.viewport.top_line = top.clamp(0, self.max_top_line() as i64) as usize;
    }

    /// Place cursor and selection, then refresh Copy availability
    pub fn set_selection(&mut self, selection: Selection) {
        let selection = Selection::from_anchor_head(
            self.document.clamp(selection.anchor),
            self.document.clamp(selection.head),
        );
        self.selection = selection;
        self.cursor = selection.head;
        self.sync_copy_available();
    }

    /// Copy is only enabled while something is selected
    pub fn sync_copy_available(&mut self) {
        let available = self.has_selection();
        self.actions.set_enabled(Command::Copy, available);
    }

    /// Adjust positions after lines were dropped from the top
    pub fn shift_up(&mut self, removed: usize) {
        if removed == 0 {
            return;
        }
        self.selection = self.selection.shifted_up(removed);
        self.cursor = self.selection.head;
        self.viewport.top_line = self.viewport.top_line.saturating_sub(removed);
        self.sync_copy_available();
    }

    /// Empty the buffer and reset cursor, selection and viewport
    pub fn clear(&mut self) {
        self.document.clear();
        self.selection = Selection::default();
        self.cursor = Position::default();
        self.viewport.top_line = 0;
        self.sync_copy_available();
    }
}

impl Default for PostWindow {
    fn default() -> Self {
        Self::new(PostConfig::default(), crate::keymap::default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Color;

    fn window_with(text: &str) -> PostWindow {
        let mut window = PostWindow::default();
        window.document.append(text);
        window
    }

    #[test]
    fn test_apply_zoom() {
        assert_eq!(apply_zoom(10, 4), 14);
        assert_eq!(apply_zoom(10, -15), 10);
        assert_eq!(apply_zoom(10, -10), 10);
        assert_eq!(apply_zoom(10, -9), 1);
    }

    #[test]
    fn test_zoom_reports_rejection() {
        let mut window = PostWindow::default();
        window.font.size = 1;
        assert!(!window.zoom(-1));
        assert_eq!(window.font.size, 1);
        assert!(window.zoom(2));
        assert_eq!(window.font.size, 3);
    }

    #[test]
    fn test_symbol_prefers_selection() {
        let mut window = window_with("foo bar baz\n");
        window.set_selection(Selection::from_anchor_head(
            Position::new(0, 2),
            Position::new(0, 6),
        ));
        assert_eq!(window.symbol_under_cursor(), "o ba");
    }

    #[test]
    fn test_symbol_word_at_cursor() {
        let mut window = window_with("ERROR: Class not defined: SinOsk\n");
        window.set_selection(Selection::new(Position::new(0, 28)));
        assert_eq!(window.symbol_under_cursor(), "SinOsk");
    }

    #[test]
    fn test_copy_tracks_selection() {
        let mut window = window_with("abc\n");
        assert!(!window.actions.is_enabled(Command::Copy));

        window.set_selection(Selection::from_anchor_head(
            Position::new(0, 0),
            Position::new(0, 2),
        ));
        assert!(window.actions.is_enabled(Command::Copy));

        window.clear();
        assert!(!window.actions.is_enabled(Command::Copy));
    }

    #[test]
    fn test_apply_settings_replaces_palette() {
        let mut config = PostConfig::default();
        config.colors.text = Some("#ff0000".into());
        let mut window = PostWindow::new(config, crate::keymap::default_bindings());
        assert_eq!(window.palette.text, Some(Color::rgb(255, 0, 0)));

        window.apply_settings(&PostConfig::default());

        assert_eq!(window.palette.text, None);
        assert_eq!(window.palette.background, None);
    }

    #[test]
    fn test_removed_shortcut_override_restores_keymap_binding() {
        let mut config = PostConfig::default();
        config
            .shortcuts
            .insert("editor-enlarge-font".into(), "alt+z".into());
        let mut window = PostWindow::new(config, crate::keymap::default_bindings());
        let default_zoom_in = crate::keymap::default_bindings()
            .into_iter()
            .find(|b| b.command == Command::ZoomIn)
            .map(|b| b.keys.display_string());
        assert_ne!(window.actions.display_for(Command::ZoomIn), default_zoom_in);

        window.apply_settings(&PostConfig::default());

        assert_eq!(window.actions.display_for(Command::ZoomIn), default_zoom_in);
        assert!(window.actions.is_checked(Command::AutoScroll));
    }

    #[test]
    fn test_apply_settings_scrollback_shifts_view() {
        let mut window = window_with("0\n1\n2\n3\n4\n5");
        window.set_selection(Selection::new(Position::new(5, 1)));
        window.viewport.top_line = 4;

        let config = PostConfig {
            scrollback: 3,
            ..PostConfig::default()
        };
        window.apply_settings(&config);

        assert_eq!(window.document.text(), "3\n4\n5");
        assert_eq!(window.cursor, Position::new(2, 1));
        assert_eq!(window.viewport.top_line, 1);
    }

    #[test]
    fn test_apply_settings_line_wrap_and_tab_width() {
        let mut window = PostWindow::default();
        let config = PostConfig {
            line_wrap: true,
            indent_width: 2,
            ..PostConfig::default()
        };
        window.apply_settings(&config);

        assert!(window.line_wrap);
        assert!(window.actions.is_checked(Command::LineWrap));
        assert_eq!(window.tab_width, 2);
    }

    #[test]
    fn test_stored_settings_carry_wrap_state() {
        let mut window = PostWindow::default();
        window.set_line_wrap(true);
        assert!(window.stored_settings().line_wrap);
    }

    #[test]
    fn test_visual_column_follows_tab_width() {
        let mut window = window_with("\tx = 1\n");
        assert_eq!(window.visual_column(Position::new(0, 1)), 4);

        window.tab_width = 2;
        assert_eq!(window.visual_column(Position::new(0, 2)), 3);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut window = window_with(&"x\n".repeat(50));
        window.viewport.visible_lines = 10;
        window.scroll_by(-5);
        assert_eq!(window.viewport.top_line, 0);
        window.scroll_by(1000);
        assert_eq!(window.viewport.top_line, 41);
        assert!(window.is_at_bottom());
    }
}
