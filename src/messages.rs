//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::config::PostConfig;
use crate::keymap::Modifiers;

/// Why focus left the post window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusReason {
    /// Tab key navigation
    Tab,
    /// Shift+Tab navigation
    Backtab,
    /// Mouse click elsewhere
    Mouse,
    /// Window deactivation, popups, programmatic focus changes
    Other,
}

impl FocusReason {
    /// Focus moved by keyboard navigation
    pub fn is_keyboard_navigation(self) -> bool {
        matches!(self, FocusReason::Tab | FocusReason::Backtab)
    }
}

/// Post window content and view messages
#[derive(Debug, Clone)]
pub enum PostMsg {
    /// Append interpreter output at the end of the buffer
    Post(String),
    /// Remove all text
    Clear,
    /// Copy the selection to the clipboard
    Copy,
    /// Enlarge font by N steps
    ZoomIn(i32),
    /// Shrink font by N steps
    ZoomOut(i32),
    SetLineWrap(bool),
    SetAutoScroll(bool),
    /// Move the viewport so the last line is visible
    ScrollToBottom,
    /// Scroll viewport vertically (positive = down, negative = up)
    Scroll(i32),
    /// Host reports how many lines fit in the view
    Resize { visible_lines: usize },
    /// Set cursor to specific position (from mouse click)
    SetCursorPosition { line: usize, column: usize },
    /// Extend selection to position (Shift+Click, drag)
    ExtendSelectionToPosition { line: usize, column: usize },
    /// Select the word at a position (double-click)
    SelectWordAt { line: usize, column: usize },
    /// Look up documentation for the symbol under the cursor
    OpenDocumentation,
    /// Look up the definition of the symbol under the cursor
    OpenDefinition,
    /// Find references to the symbol under the cursor
    FindReferences,
}

/// Pointer and focus input that is not a shortcut
#[derive(Debug, Clone, Copy)]
pub enum InputMsg {
    /// Mouse wheel; positive delta scrolls up / zooms in
    Wheel { delta: i32, mods: Modifiers },
    FocusOut(FocusReason),
}

/// Settings messages
#[derive(Debug, Clone)]
pub enum SettingsMsg {
    /// Apply a configuration snapshot
    Apply(Box<PostConfig>),
    /// Persist the line-wrap state
    Store,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Post(PostMsg),
    Input(InputMsg),
    Settings(SettingsMsg),
}

impl Msg {
    /// Shorthand for posting text
    pub fn post(text: impl Into<String>) -> Self {
        Msg::Post(PostMsg::Post(text.into()))
    }
}
