//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use postwin::config::PostConfig;
use postwin::keymap::{default_bindings, KeyCode, Modifiers, RawKeyEvent};
use postwin::model::{Position, PostWindow, Selection};
use postwin::runtime::{Host, Runtime};

/// Calls the post window made on its host, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Clipboard(String),
    Documentation(String),
    Definition(String),
    References(String),
    FocusEditor,
    Store(Box<PostConfig>),
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl Host for RecordingHost {
    fn set_clipboard(&mut self, text: &str) {
        self.calls.push(HostCall::Clipboard(text.to_string()));
    }

    fn open_documentation(&mut self, symbol: &str) {
        self.calls.push(HostCall::Documentation(symbol.to_string()));
    }

    fn open_definition(&mut self, symbol: &str) {
        self.calls.push(HostCall::Definition(symbol.to_string()));
    }

    fn find_references(&mut self, symbol: &str) {
        self.calls.push(HostCall::References(symbol.to_string()));
    }

    fn focus_code_editor(&mut self) {
        self.calls.push(HostCall::FocusEditor);
    }

    fn store_settings(&mut self, config: &PostConfig) {
        self.calls.push(HostCall::Store(Box::new(config.clone())));
    }
}

/// Create a post window holding `text` with the given viewport height
pub fn test_model(text: &str, visible_lines: usize) -> PostWindow {
    let mut model = PostWindow::new(PostConfig::default(), default_bindings());
    model.viewport.visible_lines = visible_lines;
    model.document.append(text);
    model
}

/// Create a runtime around [`test_model`] with a recording host
pub fn test_runtime(text: &str, visible_lines: usize) -> Runtime<RecordingHost> {
    Runtime::new(test_model(text, visible_lines), RecordingHost::default())
}

/// `count` numbered lines, each ending in a newline
pub fn numbered_lines(count: usize) -> String {
    (0..count).map(|i| format!("line{}\n", i)).collect()
}

/// A key press with the platform command modifier
pub fn cmd_key(ch: char) -> RawKeyEvent {
    RawKeyEvent::new(KeyCode::Char(ch), Modifiers::cmd())
}

/// A key press with command and shift
pub fn cmd_shift_key(ch: char) -> RawKeyEvent {
    RawKeyEvent::new(KeyCode::Char(ch), Modifiers::cmd() | Modifiers::SHIFT)
}

/// Select a range on one line
pub fn select(model: &mut PostWindow, line: usize, from: usize, to: usize) {
    model.set_selection(Selection::from_anchor_head(
        Position::new(line, from),
        Position::new(line, to),
    ));
}
