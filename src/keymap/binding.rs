//! Keybinding (keymap file entry) and CommandBinding (action table entry)

use super::command::Command;
use super::types::{KeyCombination, KeySequence, SequenceMatch};

/// A keymap file entry mapping a key sequence to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub keys: KeySequence,
    pub command: Command,
}

impl Keybinding {
    /// Create a single-combination binding
    pub fn new(combination: KeyCombination, command: Command) -> Self {
        Self {
            keys: KeySequence::single(combination),
            command,
        }
    }

    /// Create a multi-stroke binding
    pub fn chord(keys: KeySequence, command: Command) -> Self {
        Self { keys, command }
    }

    pub fn display_string(&self) -> String {
        self.keys.display_string()
    }
}

/// One row of the post window's action table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBinding {
    pub command: Command,
    pub label: &'static str,
    pub shortcut: Option<KeySequence>,
    pub enabled: bool,
    pub checked: bool,
}

impl CommandBinding {
    /// Create an enabled, unchecked, unbound entry
    pub fn new(command: Command) -> Self {
        Self {
            command,
            label: command.label(),
            shortcut: None,
            enabled: true,
            checked: false,
        }
    }

    pub fn with_shortcut(mut self, shortcut: KeySequence) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub fn checkable(&self) -> bool {
        self.command.is_checkable()
    }

    /// How a single typed combination relates to this entry's shortcut
    pub fn match_combination(&self, combination: KeyCombination) -> SequenceMatch {
        match &self.shortcut {
            Some(shortcut) => KeySequence::single(combination).matches(shortcut),
            None => SequenceMatch::NoMatch,
        }
    }
}
