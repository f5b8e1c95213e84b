//! Keymap: the post window's ordered action table and shortcut dispatch

use super::binding::{CommandBinding, Keybinding};
use super::command::Command;
use super::types::{KeyCombination, KeySequence, RawKeyEvent, SequenceMatch};
use crate::messages::Msg;

/// Result of offering a key press to the keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Consume the key and execute this command
    Execute(Command),
    /// No binding matches; let default handling see the key
    NoMatch,
}

/// Ordered table with exactly one entry per [`Command`]
///
/// Table order is dispatch priority: when two entries share a shortcut the
/// earlier one wins.
#[derive(Debug, Clone)]
pub struct Keymap {
    entries: Vec<CommandBinding>,
}

impl Keymap {
    /// Create the table with no shortcuts assigned
    ///
    /// Copy starts disabled (nothing selected yet) and Auto Scroll starts checked.
    pub fn new() -> Self {
        let entries = Command::ALL
            .iter()
            .map(|&command| {
                let mut entry = CommandBinding::new(command);
                match command {
                    Command::Copy => entry.enabled = false,
                    Command::AutoScroll => entry.checked = true,
                    _ => {}
                }
                entry
            })
            .collect();
        Self { entries }
    }

    /// Create the table and assign shortcuts from keymap file bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        keymap.apply_bindings(&bindings);
        keymap
    }

    /// Assign each command the first binding that names it
    ///
    /// Commands without a binding keep their current shortcut.
    pub fn apply_bindings(&mut self, bindings: &[Keybinding]) {
        for entry in &mut self.entries {
            if let Some(binding) = bindings.iter().find(|b| b.command == entry.command) {
                entry.shortcut = Some(binding.keys.clone());
            }
        }
    }

    /// Shortcut-override stage: find the first exact match for a key press
    pub fn dispatch(&self, event: &RawKeyEvent) -> KeyAction {
        let combination = KeyCombination::from_event(event);
        match self.lookup(combination) {
            Some(command) => KeyAction::Execute(command),
            None => KeyAction::NoMatch,
        }
    }

    /// First command whose shortcut exactly matches `combination`
    pub fn lookup(&self, combination: KeyCombination) -> Option<Command> {
        self.entries
            .iter()
            .find(|entry| entry.match_combination(combination) == SequenceMatch::Exact)
            .map(|entry| entry.command)
    }

    /// Trigger a command the way a menu action would
    ///
    /// Disabled commands do nothing. Checkable commands flip their checked
    /// state and report the new value in the returned message.
    pub fn trigger(&mut self, command: Command) -> Option<Msg> {
        let entry = self.entry_mut(command)?;
        if !entry.enabled {
            tracing::debug!("Ignoring disabled command {}", command);
            return None;
        }
        if entry.checkable() {
            entry.checked = !entry.checked;
        }
        command.to_msg(entry.checked)
    }

    /// Remove every shortcut, keeping enabled and checked state
    pub fn clear_shortcuts(&mut self) {
        for entry in &mut self.entries {
            entry.shortcut = None;
        }
    }

    pub fn entries(&self) -> &[CommandBinding] {
        &self.entries
    }

    pub fn entry(&self, command: Command) -> Option<&CommandBinding> {
        self.entries.iter().find(|e| e.command == command)
    }

    pub fn entry_mut(&mut self, command: Command) -> Option<&mut CommandBinding> {
        self.entries.iter_mut().find(|e| e.command == command)
    }

    pub fn set_shortcut(&mut self, command: Command, shortcut: Option<KeySequence>) {
        if let Some(entry) = self.entry_mut(command) {
            entry.shortcut = shortcut;
        }
    }

    pub fn set_enabled(&mut self, command: Command, enabled: bool) {
        if let Some(entry) = self.entry_mut(command) {
            entry.enabled = enabled;
        }
    }

    pub fn set_checked(&mut self, command: Command, checked: bool) {
        if let Some(entry) = self.entry_mut(command) {
            entry.checked = checked;
        }
    }

    pub fn is_checked(&self, command: Command) -> bool {
        self.entry(command).is_some_and(|e| e.checked)
    }

    pub fn is_enabled(&self, command: Command) -> bool {
        self.entry(command).is_some_and(|e| e.enabled)
    }

    /// Shortcut text for a command, if it has one
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.entry(command)
            .and_then(|e| e.shortcut.as_ref())
            .map(|s| s.display_string())
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
