//! Configurable keyboard mapping for the post window
//!
//! This module provides:
//! - Canonical key combinations (modifier presses never become the primary key)
//! - The ordered action table with exact-match shortcut dispatch
//! - User customization via YAML keymap files
//!
//! # Architecture
//!
//! ```text
//! winit::KeyEvent → RawKeyEvent → KeyCombination → Keymap::dispatch() → Command → Msg
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;
mod winit_adapter;

pub use binding::{CommandBinding, Keybinding};
pub use command::Command;
pub use config::{
    load_keymap_file, parse_key_sequence, parse_key_string, parse_keymap_yaml, KeymapError,
};
pub use defaults::{default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings};
pub use keymap::{KeyAction, Keymap};
pub use types::{
    KeyCode, KeyCombination, KeySequence, Modifiers, RawKeyEvent, SequenceMatch, MAX_SEQUENCE_LEN,
};
pub use winit_adapter::raw_key_event_from_winit;
