//! Default keybindings for the post window
//!
//! The embedded keymap.yaml is the source of truth; `default_bindings` is the
//! hardcoded fallback used when it fails to parse.

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, KeyCombination, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap, for writing out as a starting point
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at ~/.config/postwin/keymap.yaml
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = crate::config_paths::keymap_file() {
        if user_path.exists() {
            match load_keymap_file(&user_path) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user keymap from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
                }
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - If the user binding has the same key sequence → replaces base
/// - If the user binding command is `Unbound` → removes matching base bindings
/// - Otherwise → user binding is placed before the base bindings for its command
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keys != user_binding.keys);
            continue;
        }

        if let Some(idx) = result.iter().position(|b| b.keys == user_binding.keys) {
            tracing::debug!(
                "{} now runs {} instead of {}",
                user_binding.display_string(),
                user_binding.command,
                result[idx].command
            );
            result[idx] = user_binding;
        } else {
            // The action table takes the first binding per command, so user
            // additions go in front.
            result.insert(0, user_binding);
        }
    }

    result
}

/// Hardcoded default keybindings for the current platform
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;

    vec![
        bind(KeyCode::Char('c'), cmd, Command::Copy),
        bind(KeyCode::Char('c'), cmd_shift, Command::Clear),
        bind(KeyCode::Char('+'), cmd, Command::ZoomIn),
        bind(KeyCode::Char('-'), cmd, Command::ZoomOut),
        bind(KeyCode::Char('d'), cmd, Command::OpenDocumentation),
        bind(KeyCode::Char('i'), cmd, Command::OpenDefinition),
        bind(KeyCode::Char('u'), cmd_shift, Command::FindReferences),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(KeyCombination::new(key, mods), command)
}
