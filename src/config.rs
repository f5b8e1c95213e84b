//! Post window configuration persistence
//!
//! Stores user preferences in `~/.config/postwin/config.yaml`

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keymap::{parse_key_sequence, Command, KeySequence};
use crate::theme::ColorsConfig;
use crate::util::DEFAULT_EXTRA_WORD_CHARS;

/// Default maximum number of lines kept in the post window
pub const DEFAULT_SCROLLBACK: usize = 1000;

/// Font family and point size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default = "default_font_family")]
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: i32,
}

fn default_font_family() -> String {
    "monospace".to_string()
}

fn default_font_size() -> i32 {
    12
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_font_family(),
            size: default_font_size(),
        }
    }
}

/// Post window configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostConfig {
    /// Maximum number of lines kept; 0 keeps everything
    #[serde(default = "default_scrollback")]
    pub scrollback: usize,

    /// Soft-wrap long lines
    #[serde(default)]
    pub line_wrap: bool,

    #[serde(default)]
    pub font: FontConfig,

    #[serde(default)]
    pub colors: ColorsConfig,

    /// Tab stop width in spaces
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Shortcut overrides keyed by settings key, e.g. `post-clear: "ctrl+shift+c"`.
    /// An empty string removes the shortcut.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub shortcuts: BTreeMap<String, String>,

    /// Characters besides letters and digits that belong to a symbol
    #[serde(default = "default_word_chars")]
    pub word_chars: String,

    /// Documentation URL template; `{symbol}` is replaced by the looked-up word
    #[serde(default = "default_help_url")]
    pub help_url: String,
}

fn default_scrollback() -> usize {
    DEFAULT_SCROLLBACK
}

fn default_indent_width() -> usize {
    4
}

fn default_word_chars() -> String {
    DEFAULT_EXTRA_WORD_CHARS.to_string()
}

fn default_help_url() -> String {
    "https://docs.supercollider.online/Search.html#{symbol}".to_string()
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            scrollback: default_scrollback(),
            line_wrap: false,
            font: FontConfig::default(),
            colors: ColorsConfig::default(),
            indent_width: default_indent_width(),
            shortcuts: BTreeMap::new(),
            word_chars: default_word_chars(),
            help_url: default_help_url(),
        }
    }
}

impl PostConfig {
    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Shortcut overrides resolved to commands
    ///
    /// Unknown settings keys and unparsable shortcuts are skipped with a warning.
    pub fn shortcut_overrides(&self) -> Vec<(Command, Option<KeySequence>)> {
        let mut overrides = Vec::new();

        for (key, value) in &self.shortcuts {
            let Some(command) = Command::ALL
                .into_iter()
                .find(|c| c.settings_key() == Some(key.as_str()))
            else {
                tracing::warn!("Unknown shortcut setting {:?}", key);
                continue;
            };

            if value.trim().is_empty() {
                overrides.push((command, None));
                continue;
            }

            match parse_key_sequence(value) {
                Ok(sequence) => overrides.push((command, Some(sequence))),
                Err(e) => tracing::warn!("Ignoring shortcut {} = {:?}: {}", key, value, e),
            }
        }

        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{KeyCode, Modifiers};

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config: PostConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PostConfig::default());
        assert_eq!(config.scrollback, DEFAULT_SCROLLBACK);
        assert_eq!(config.font.size, 12);
        assert!(!config.line_wrap);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = "line_wrap: true\nfont:\n  size: 16\n";
        let config: PostConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.line_wrap);
        assert_eq!(config.font.size, 16);
        assert_eq!(config.font.family, "monospace");
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_shortcut_overrides() {
        let mut config = PostConfig::default();
        config
            .shortcuts
            .insert("post-clear".into(), "ctrl+l".into());
        config
            .shortcuts
            .insert("editor-shrink-font".into(), "".into());
        config
            .shortcuts
            .insert("no-such-action".into(), "ctrl+q".into());
        config
            .shortcuts
            .insert("editor-enlarge-font".into(), "ctrl+".into());

        let overrides = config.shortcut_overrides();
        assert_eq!(overrides.len(), 2);
        assert!(overrides.contains(&(Command::ZoomOut, None)));

        let clear = overrides
            .iter()
            .find(|(c, _)| *c == Command::Clear)
            .and_then(|(_, s)| s.clone())
            .unwrap();
        let combo = clear.combinations()[0];
        assert_eq!(combo.key, Some(KeyCode::Char('l')));
        assert_eq!(combo.mods, Modifiers::CTRL);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = PostConfig {
            line_wrap: true,
            scrollback: 50,
            ..PostConfig::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(PostConfig::load_from(&path), config);
    }

    #[test]
    fn test_load_invalid_yaml_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "scrollback: [not, a, number]").unwrap();

        assert_eq!(PostConfig::load_from(&path), PostConfig::default());
    }
}
