//! Core types for the keymap system: KeyCombination, KeySequence, Modifiers, KeyCode

use std::fmt;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Get the platform-specific "command" modifier (Cmd on macOS, Ctrl elsewhere)
    pub fn cmd() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::META
        } else {
            Modifiers::CTRL
        }
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push(if cfg!(target_os = "macos") {
                "Option"
            } else {
                "Alt"
            });
        }
        if self.meta() {
            parts.push(if cfg!(target_os = "macos") {
                "Cmd"
            } else {
                "Win"
            });
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code as delivered by the platform
///
/// The modifier keys themselves (`Shift`, `Control`, `Alt`, `Meta`) appear here
/// when pressed on their own; they never become the primary key of a
/// [`KeyCombination`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24

    // Numpad (physical keys)
    NumpadAdd,
    NumpadSubtract,
    NumpadEnter,

    // Pure modifier presses
    Shift,
    Control,
    Alt,
    Meta,
}

impl KeyCode {
    /// True for keys that only ever act as modifiers
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::Shift | KeyCode::Control | KeyCode::Alt | KeyCode::Meta
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
            KeyCode::Insert => write!(f, "Insert"),
            KeyCode::F(n) => write!(f, "F{}", n),
            KeyCode::NumpadAdd => write!(f, "Num+"),
            KeyCode::NumpadSubtract => write!(f, "Num-"),
            KeyCode::NumpadEnter => write!(f, "NumEnter"),
            KeyCode::Shift => write!(f, "Shift"),
            KeyCode::Control => write!(f, "Ctrl"),
            KeyCode::Alt => write!(f, "Alt"),
            KeyCode::Meta => write!(f, "Meta"),
        }
    }
}

/// A key press as reported by the platform, before canonicalization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub mods: Modifiers,
    pub key: KeyCode,
}

impl RawKeyEvent {
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { mods, key }
    }
}

/// Canonical key combination: a modifier set plus an optional primary key
///
/// The primary key is `None` when the event was a bare modifier press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyCombination {
    pub key: Option<KeyCode>,
    pub mods: Modifiers,
}

impl KeyCombination {
    /// Create a combination with a primary key
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self {
            key: Some(key),
            mods,
        }
    }

    /// Create a combination with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Create a combination with a character key and modifiers
    pub fn char_with_mods(c: char, mods: Modifiers) -> Self {
        Self::new(KeyCode::Char(c.to_ascii_lowercase()), mods)
    }

    /// Canonicalize a raw key press
    ///
    /// Modifier keys pressed alone contribute only their flags.
    pub fn from_event(event: &RawKeyEvent) -> Self {
        let key = if event.key.is_modifier() {
            None
        } else {
            Some(event.key)
        };
        Self {
            key,
            mods: event.mods,
        }
    }

    /// Display the combination using platform-specific symbols
    pub fn display_string(&self) -> String {
        let mut parts = Vec::new();

        if cfg!(target_os = "macos") {
            // macOS uses symbols: ⌃ ⇧ ⌥ ⌘
            if self.mods.ctrl() {
                parts.push("⌃");
            }
            if self.mods.alt() {
                parts.push("⌥");
            }
            if self.mods.shift() {
                parts.push("⇧");
            }
            if self.mods.meta() {
                parts.push("⌘");
            }
        } else {
            if self.mods.ctrl() {
                parts.push("Ctrl+");
            }
            if self.mods.alt() {
                parts.push("Alt+");
            }
            if self.mods.shift() {
                parts.push("Shift+");
            }
            if self.mods.meta() {
                parts.push("Win+");
            }
        }

        let key_str = match self.key {
            Some(KeyCode::Char(c)) => c.to_uppercase().to_string(),
            Some(key) => key.to_string(),
            None => String::new(),
        };

        let mods = parts.join("");
        if key_str.is_empty() {
            mods.trim_end_matches('+').to_string()
        } else {
            format!("{}{}", mods, key_str)
        }
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.key, self.mods.is_empty()) {
            (Some(key), true) => write!(f, "{}", key),
            (Some(key), false) => write!(f, "{}+{}", self.mods, key),
            (None, _) => write!(f, "{}", self.mods),
        }
    }
}

/// Maximum number of combinations in a multi-stroke shortcut
pub const MAX_SEQUENCE_LEN: usize = 4;

/// How a typed sequence relates to a bound sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceMatch {
    /// Every combination matches and the lengths are equal
    Exact,
    /// The typed sequence is a strict prefix of the bound one
    Partial,
    NoMatch,
}

/// An ordered shortcut of one to [`MAX_SEQUENCE_LEN`] combinations
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeySequence(Vec<KeyCombination>);

impl KeySequence {
    /// Create a sequence; returns None when empty or too long
    pub fn new(combinations: Vec<KeyCombination>) -> Option<Self> {
        if combinations.is_empty() || combinations.len() > MAX_SEQUENCE_LEN {
            return None;
        }
        Some(Self(combinations))
    }

    /// Single-combination sequence
    pub fn single(combination: KeyCombination) -> Self {
        Self(vec![combination])
    }

    pub fn combinations(&self) -> &[KeyCombination] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compare what the user typed (`self`) against a bound sequence
    pub fn matches(&self, bound: &KeySequence) -> SequenceMatch {
        let typed = &self.0;
        let bound = &bound.0;
        if typed.len() > bound.len() || bound[..typed.len()] != typed[..] {
            return SequenceMatch::NoMatch;
        }
        if typed.len() == bound.len() {
            SequenceMatch::Exact
        } else {
            SequenceMatch::Partial
        }
    }

    pub fn display_string(&self) -> String {
        self.0
            .iter()
            .map(|k| k.display_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<KeyCombination> for KeySequence {
    fn from(combination: KeyCombination) -> Self {
        Self::single(combination)
    }
}
