//! Command enum representing every action of the post window
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to a `Msg` for the Elm-style update loop.

use std::fmt;
use std::str::FromStr;

use crate::messages::{Msg, PostMsg};

/// All post window actions that can be bound to keys
///
/// Declaration order is the priority order used by shortcut dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Copy selection to clipboard
    Copy,
    /// Remove all posted text
    Clear,
    /// Enlarge the font by one step
    ZoomIn,
    /// Shrink the font by one step
    ZoomOut,
    /// Toggle soft wrapping of long lines
    LineWrap,
    /// Toggle scrolling to the bottom on new posts
    AutoScroll,
    /// Look up documentation for the symbol under the cursor
    OpenDocumentation,
    /// Jump to the definition of the symbol under the cursor
    OpenDefinition,
    /// Find references to the symbol under the cursor
    FindReferences,

    /// Removes a default binding in user keymaps
    Unbound,
}

impl Command {
    /// Every bindable command, in dispatch priority order
    pub const ALL: [Command; 9] = [
        Command::Copy,
        Command::Clear,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::LineWrap,
        Command::AutoScroll,
        Command::OpenDocumentation,
        Command::OpenDefinition,
        Command::FindReferences,
    ];

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            Command::Copy => "Copy",
            Command::Clear => "Clear",
            Command::ZoomIn => "Enlarge Font",
            Command::ZoomOut => "Shrink Font",
            Command::LineWrap => "Wrap Text",
            Command::AutoScroll => "Auto Scroll",
            Command::OpenDocumentation => "Look Up Documentation",
            Command::OpenDefinition => "Look Up Implementations",
            Command::FindReferences => "Look Up References",
            Command::Unbound => "",
        }
    }

    /// Key under which the shortcut is stored in the `shortcuts` settings map
    pub fn settings_key(self) -> Option<&'static str> {
        match self {
            Command::Clear => Some("post-clear"),
            Command::ZoomIn => Some("editor-enlarge-font"),
            Command::ZoomOut => Some("editor-shrink-font"),
            Command::OpenDocumentation => Some("help-lookup-documentation"),
            Command::OpenDefinition => Some("ide-lookup-implementations"),
            Command::FindReferences => Some("ide-lookup-references"),
            _ => None,
        }
    }

    /// Whether triggering flips a checked state
    pub fn is_checkable(self) -> bool {
        matches!(self, Command::LineWrap | Command::AutoScroll)
    }

    /// Convert a triggered command into a message
    ///
    /// `checked` is the state of a checkable action after it was toggled.
    pub fn to_msg(self, checked: bool) -> Option<Msg> {
        let msg = match self {
            Command::Copy => PostMsg::Copy,
            Command::Clear => PostMsg::Clear,
            Command::ZoomIn => PostMsg::ZoomIn(1),
            Command::ZoomOut => PostMsg::ZoomOut(1),
            Command::LineWrap => PostMsg::SetLineWrap(checked),
            Command::AutoScroll => PostMsg::SetAutoScroll(checked),
            Command::OpenDocumentation => PostMsg::OpenDocumentation,
            Command::OpenDefinition => PostMsg::OpenDefinition,
            Command::FindReferences => PostMsg::FindReferences,
            Command::Unbound => return None,
        };
        Some(Msg::Post(msg))
    }

    /// Name used in keymap files
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Copy => "Copy",
            Command::Clear => "Clear",
            Command::ZoomIn => "ZoomIn",
            Command::ZoomOut => "ZoomOut",
            Command::LineWrap => "LineWrap",
            Command::AutoScroll => "AutoScroll",
            Command::OpenDocumentation => "OpenDocumentation",
            Command::OpenDefinition => "OpenDefinition",
            Command::FindReferences => "FindReferences",
            Command::Unbound => "Unbound",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Copy" => Ok(Command::Copy),
            "Clear" => Ok(Command::Clear),
            "ZoomIn" => Ok(Command::ZoomIn),
            "ZoomOut" => Ok(Command::ZoomOut),
            "LineWrap" => Ok(Command::LineWrap),
            "AutoScroll" => Ok(Command::AutoScroll),
            "OpenDocumentation" => Ok(Command::OpenDocumentation),
            "OpenDefinition" => Ok(Command::OpenDefinition),
            "FindReferences" => Ok(Command::FindReferences),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
