//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::config::PostConfig;
use crate::messages::Msg;

/// Side effects returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the post window
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Run a message on the next event loop turn, after the current update
    /// has fully settled
    Defer(Box<Msg>),
    /// Put text on the system clipboard
    CopyToClipboard(String),
    /// Ask the host to show documentation for a symbol
    OpenDocumentation { symbol: String },
    /// Ask the host to open the definition of a symbol
    OpenDefinition { symbol: String },
    /// Ask the host to search for references to a symbol
    FindReferences { symbol: String },
    /// Move keyboard focus to the code editor
    FocusCodeEditor,
    /// Write settings to the config store
    StoreSettings(Box<PostConfig>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Defer a message to the next turn
    pub fn defer(msg: Msg) -> Self {
        Cmd::Defer(Box::new(msg))
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // The deferred message redraws when it runs
            Cmd::Defer(_) => false,
            Cmd::CopyToClipboard(_) => false,
            Cmd::OpenDocumentation { .. } => false,
            Cmd::OpenDefinition { .. } => false,
            Cmd::FindReferences { .. } => false,
            Cmd::FocusCodeEditor => false,
            Cmd::StoreSettings(_) => false,
        }
    }
}
