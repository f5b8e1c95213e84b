//! postwin - Elm-style post window for interpreter output
//!
//! This crate provides the model, messages and update logic of a read-only
//! output panel: scrollback, auto-scroll, zoom, shortcut dispatch and
//! symbol lookup under the cursor.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod config_watcher;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::PostConfig;
pub use messages::Msg;
pub use model::PostWindow;
pub use runtime::{Host, Runtime};
