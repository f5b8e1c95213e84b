//! Runtime module - event loop turn and platform integration
//!
//! This module contains the code that drives the post window:
//! - `app` - message queue, deferred messages and command execution
//! - `host` - outbound collaborators (clipboard, browser, IDE)
//! - `input` - winit keyboard events to shortcut dispatch

pub mod app;
pub mod host;
pub mod input;

pub use app::Runtime;
pub use host::{Host, SystemHost};
pub use input::handle_winit_key;
