//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod input;
mod post;
mod settings;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PostWindow;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use input::update_input;
pub use post::update_post;
pub use settings::update_settings;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut PostWindow, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut PostWindow, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Post(m) => post::update_post(model, m),
        Msg::Input(m) => input::update_input(model, m),
        Msg::Settings(m) => settings::update_settings(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Posted text is frequent and can be large, so it is logged by length only.
#[cfg(debug_assertions)]
fn update_traced(model: &mut PostWindow, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = (model.viewport.top_line, model.document.line_count());
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = (model.viewport.top_line, model.document.line_count());
    if before != after {
        debug!(
            target: "viewport",
            "top {} -> {}, lines {} -> {}",
            before.0, after.0, before.1, after.1
        );
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Post::Post(12 bytes)`
/// - `Post::ZoomIn(1)`
/// - `Input::FocusOut(Tab)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::PostMsg;

    match msg {
        Msg::Post(PostMsg::Post(text)) => format!("Post::Post({} bytes)", text.len()),
        Msg::Post(m) => format!("Post::{:?}", m),
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Settings(m) => format!("Settings::{:?}", m),
    }
}
