//! Post window content, view and lookup message handlers

use crate::commands::Cmd;
use crate::keymap::Command;
use crate::messages::{Msg, PostMsg};
use crate::model::{Position, PostWindow, Selection};
use crate::util::extend_for_env_var;

/// Handle post window messages
pub fn update_post(model: &mut PostWindow, msg: PostMsg) -> Option<Cmd> {
    match msg {
        PostMsg::Post(text) => {
            let removed = model.document.append(&text);
            model.shift_up(removed);
            if model.auto_scroll() {
                // Layout has to see the new text before the bottom is known
                Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::defer(Msg::Post(PostMsg::ScrollToBottom)),
                ]))
            } else {
                Some(Cmd::Redraw)
            }
        }

        PostMsg::Clear => {
            model.clear();
            Some(Cmd::Redraw)
        }

        PostMsg::Copy => {
            if !model.has_selection() {
                return None;
            }
            Some(Cmd::CopyToClipboard(model.selected_text()))
        }

        PostMsg::ZoomIn(steps) => zoom(model, steps),
        PostMsg::ZoomOut(steps) => zoom(model, steps.saturating_neg()),

        PostMsg::SetLineWrap(on) => {
            model.set_line_wrap(on);
            Some(Cmd::Redraw)
        }

        PostMsg::SetAutoScroll(on) => {
            model.actions.set_checked(Command::AutoScroll, on);
            if on {
                model.scroll_to_bottom();
            }
            Some(Cmd::Redraw)
        }

        PostMsg::ScrollToBottom => {
            model.scroll_to_bottom();
            Some(Cmd::Redraw)
        }

        PostMsg::Scroll(delta) => {
            model.scroll_by(delta);
            Some(Cmd::Redraw)
        }

        PostMsg::Resize { visible_lines } => {
            let was_at_bottom = model.is_at_bottom();
            model.viewport.visible_lines = visible_lines.max(1);
            if was_at_bottom && model.auto_scroll() {
                model.scroll_to_bottom();
            } else {
                model.viewport.top_line = model.viewport.top_line.min(model.max_top_line());
            }
            Some(Cmd::Redraw)
        }

        PostMsg::SetCursorPosition { line, column } => {
            model.set_selection(Selection::new(Position::new(line, column)));
            Some(Cmd::Redraw)
        }

        PostMsg::ExtendSelectionToPosition { line, column } => {
            let anchor = model.selection.anchor;
            model.set_selection(Selection::from_anchor_head(
                anchor,
                Position::new(line, column),
            ));
            Some(Cmd::Redraw)
        }

        PostMsg::SelectWordAt { line, column } => {
            let pos = model.document.clamp(Position::new(line, column));
            let (start, end) = model.word_range(pos);
            let start = if start < end {
                let text = model.document.line_text(pos.line).unwrap_or_default();
                extend_for_env_var(&text, start)
            } else {
                start
            };
            model.set_selection(Selection::from_anchor_head(
                Position::new(pos.line, start),
                Position::new(pos.line, end),
            ));
            Some(Cmd::Redraw)
        }

        PostMsg::OpenDocumentation => {
            lookup(model, "documentation", |symbol| Cmd::OpenDocumentation { symbol })
        }
        PostMsg::OpenDefinition => {
            lookup(model, "definition", |symbol| Cmd::OpenDefinition { symbol })
        }
        PostMsg::FindReferences => {
            lookup(model, "references", |symbol| Cmd::FindReferences { symbol })
        }
    }
}

fn zoom(model: &mut PostWindow, steps: i32) -> Option<Cmd> {
    if model.zoom(steps) {
        tracing::debug!("Font size now {}", model.font.size);
        Some(Cmd::Redraw)
    } else {
        tracing::debug!(
            "Zoom by {} rejected at font size {}",
            steps,
            model.font.size
        );
        None
    }
}

fn lookup(model: &PostWindow, what: &str, make: impl FnOnce(String) -> Cmd) -> Option<Cmd> {
    let symbol = model.symbol_under_cursor();
    if symbol.is_empty() {
        tracing::debug!("No symbol under cursor for {} lookup", what);
        return None;
    }
    Some(make(symbol))
}
