//! Mouse wheel and focus message handlers

use crate::commands::Cmd;
use crate::keymap::Modifiers;
use crate::messages::{InputMsg, PostMsg};
use crate::model::PostWindow;

use super::post::update_post;

/// Lines scrolled per wheel notch
pub const WHEEL_SCROLL_LINES: i32 = 3;

/// Handle wheel and focus input
pub fn update_input(model: &mut PostWindow, msg: InputMsg) -> Option<Cmd> {
    match msg {
        InputMsg::Wheel { delta, mods } => {
            // Only the bare command modifier zooms; other combinations scroll
            if mods == Modifiers::cmd() {
                let zoom = if delta > 0 {
                    PostMsg::ZoomIn(1)
                } else {
                    PostMsg::ZoomOut(1)
                };
                update_post(model, zoom)
            } else {
                let lines = delta.saturating_mul(WHEEL_SCROLL_LINES).saturating_neg();
                update_post(model, PostMsg::Scroll(lines))
            }
        }

        InputMsg::FocusOut(reason) => {
            if reason.is_keyboard_navigation() {
                tracing::debug!("Focus left by {:?}, handing over to code editor", reason);
                Some(Cmd::FocusCodeEditor)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::FocusReason;

    #[test]
    fn test_cmd_wheel_zooms() {
        let mut model = PostWindow::default();
        let size = model.font.size;

        update_input(
            &mut model,
            InputMsg::Wheel {
                delta: 1,
                mods: Modifiers::cmd(),
            },
        );
        assert_eq!(model.font.size, size + 1);

        update_input(
            &mut model,
            InputMsg::Wheel {
                delta: -1,
                mods: Modifiers::cmd(),
            },
        );
        assert_eq!(model.font.size, size);
    }

    #[test]
    fn test_zero_delta_with_cmd_zooms_out() {
        let mut model = PostWindow::default();
        let size = model.font.size;
        update_input(
            &mut model,
            InputMsg::Wheel {
                delta: 0,
                mods: Modifiers::cmd(),
            },
        );
        assert_eq!(model.font.size, size - 1);
    }

    #[test]
    fn test_plain_wheel_scrolls() {
        let mut model = PostWindow::default();
        model.actions.set_checked(crate::keymap::Command::AutoScroll, false);
        model.viewport.visible_lines = 5;
        update_post(&mut model, PostMsg::Post("x\n".repeat(30)));

        let size = model.font.size;
        update_input(
            &mut model,
            InputMsg::Wheel {
                delta: -2,
                mods: Modifiers::NONE,
            },
        );
        assert_eq!(model.viewport.top_line, 6);
        assert_eq!(model.font.size, size);
    }

    #[test]
    fn test_cmd_with_extra_modifier_scrolls() {
        let mut model = PostWindow::default();
        model.actions.set_checked(crate::keymap::Command::AutoScroll, false);
        model.viewport.visible_lines = 5;
        update_post(&mut model, PostMsg::Post("x\n".repeat(30)));
        let size = model.font.size;

        for extra in [Modifiers::SHIFT, Modifiers::ALT] {
            update_input(
                &mut model,
                InputMsg::Wheel {
                    delta: -1,
                    mods: Modifiers::cmd() | extra,
                },
            );
        }

        assert_eq!(model.font.size, size);
        assert_eq!(model.viewport.top_line, 6);
    }

    #[test]
    fn test_extreme_wheel_deltas_clamp() {
        let mut model = PostWindow::default();
        model.actions.set_checked(crate::keymap::Command::AutoScroll, false);
        model.viewport.visible_lines = 5;
        update_post(&mut model, PostMsg::Post("x\n".repeat(30)));

        for delta in [i32::MIN, i32::MIN + 1, -(i32::MAX / 2)] {
            update_input(
                &mut model,
                InputMsg::Wheel {
                    delta,
                    mods: Modifiers::NONE,
                },
            );
            assert_eq!(model.viewport.top_line, 26);
        }

        for delta in [i32::MAX, i32::MAX / 2] {
            update_input(
                &mut model,
                InputMsg::Wheel {
                    delta,
                    mods: Modifiers::NONE,
                },
            );
            assert_eq!(model.viewport.top_line, 0);
        }
    }

    #[test]
    fn test_focus_out_by_keyboard_only() {
        let mut model = PostWindow::default();
        assert!(matches!(
            update_input(&mut model, InputMsg::FocusOut(FocusReason::Tab)),
            Some(Cmd::FocusCodeEditor)
        ));
        assert!(matches!(
            update_input(&mut model, InputMsg::FocusOut(FocusReason::Backtab)),
            Some(Cmd::FocusCodeEditor)
        ));
        assert!(update_input(&mut model, InputMsg::FocusOut(FocusReason::Mouse)).is_none());
        assert!(update_input(&mut model, InputMsg::FocusOut(FocusReason::Other)).is_none());
    }
}
