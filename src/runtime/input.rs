//! Keyboard input handling
//!
//! Key presses reach the post window's action table before any default
//! handling. Keys that no shortcut claims are left to the text view.

use winit::keyboard::{Key, ModifiersState, PhysicalKey};

use crate::keymap::raw_key_event_from_winit;

use super::{Host, Runtime};

/// Route a winit key press through the shortcut-override stage
///
/// Returns true when the key was consumed by a shortcut.
pub fn handle_winit_key<H: Host>(
    runtime: &mut Runtime<H>,
    key: &Key,
    physical_key: PhysicalKey,
    modifiers: ModifiersState,
) -> bool {
    let Some(event) = raw_key_event_from_winit(
        key,
        physical_key,
        modifiers.control_key(),
        modifiers.shift_key(),
        modifiers.alt_key(),
        modifiers.super_key(),
    ) else {
        return false;
    };
    runtime.shortcut_override(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PostConfig;
    use crate::model::PostWindow;
    use winit::keyboard::{KeyCode as WinitKeyCode, NamedKey};

    struct QuietHost;

    impl Host for QuietHost {
        fn set_clipboard(&mut self, _text: &str) {}
        fn open_documentation(&mut self, _symbol: &str) {}
        fn open_definition(&mut self, _symbol: &str) {}
        fn find_references(&mut self, _symbol: &str) {}
        fn focus_code_editor(&mut self) {}
        fn store_settings(&mut self, _config: &PostConfig) {}
    }

    fn cmd_state() -> ModifiersState {
        if cfg!(target_os = "macos") {
            ModifiersState::SUPER
        } else {
            ModifiersState::CONTROL
        }
    }

    #[test]
    fn test_clear_shortcut_consumed() {
        let mut runtime = Runtime::new(PostWindow::default(), QuietHost);
        runtime.post("some output\n");

        let handled = handle_winit_key(
            &mut runtime,
            &Key::Character("C".into()),
            PhysicalKey::Code(WinitKeyCode::KeyC),
            cmd_state() | ModifiersState::SHIFT,
        );

        assert!(handled);
        assert!(runtime.model().document.is_empty());
    }

    #[test]
    fn test_zoom_in_with_shifted_plus() {
        let mut runtime = Runtime::new(PostWindow::default(), QuietHost);
        let size = runtime.model().font.size;

        // US layout: '+' is Shift+=
        let handled = handle_winit_key(
            &mut runtime,
            &Key::Character("+".into()),
            PhysicalKey::Code(WinitKeyCode::Equal),
            cmd_state() | ModifiersState::SHIFT,
        );

        assert!(handled);
        assert_eq!(runtime.model().font.size, size + 1);
    }

    #[test]
    fn test_zoom_out_with_minus() {
        let mut runtime = Runtime::new(PostWindow::default(), QuietHost);
        let size = runtime.model().font.size;

        assert!(handle_winit_key(
            &mut runtime,
            &Key::Character("-".into()),
            PhysicalKey::Code(WinitKeyCode::Minus),
            cmd_state(),
        ));
        assert_eq!(runtime.model().font.size, size - 1);
    }

    #[test]
    fn test_plain_keys_fall_through() {
        let mut runtime = Runtime::new(PostWindow::default(), QuietHost);

        assert!(!handle_winit_key(
            &mut runtime,
            &Key::Character("x".into()),
            PhysicalKey::Code(WinitKeyCode::KeyX),
            ModifiersState::empty(),
        ));
        assert!(!handle_winit_key(
            &mut runtime,
            &Key::Named(NamedKey::Control),
            PhysicalKey::Code(WinitKeyCode::ControlLeft),
            ModifiersState::CONTROL,
        ));
    }
}
