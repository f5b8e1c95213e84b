//! Adapter to convert winit key events to our RawKeyEvent type

use winit::keyboard::{Key, KeyCode as WinitKeyCode, NamedKey, PhysicalKey};

use super::types::{KeyCode, Modifiers, RawKeyEvent};

/// Convert winit key event data to a raw key event
///
/// Modifier keys pressed on their own map to `KeyCode::Shift` and friends so
/// that dispatch can leave them out of the combination.
/// Returns None if the key cannot be mapped (e.g., unknown keys).
pub fn raw_key_event_from_winit(
    logical_key: &Key,
    physical_key: PhysicalKey,
    ctrl: bool,
    shift: bool,
    alt: bool,
    logo: bool, // logo = meta = cmd on macOS
) -> Option<RawKeyEvent> {
    let mut mods = Modifiers::new(ctrl, shift, alt, logo);

    let key_code = match logical_key {
        Key::Named(named) => match named {
            NamedKey::Enter => Some(KeyCode::Enter),
            NamedKey::Escape => Some(KeyCode::Escape),
            NamedKey::Tab => Some(KeyCode::Tab),
            NamedKey::Backspace => Some(KeyCode::Backspace),
            NamedKey::Delete => Some(KeyCode::Delete),
            NamedKey::Space => Some(KeyCode::Space),

            NamedKey::ArrowUp => Some(KeyCode::Up),
            NamedKey::ArrowDown => Some(KeyCode::Down),
            NamedKey::ArrowLeft => Some(KeyCode::Left),
            NamedKey::ArrowRight => Some(KeyCode::Right),

            NamedKey::Home => Some(KeyCode::Home),
            NamedKey::End => Some(KeyCode::End),
            NamedKey::PageUp => Some(KeyCode::PageUp),
            NamedKey::PageDown => Some(KeyCode::PageDown),
            NamedKey::Insert => Some(KeyCode::Insert),

            NamedKey::F1 => Some(KeyCode::F(1)),
            NamedKey::F2 => Some(KeyCode::F(2)),
            NamedKey::F3 => Some(KeyCode::F(3)),
            NamedKey::F4 => Some(KeyCode::F(4)),
            NamedKey::F5 => Some(KeyCode::F(5)),
            NamedKey::F6 => Some(KeyCode::F(6)),
            NamedKey::F7 => Some(KeyCode::F(7)),
            NamedKey::F8 => Some(KeyCode::F(8)),
            NamedKey::F9 => Some(KeyCode::F(9)),
            NamedKey::F10 => Some(KeyCode::F(10)),
            NamedKey::F11 => Some(KeyCode::F(11)),
            NamedKey::F12 => Some(KeyCode::F(12)),

            NamedKey::Shift => Some(KeyCode::Shift),
            NamedKey::Control => Some(KeyCode::Control),
            NamedKey::Alt | NamedKey::AltGraph => Some(KeyCode::Alt),
            NamedKey::Super | NamedKey::Meta => Some(KeyCode::Meta),

            _ => None,
        },

        // Character keys - normalize to lowercase
        Key::Character(s) => {
            let c = s.chars().next()?;
            // A shifted symbol ('+', '?', '!') already carries Shift in the
            // character itself, so "cmd+plus" must match Ctrl+Shift+=
            if !c.is_alphanumeric() && !c.is_whitespace() {
                mods = Modifiers::new(ctrl, false, alt, logo);
            }
            Some(KeyCode::Char(c.to_ascii_lowercase()))
        }

        _ => None,
    };

    // If logical key mapping failed, try physical key for numpad
    let key_code = key_code.or(match physical_key {
        PhysicalKey::Code(code) => match code {
            WinitKeyCode::NumpadAdd => Some(KeyCode::NumpadAdd),
            WinitKeyCode::NumpadSubtract => Some(KeyCode::NumpadSubtract),
            WinitKeyCode::NumpadEnter => Some(KeyCode::NumpadEnter),
            _ => None,
        },
        PhysicalKey::Unidentified(_) => None,
    });

    key_code.map(|key| RawKeyEvent::new(key, mods))
}
