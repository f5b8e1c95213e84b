//! Settings message handlers

use crate::commands::Cmd;
use crate::messages::SettingsMsg;
use crate::model::PostWindow;

/// Handle settings messages
pub fn update_settings(model: &mut PostWindow, msg: SettingsMsg) -> Option<Cmd> {
    match msg {
        SettingsMsg::Apply(config) => {
            tracing::info!("Applying settings");
            model.apply_settings(&config);
            Some(Cmd::Redraw)
        }

        SettingsMsg::Store => Some(Cmd::StoreSettings(Box::new(model.stored_settings()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PostConfig;
    use crate::keymap::{Command, KeyCode, KeyCombination, Modifiers};

    #[test]
    fn test_apply_rebinds_shortcut() {
        let mut model = PostWindow::default();
        let mut config = PostConfig::default();
        config
            .shortcuts
            .insert("post-clear".to_string(), "ctrl+l".to_string());

        update_settings(&mut model, SettingsMsg::Apply(Box::new(config)));

        let combo = KeyCombination::new(KeyCode::Char('l'), Modifiers::CTRL);
        assert_eq!(model.actions.lookup(combo), Some(Command::Clear));
    }

    #[test]
    fn test_store_carries_line_wrap() {
        let mut model = PostWindow::default();
        model.set_line_wrap(true);
        match update_settings(&mut model, SettingsMsg::Store) {
            Some(Cmd::StoreSettings(config)) => assert!(config.line_wrap),
            other => panic!("expected store, got {:?}", other),
        }
    }
}
