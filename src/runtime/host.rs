//! Outbound collaborators of the post window

use std::path::PathBuf;

use crate::config::PostConfig;

/// Everything the post window asks of its surroundings
pub trait Host {
    fn set_clipboard(&mut self, text: &str);
    fn open_documentation(&mut self, symbol: &str);
    fn open_definition(&mut self, symbol: &str);
    fn find_references(&mut self, symbol: &str);
    fn focus_code_editor(&mut self);
    fn store_settings(&mut self, config: &PostConfig);

    /// Called after a new configuration was applied to the model
    fn settings_applied(&mut self, _config: &PostConfig) {}
}

/// Host backed by the system clipboard, the default browser and the config file
///
/// Definition and reference lookups need an IDE; standalone they are logged.
pub struct SystemHost {
    config_path: Option<PathBuf>,
    help_url: String,
}

impl SystemHost {
    pub fn new(config_path: Option<PathBuf>, config: &PostConfig) -> Self {
        Self {
            config_path,
            help_url: config.help_url.clone(),
        }
    }

    fn help_url_for(&self, symbol: &str) -> String {
        self.help_url.replace("{symbol}", symbol)
    }
}

impl Host for SystemHost {
    fn set_clipboard(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    tracing::warn!("Failed to set clipboard: {}", e);
                }
            }
            Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
        }
    }

    fn open_documentation(&mut self, symbol: &str) {
        let url = self.help_url_for(symbol);
        tracing::info!("Opening documentation for {}: {}", symbol, url);
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open {}: {}", url, e);
        }
    }

    fn open_definition(&mut self, symbol: &str) {
        tracing::info!("Definition lookup requested for {}", symbol);
    }

    fn find_references(&mut self, symbol: &str) {
        tracing::info!("Reference search requested for {}", symbol);
    }

    fn focus_code_editor(&mut self) {
        tracing::debug!("Code editor focus requested");
    }

    fn store_settings(&mut self, config: &PostConfig) {
        let Some(path) = self.config_path.clone().or_else(crate::config_paths::config_file) else {
            tracing::warn!("No config location; settings not stored");
            return;
        };
        match config.save_to(&path) {
            Ok(()) => tracing::info!("Stored settings to {}", path.display()),
            Err(e) => tracing::error!("Failed to store settings: {}", e),
        }
    }

    fn settings_applied(&mut self, config: &PostConfig) {
        self.help_url = config.help_url.clone();
    }
}
