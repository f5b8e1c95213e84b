//! Command-line argument parsing
//!
//! Supports:
//! - Running an interpreter and posting its output
//! - Alternative config and keymap files
//! - Overriding scrollback and auto-scroll for one session

use clap::Parser;
use std::path::PathBuf;

use crate::config::PostConfig;
use crate::messages::{Msg, SettingsMsg};

/// Post window for interpreter output
#[derive(Parser, Debug)]
#[command(
    name = "postwin",
    version,
    about = "Run an interpreter and follow its output in a post window"
)]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/postwin/config.yaml
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keymap file merged over the default shortcuts
    #[arg(short = 'k', long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Maximum number of lines to keep (0 keeps everything)
    #[arg(long, value_name = "N")]
    pub scrollback: Option<usize>,

    /// Start with auto-scroll turned off
    #[arg(long)]
    pub no_auto_scroll: bool,

    /// Do not reload settings when the config file changes
    #[arg(long)]
    pub no_watch: bool,

    /// Interpreter command and its arguments
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub config_path: Option<PathBuf>,
    pub keymap_path: Option<PathBuf>,
    pub scrollback: Option<usize>,
    pub auto_scroll: bool,
    pub watch_config: bool,
    pub program: String,
    pub args: Vec<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mut command = self.command.into_iter();
        let program = command
            .next()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| "No interpreter command given".to_string())?;

        Ok(StartupConfig {
            config_path: self.config,
            keymap_path: self.keymap,
            scrollback: self.scrollback,
            auto_scroll: !self.no_auto_scroll,
            watch_config: !self.no_watch,
            program,
            args: command.collect(),
        })
    }
}

impl StartupConfig {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut PostConfig) {
        if let Some(scrollback) = self.scrollback {
            config.scrollback = scrollback;
        }
    }

    /// Message applying a (re)loaded config with the command-line overrides
    pub fn settings_msg(&self, mut config: PostConfig) -> Msg {
        self.apply_overrides(&mut config);
        Msg::Settings(SettingsMsg::Apply(Box::new(config)))
    }
}
