//! Config file watching for live settings updates
//!
//! Uses the `notify` crate with debouncing to detect edits to the config
//! file and reload it, so the post window picks up new settings without a
//! restart.

use notify_debouncer_mini::{new_debouncer, DebouncedEvent, DebouncedEventKind, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crate::config::PostConfig;

/// Watcher for a single config file
///
/// The parent directory is watched rather than the file itself, since
/// editors often save by replacing the file.
pub struct ConfigWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<Result<Vec<DebouncedEvent>, notify::Error>>,
    path: PathBuf,
}

impl ConfigWatcher {
    /// Start watching `path`
    ///
    /// Events are debounced with a 300ms delay to coalesce the bursts
    /// editors produce on save.
    pub fn new(path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(Duration::from_millis(300), tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        debouncer
            .watcher()
            .watch(dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching config file: {}", path.display());

        Ok(Self {
            _debouncer: debouncer,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Poll for a changed config (non-blocking)
    ///
    /// Returns the reloaded config when the file changed since the last poll.
    pub fn poll(&self) -> Option<PostConfig> {
        let mut changed = false;

        while let Ok(result) = self.rx.try_recv() {
            match result {
                Ok(events) => {
                    changed |= events.iter().any(|event| self.is_config_event(event));
                }
                Err(e) => {
                    tracing::warn!("Config watcher error: {:?}", e);
                }
            }
        }

        if !changed {
            return None;
        }

        tracing::debug!("Config file changed, reloading");
        Some(PostConfig::load_from(&self.path))
    }

    fn is_config_event(&self, event: &DebouncedEvent) -> bool {
        if matches!(event.kind, DebouncedEventKind::AnyContinuous) {
            return false;
        }
        event.path.file_name() == self.path.file_name()
    }
}
