use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::commands::Cmd;
use crate::keymap::{Command, KeyAction, RawKeyEvent};
use crate::messages::{Msg, SettingsMsg};
use crate::model::PostWindow;
use crate::update::update;

use super::host::Host;

/// Drives the post window: owns the model, the message queue and the host
///
/// Producers on other threads send messages through [`Runtime::sender`].
/// Each [`Runtime::turn`] first runs messages deferred by earlier updates,
/// then drains the channel.
pub struct Runtime<H: Host> {
    model: PostWindow,
    host: H,
    deferred: VecDeque<Msg>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    needs_redraw: bool,
}

impl<H: Host> Runtime<H> {
    pub fn new(model: PostWindow, host: H) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            host,
            deferred: VecDeque::new(),
            msg_tx,
            msg_rx,
            needs_redraw: true,
        }
    }

    /// Sender for messages produced outside the event loop
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn model(&self) -> &PostWindow {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut PostWindow {
        &mut self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Append text to the post window
    pub fn post(&mut self, text: impl Into<String>) {
        self.dispatch(Msg::post(text));
    }

    /// Run one message through update and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        let applied_settings = matches!(msg, Msg::Settings(SettingsMsg::Apply(_)));

        if let Some(cmd) = update(&mut self.model, msg) {
            if cmd.needs_redraw() {
                self.needs_redraw = true;
            }
            self.process_cmd(cmd);
        }

        if applied_settings {
            self.host.settings_applied(&self.model.config);
        }
    }

    /// Offer a key press to the action table before default key handling
    ///
    /// Returns true when a shortcut matched; the key is then consumed even if
    /// the matched action is disabled.
    pub fn shortcut_override(&mut self, event: RawKeyEvent) -> bool {
        match self.model.actions.dispatch(&event) {
            KeyAction::Execute(command) => {
                tracing::debug!("Shortcut {:?} -> {}", event, command);
                self.trigger(command);
                true
            }
            KeyAction::NoMatch => false,
        }
    }

    /// Trigger an action (menu, toolbar or shortcut)
    pub fn trigger(&mut self, command: Command) {
        if let Some(msg) = self.model.actions.trigger(command) {
            self.dispatch(msg);
        }
    }

    /// One event loop turn; returns whether a redraw is needed
    pub fn turn(&mut self) -> bool {
        let deferred: Vec<Msg> = self.deferred.drain(..).collect();
        for msg in deferred {
            self.dispatch(msg);
        }

        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(msg);
        }

        std::mem::take(&mut self.needs_redraw)
    }

    /// Messages waiting for the next turn
    pub fn has_pending(&self) -> bool {
        !self.deferred.is_empty()
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
            Cmd::Defer(msg) => self.deferred.push_back(*msg),
            Cmd::CopyToClipboard(text) => self.host.set_clipboard(&text),
            Cmd::OpenDocumentation { symbol } => self.host.open_documentation(&symbol),
            Cmd::OpenDefinition { symbol } => self.host.open_definition(&symbol),
            Cmd::FindReferences { symbol } => self.host.find_references(&symbol),
            Cmd::FocusCodeEditor => self.host.focus_code_editor(),
            Cmd::StoreSettings(config) => self.host.store_settings(&config),
        }
    }
}
