//! ChipsHost - plays the role of the presentation layer and hosting app

use tracing::{debug, trace};

use crate::commands::Cmd;
use crate::config::ChipsConfig;
use crate::keymap::KeyCode;
use crate::messages::{ChipMsg, InputMsg, Msg, SelectMsg};
use crate::model::ChipsModel;
use crate::update::update;
use crate::view::{self, EditorView};

/// Which element currently owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    None,
    /// The pending chip input
    Input,
    /// The inline editor of the chip at index
    ChipEditor(usize),
}

/// Owns a chip editor model and drives it the way a UI host would.
///
/// The host keeps the caller's external value (controlled: every emitted
/// value is assigned back and re-parsed), routes key events to the focused
/// element and then to the document-wide key listener, and runs the deferred
/// chip-editor focus only after the next render.
#[derive(Debug)]
pub struct ChipsHost {
    model: ChipsModel,
    value: String,
    changes: Vec<String>,
    focus: Focus,
    pending_focus: Option<usize>,
    key_listener: bool,
}

impl ChipsHost {
    /// Mount an editor for `value` and attach the document key listener
    pub fn mount(value: &str, config: ChipsConfig) -> Self {
        let mut host = Self {
            model: ChipsModel::new(config),
            value: value.to_string(),
            changes: Vec::new(),
            focus: Focus::None,
            pending_focus: None,
            key_listener: true,
        };
        host.dispatch(Msg::ValueChanged(value.to_string()));
        debug!(chips = host.model.chips.len(), "chip editor mounted");
        host
    }

    /// Detach the document key listener. Later global keys are dropped.
    pub fn unmount(&mut self) {
        self.key_listener = false;
        self.pending_focus = None;
        self.focus = Focus::None;
        debug!("chip editor unmounted");
    }

    pub fn model(&self) -> &ChipsModel {
        &self.model
    }

    /// The caller-owned external value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Every change notification emitted so far, oldest first
    pub fn changes(&self) -> &[String] {
        &self.changes
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_key_listener_attached(&self) -> bool {
        self.key_listener
    }

    /// Chip index whose editor will be focused by the next render
    pub fn pending_focus(&self) -> Option<usize> {
        self.pending_focus
    }

    /// Run one message through the update function and execute its command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.run(cmd);
        }
        self.sync_focus();
    }

    fn run(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::EmitValue(value) => {
                trace!(value = %value, "change notification");
                self.changes.push(value.clone());
                self.value = value.clone();
                // Controlled value: the caller assigns it straight back
                self.dispatch(Msg::ValueChanged(value));
            }
            Cmd::FocusChipEditor { index } => {
                self.pending_focus = Some(index);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.run(cmd);
                }
            }
        }
    }

    /// The inline editor disappears when edit mode ends, taking any focus
    /// request for it along
    fn sync_focus(&mut self) {
        let editing = self.model.editing_index();
        if let Focus::ChipEditor(index) = self.focus {
            if editing != Some(index) {
                self.focus = Focus::None;
            }
        }
        if self.pending_focus.is_some() && self.pending_focus != editing {
            trace!(pending = ?self.pending_focus, "focus request dropped");
            self.pending_focus = None;
        }
    }

    /// Render the current state, then run deferred focus requests
    pub fn render(&mut self) -> EditorView {
        let view = view::build(&self.model);

        if let Some(index) = self.pending_focus.take() {
            if self.model.editing_index() == Some(index) {
                self.focus = Focus::ChipEditor(index);
            }
        }

        view
    }

    /// The caller assigns a new external value
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.dispatch(Msg::ValueChanged(value.to_string()));
    }

    /// Move focus to the pending input, blurring the previous owner
    pub fn focus_input(&mut self) {
        if self.focus == Focus::Input {
            return;
        }
        self.blur();
        self.focus = Focus::Input;
    }

    /// The focused element loses focus
    pub fn blur(&mut self) {
        match self.focus {
            Focus::Input => {
                self.focus = Focus::None;
                self.dispatch(Msg::Input(InputMsg::Blur));
            }
            Focus::ChipEditor(_) => {
                self.focus = Focus::None;
                self.dispatch(Msg::Chip(ChipMsg::EditBlur));
            }
            Focus::None => {}
        }
    }

    /// Type characters into the focused element; unfocused typing goes to the
    /// pending input
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            match self.focus {
                Focus::ChipEditor(_) => self.dispatch(Msg::Chip(ChipMsg::EditInsertChar(ch))),
                Focus::Input => self.dispatch(Msg::Input(InputMsg::InsertChar(ch))),
                Focus::None => {
                    self.focus_input();
                    self.dispatch(Msg::Input(InputMsg::InsertChar(ch)));
                }
            }
        }
    }

    /// Replace the inline editor's text, as a content-editable region would
    pub fn edit_text(&mut self, text: &str) {
        if let Focus::ChipEditor(_) = self.focus {
            self.dispatch(Msg::Chip(ChipMsg::SetDraft(text.to_string())));
        }
    }

    /// A key-down event.
    ///
    /// The inline editor consumes its keys. Otherwise the focused input sees
    /// the key first, then the document listener, then the input's default
    /// action (deletion or cursor movement) runs.
    pub fn key_down(&mut self, key: KeyCode) {
        match self.focus {
            Focus::ChipEditor(_) => {
                self.dispatch(Msg::Chip(ChipMsg::EditKeyDown(key)));
            }
            Focus::Input => {
                self.dispatch(Msg::Input(InputMsg::KeyDown(key)));
                self.dispatch_global_key(key);
                if let Some(action) = default_input_action(key) {
                    self.dispatch(Msg::Input(action));
                }
            }
            Focus::None => self.dispatch_global_key(key),
        }
    }

    fn dispatch_global_key(&mut self, key: KeyCode) {
        if self.key_listener {
            self.dispatch(Msg::GlobalKey(key));
        } else {
            trace!(%key, "no key listener attached");
        }
    }

    /// Click on a chip's text: pressing the pointer blurs the input and
    /// starts a selection, the click enters edit mode
    pub fn click_chip(&mut self, index: usize) {
        self.blur();
        self.dispatch(Msg::Select(SelectMsg::PointerDown(index)));
        self.dispatch(Msg::Select(SelectMsg::PointerUp));
        self.dispatch(Msg::Chip(ChipMsg::BeginEdit(index)));
    }

    pub fn pointer_down(&mut self, index: usize) {
        self.blur();
        self.dispatch(Msg::Select(SelectMsg::PointerDown(index)));
    }

    pub fn pointer_move(&mut self, index: usize) {
        self.dispatch(Msg::Select(SelectMsg::PointerMove(index)));
    }

    pub fn pointer_up(&mut self) {
        self.dispatch(Msg::Select(SelectMsg::PointerUp));
    }

    /// Click on a chip's delete icon
    pub fn remove_chip(&mut self, index: usize) {
        self.dispatch(Msg::Chip(ChipMsg::Remove(index)));
    }
}

/// What the pending input does with a key after the handlers ran
fn default_input_action(key: KeyCode) -> Option<InputMsg> {
    match key {
        KeyCode::Backspace => Some(InputMsg::DeleteBackward),
        KeyCode::Delete => Some(InputMsg::DeleteForward),
        KeyCode::Left => Some(InputMsg::MoveLeft),
        KeyCode::Right => Some(InputMsg::MoveRight),
        KeyCode::Home => Some(InputMsg::MoveStart),
        KeyCode::End => Some(InputMsg::MoveEnd),
        _ => None,
    }
}
