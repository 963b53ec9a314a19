//! Host-level input events, as a UI toolkit would deliver them

use serde::{Deserialize, Serialize};

use crate::keymap::KeyCode;

use super::host::ChipsHost;

/// One raw event delivered to the host.
///
/// Serialized with an `event` tag so scripts read naturally:
///
/// ```yaml
/// - event: type
///   text: "foo,"
/// - event: key
///   key: Backspace
/// - event: blur
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HostEvent {
    /// The caller assigns a new external value
    SetValue { value: String },
    /// Characters typed into the focused element
    Type { text: String },
    /// A key-down event
    Key { key: KeyCode },
    /// The focused element loses focus
    Blur,
    /// Focus moves to the pending input
    FocusInput,
    /// Click on a chip's text
    ClickChip { index: usize },
    /// The inline editor's content is replaced
    EditText { text: String },
    PointerDown { index: usize },
    PointerMove { index: usize },
    PointerUp,
    /// Click on a chip's delete icon
    RemoveChip { index: usize },
    /// A render pass (runs deferred focus)
    Render,
    /// The editor is torn down
    Unmount,
}

impl HostEvent {
    /// Deliver this event to `host`
    pub fn apply(self, host: &mut ChipsHost) {
        match self {
            HostEvent::SetValue { value } => host.set_value(&value),
            HostEvent::Type { text } => host.type_text(&text),
            HostEvent::Key { key } => host.key_down(key),
            HostEvent::Blur => host.blur(),
            HostEvent::FocusInput => host.focus_input(),
            HostEvent::ClickChip { index } => host.click_chip(index),
            HostEvent::EditText { text } => host.edit_text(&text),
            HostEvent::PointerDown { index } => host.pointer_down(index),
            HostEvent::PointerMove { index } => host.pointer_move(index),
            HostEvent::PointerUp => host.pointer_up(),
            HostEvent::RemoveChip { index } => host.remove_chip(index),
            HostEvent::Render => {
                host.render();
            }
            HostEvent::Unmount => host.unmount(),
        }
    }
}
