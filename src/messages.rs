//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Hosts translate their
//! native events into messages; nothing else mutates the model.

use crate::keymap::KeyCode;

/// Events on the pending chip input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMsg {
    /// The input's raw value changed (the host owns the text widget)
    Changed(String),
    /// Insert a character at the cursor
    InsertChar(char),
    /// Insert a string at the cursor (paste)
    InsertText(String),
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    MoveLeft,
    MoveRight,
    MoveStart,
    MoveEnd,
    /// Key-down on the input, before any character insertion
    KeyDown(KeyCode),
    /// The input lost focus
    Blur,
}

/// Events on individual chips and the inline chip editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipMsg {
    /// Switch the chip at index into inline edit mode
    BeginEdit(usize),
    /// Replace the inline editor's text (the host owns the editable region)
    SetDraft(String),
    /// Insert a character into the inline editor
    EditInsertChar(char),
    /// Key-down inside the inline editor
    EditKeyDown(KeyCode),
    /// Commit the inline edit
    CommitEdit,
    /// The inline editor lost focus (commits)
    EditBlur,
    /// Remove the chip at index (delete icon)
    Remove(usize),
}

/// Pointer-driven multi-selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMsg {
    /// Pointer pressed on the chip at index
    PointerDown(usize),
    /// Pointer moved over the chip at index
    PointerMove(usize),
    /// Pointer released anywhere in the editor
    PointerUp,
    /// Remove every selected chip
    DeleteSelection,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The caller assigned a new external value
    ValueChanged(String),
    /// Pending input events
    Input(InputMsg),
    /// Chip and inline editor events
    Chip(ChipMsg),
    /// Selection events
    Select(SelectMsg),
    /// Document-wide key-down, routed by the host's key listener
    GlobalKey(KeyCode),
}
