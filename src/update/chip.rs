//! Inline chip editing and single-chip removal

use tracing::{debug, warn};

use crate::commands::Cmd;
use crate::keymap::KeyCode;
use crate::messages::ChipMsg;
use crate::model::{ChipsModel, EditTarget};

/// Handle chip messages
pub fn update_chip(model: &mut ChipsModel, msg: ChipMsg) -> Option<Cmd> {
    match msg {
        ChipMsg::BeginEdit(index) => begin_edit(model, index),
        ChipMsg::SetDraft(text) => {
            if let Some(edit) = model.edit.as_mut() {
                edit.draft.set_text(&text);
            }
            None
        }
        ChipMsg::EditInsertChar(ch) => {
            if let Some(edit) = model.edit.as_mut() {
                edit.draft.insert_char(ch);
            }
            None
        }
        ChipMsg::EditKeyDown(key) => edit_key_down(model, key),
        ChipMsg::CommitEdit | ChipMsg::EditBlur => commit_edit(model),
        ChipMsg::Remove(index) => remove_chip_at(model, index),
    }
}

/// Whether `index` addresses an existing chip; logs and rejects otherwise
pub(super) fn chip_index_valid(model: &ChipsModel, index: usize, op: &str) -> bool {
    let valid = index < model.chips.len();
    if !valid {
        warn!(
            "{}: chip index {} out of range ({} chips), ignored",
            op,
            index,
            model.chips.len()
        );
    }
    valid
}

/// Enter inline edit mode for the chip at `index`.
///
/// A chip already under edit is committed first. The inline editor does not
/// exist until the host renders the new state, so focusing it is returned as
/// a deferred command.
fn begin_edit(model: &mut ChipsModel, index: usize) -> Option<Cmd> {
    if !chip_index_valid(model, index, "BeginEdit") {
        return None;
    }

    let committed = if model.edit.is_some() {
        commit_edit(model)
    } else {
        None
    };

    // The commit above replaced text in place, so `index` is still valid
    let text = model.chips.get(index).unwrap_or_default().to_string();
    model.edit = Some(EditTarget::new(index, &text));
    debug!(target: "chips", index, "editing chip");

    Cmd::merge(committed, Some(Cmd::FocusChipEditor { index }))
}

/// Leave edit mode, replacing the chip text with the trimmed draft.
///
/// An empty draft is discarded and the chip keeps its previous text.
fn commit_edit(model: &mut ChipsModel) -> Option<Cmd> {
    let edit = model.edit.take()?;
    let text = edit.draft.text().trim();

    if text.is_empty() {
        debug!(target: "chips", index = edit.index, "empty edit discarded");
        return None;
    }

    if !model.chips.replace(edit.index, text.to_string()) {
        return None;
    }
    Some(Cmd::EmitValue(model.chips.to_value()))
}

fn edit_key_down(model: &mut ChipsModel, key: KeyCode) -> Option<Cmd> {
    let edit = model.edit.as_mut()?;

    match key {
        KeyCode::Enter => commit_edit(model),
        KeyCode::Backspace | KeyCode::Delete => {
            // Deleting the last character removes the whole chip
            if edit.draft.text().trim().chars().count() <= 1 {
                let index = edit.index;
                return remove_chip_at(model, index);
            }
            if key == KeyCode::Backspace {
                edit.draft.delete_backward();
            } else {
                edit.draft.delete_forward();
            }
            None
        }
        KeyCode::Left => {
            edit.draft.move_left();
            None
        }
        KeyCode::Right => {
            edit.draft.move_right();
            None
        }
        KeyCode::Home => {
            edit.draft.move_start();
            None
        }
        KeyCode::End => {
            edit.draft.move_end();
            None
        }
        _ => None,
    }
}

/// Splice out the chip at `index`. Any structural removal exits edit mode.
pub(super) fn remove_chip_at(model: &mut ChipsModel, index: usize) -> Option<Cmd> {
    if !chip_index_valid(model, index, "Remove") {
        return None;
    }

    let removed = model.chips.remove(index)?;
    debug!(target: "chips", index, chip = %removed, "chip removed");

    model.edit = None;
    model.selection.shift_after_removal(index);
    Some(Cmd::EmitValue(model.chips.to_value()))
}
