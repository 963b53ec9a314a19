//! Pending input handlers: typing, delimiter commits, explicit commit keys
//! and blur.

use tracing::debug;

use crate::commands::Cmd;
use crate::config::DuplicateCheck;
use crate::editable::TextField;
use crate::keymap::KeyCode;
use crate::messages::InputMsg;
use crate::model::{ChipsModel, ValidationError};
use crate::tokenizer::{DELIMITER, QUOTE};

/// Handle pending input messages
pub fn update_input(model: &mut ChipsModel, msg: InputMsg) -> Option<Cmd> {
    match msg {
        InputMsg::Changed(raw) => {
            let mut next = model.input.clone();
            next.set_text(&raw);
            next.move_end();
            apply_buffer_edit(model, next)
        }
        InputMsg::InsertChar(ch) => {
            let mut next = model.input.clone();
            next.insert_char(ch);
            apply_buffer_edit(model, next)
        }
        InputMsg::InsertText(text) => {
            let mut next = model.input.clone();
            next.insert_text(&text);
            apply_buffer_edit(model, next)
        }
        InputMsg::DeleteBackward => {
            let mut next = model.input.clone();
            if !next.delete_backward() {
                return None;
            }
            apply_buffer_edit(model, next)
        }
        InputMsg::DeleteForward => {
            let mut next = model.input.clone();
            if !next.delete_forward() {
                return None;
            }
            apply_buffer_edit(model, next)
        }
        InputMsg::MoveLeft => {
            model.input.move_left();
            None
        }
        InputMsg::MoveRight => {
            model.input.move_right();
            None
        }
        InputMsg::MoveStart => {
            model.input.move_start();
            None
        }
        InputMsg::MoveEnd => {
            model.input.move_end();
            None
        }
        InputMsg::KeyDown(key) => commit_key(model, key),
        InputMsg::Blur => blur(model),
    }
}

/// Inspect a proposed new pending value and either store it or commit.
///
/// Only an edit that grows the value counts as an append; its last character
/// decides: a quote flips the quote state, an unquoted delimiter commits.
fn apply_buffer_edit(model: &mut ChipsModel, next: TextField) -> Option<Cmd> {
    let appended = next.text().chars().count() > model.input.text().chars().count();
    let last = if appended {
        next.text().chars().last()
    } else {
        None
    };

    if last == Some(QUOTE) {
        model.quote_open = !model.quote_open;
        debug!(target: "chips", quote_open = model.quote_open, "quote toggled");
    } else if last == Some(DELIMITER) && !model.quote_open {
        let text = next.text();
        let candidate = &text[..text.len() - DELIMITER.len_utf8()];
        return commit_pending(model, candidate.to_string(), true);
    }

    model.error = None;
    if next.is_empty() {
        model.quote_open = false;
    }
    model.input = next;
    None
}

/// The delimiter key or a configured commit key on the pending input
fn commit_key(model: &mut ChipsModel, key: KeyCode) -> Option<Cmd> {
    if !model.config.is_commit_key(key) || model.input.is_empty() {
        return None;
    }
    if model.quote_open {
        debug!(target: "chips", %key, "commit key ignored inside quotes");
        return None;
    }
    let candidate = model.input.text().to_string();
    commit_pending(model, candidate, true)
}

/// The pending input lost focus
fn blur(model: &mut ChipsModel) -> Option<Cmd> {
    if model.quote_open {
        model.error = Some(ValidationError::UnterminatedQuote);
        return None;
    }
    if model.input.is_blank() {
        return None;
    }
    let candidate = model.input.text().to_string();
    commit_pending(model, candidate, false)
}

/// Commit `candidate` as a new chip at the end of the list.
///
/// The duplicate check runs before anything is mutated; a rejected commit
/// leaves the pending input untouched. A blank candidate clears the input
/// without adding a chip.
fn commit_pending(model: &mut ChipsModel, candidate: String, check_duplicates: bool) -> Option<Cmd> {
    if check_duplicates && is_duplicate(model, &candidate) {
        debug!(target: "chips", candidate = %candidate, "duplicate chip rejected");
        model.error = Some(ValidationError::DuplicateChip);
        return None;
    }

    let text = candidate.trim();
    let cmd = if text.is_empty() {
        None
    } else {
        model.chips.push(text.to_string());
        // Inserting a chip ends any inline edit
        if let Some(edit) = model.edit.take() {
            debug!(target: "chips", index = edit.index, "edit abandoned by new chip");
        }
        Some(Cmd::EmitValue(model.chips.to_value()))
    };

    model.input.clear();
    model.quote_open = false;
    model.error = None;
    cmd
}

fn is_duplicate(model: &ChipsModel, candidate: &str) -> bool {
    let probe = match model.config.duplicate_check {
        DuplicateCheck::PendingBuffer => model.input.text(),
        DuplicateCheck::Candidate => candidate.trim(),
    };
    model.chips.contains(probe)
}
