//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each handler
//! receives the current model by reference, so no handler can act on an
//! outdated copy of the chips, the selection or the pending input.

mod chip;
mod input;
mod selection;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{ChipList, ChipsModel};

#[cfg(debug_assertions)]
use crate::tracing::ChipSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use chip::update_chip;
pub use input::update_input;
pub use selection::{update_global_key, update_select};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut ChipsModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut ChipsModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::ValueChanged(value) => apply_external_value(model, &value),
        Msg::Input(m) => input::update_input(model, m),
        Msg::Chip(m) => chip::update_chip(model, m),
        Msg::Select(m) => selection::update_select(model, m),
        Msg::GlobalKey(key) => selection::update_global_key(model, key),
    }
}

/// Re-derive the chips from a new external value.
///
/// The pending input, edit target and selection are left alone unless they
/// no longer address a chip.
fn apply_external_value(model: &mut ChipsModel, value: &str) -> Option<Cmd> {
    model.chips = ChipList::from_value(value);

    let len = model.chips.len();
    if model.edit.as_ref().is_some_and(|edit| edit.index >= len) {
        tracing::debug!(target: "chips", "edit target dropped by external value");
        model.edit = None;
    }
    model.selection.truncate(len);
    None
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(model: &mut ChipsModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = ChipSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = ChipSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "chips", %diff, "state changed");
    }
    if after.quote_drift() && !before.quote_drift() {
        debug!(
            target: "chips",
            pending = %after.pending,
            quote_open = after.quote_open,
            "quote state differs from pending text parity"
        );
    }
    if let Some(value) = result.as_ref().and_then(Cmd::emitted_value) {
        debug!(target: "chips", value, "emitting value");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Input::InsertChar(',')`
/// - `Select::PointerDown(2)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::ValueChanged(v) => format!("ValueChanged({:?})", v),
        Msg::Input(m) => format!("Input::{:?}", m),
        Msg::Chip(m) => format!("Chip::{:?}", m),
        Msg::Select(m) => format!("Select::{:?}", m),
        Msg::GlobalKey(k) => format!("GlobalKey({})", k),
    }
}
