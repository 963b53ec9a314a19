//! Pointer-drag selection, bulk deletion and the document-wide delete key

use tracing::debug;

use crate::commands::Cmd;
use crate::keymap::KeyCode;
use crate::messages::SelectMsg;
use crate::model::ChipsModel;

use super::chip::chip_index_valid;

/// Handle selection messages
pub fn update_select(model: &mut ChipsModel, msg: SelectMsg) -> Option<Cmd> {
    match msg {
        SelectMsg::PointerDown(index) => {
            if chip_index_valid(model, index, "PointerDown") {
                model.selection.begin(index);
            }
            None
        }
        SelectMsg::PointerMove(index) => {
            if model.selection.is_selecting() && chip_index_valid(model, index, "PointerMove") {
                model.selection.extend(index);
            }
            None
        }
        SelectMsg::PointerUp => {
            model.selection.end();
            None
        }
        SelectMsg::DeleteSelection => delete_selection(model),
    }
}

/// Remove every selected chip and clear the selection
fn delete_selection(model: &mut ChipsModel) -> Option<Cmd> {
    if model.selection.is_empty() {
        return None;
    }

    let indices = model.selection.take();
    let removed = model.chips.remove_indices(&indices);
    debug!(target: "chips", removed, "selection deleted");

    model.edit = None;
    Some(Cmd::EmitValue(model.chips.to_value()))
}

/// Document-wide key handler.
///
/// Backspace/Delete with an empty pending input deletes the selection, or the
/// last chip when nothing is selected. A non-empty input keeps normal text
/// editing. Keys typed into a focused inline editor never reach this handler;
/// the host routes them to `ChipMsg::EditKeyDown` instead.
pub fn update_global_key(model: &mut ChipsModel, key: KeyCode) -> Option<Cmd> {
    if !key.is_deletion() || !model.input.is_empty() {
        return None;
    }

    if !model.selection.is_empty() {
        return delete_selection(model);
    }

    let removed = model.chips.remove_last()?;
    debug!(target: "chips", chip = %removed, "last chip removed");
    model.edit = None;
    Some(Cmd::EmitValue(model.chips.to_value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChipsConfig;
    use crate::messages::InputMsg;
    use crate::update::update_input;

    fn model(value: &str) -> ChipsModel {
        ChipsModel::with_value(value, ChipsConfig::default())
    }

    #[test]
    fn test_pointer_move_without_drag_is_ignored() {
        let mut model = model("a, b");
        update_select(&mut model, SelectMsg::PointerMove(1));
        assert!(model.selection.is_empty());
    }

    #[test]
    fn test_delete_empty_selection_is_noop() {
        let mut model = model("a, b");
        assert_eq!(update_select(&mut model, SelectMsg::DeleteSelection), None);
        assert_eq!(model.chips(), ["a", "b"]);
    }

    #[test]
    fn test_global_delete_truncates_last() {
        let mut model = model("a, b, c");
        let cmd = update_global_key(&mut model, KeyCode::Backspace);
        assert_eq!(cmd, Some(Cmd::EmitValue("a, b".to_string())));
    }

    #[test]
    fn test_global_delete_prefers_selection() {
        let mut model = model("a, b, c");
        update_select(&mut model, SelectMsg::PointerDown(0));
        update_select(&mut model, SelectMsg::PointerUp);

        update_global_key(&mut model, KeyCode::Delete);
        assert_eq!(model.chips(), ["b", "c"]);
        assert!(model.selection.is_empty());
    }

    #[test]
    fn test_global_delete_ignored_with_pending_text() {
        let mut model = model("a");
        update_input(&mut model, InputMsg::InsertChar('x'));
        assert_eq!(update_global_key(&mut model, KeyCode::Backspace), None);
        assert_eq!(model.chips(), ["a"]);
    }

    #[test]
    fn test_global_non_delete_key_ignored() {
        let mut model = model("a");
        assert_eq!(update_global_key(&mut model, KeyCode::Enter), None);
    }

    #[test]
    fn test_global_delete_with_unfocused_edit_removes_last() {
        let mut model = model("a, b");
        model.edit = Some(crate::model::EditTarget::new(0, "a"));

        let cmd = update_global_key(&mut model, KeyCode::Delete);
        assert_eq!(cmd, Some(Cmd::EmitValue("a".to_string())));
        assert_eq!(model.editing_index(), None);
    }

    #[test]
    fn test_global_delete_on_empty_list() {
        let mut model = model("");
        assert_eq!(update_global_key(&mut model, KeyCode::Backspace), None);
    }
}
