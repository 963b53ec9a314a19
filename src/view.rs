//! View - the output surface of the chip editor
//!
//! [`build`] turns the model into plain data a renderer can draw: the chip
//! list with highlight and edit flags, the pending input and the validation
//! message. [`EditorView::render_line`] draws it as one line of text.

use serde::Serialize;

use crate::model::ChipsModel;

/// One chip as the renderer sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChipView {
    pub text: String,
    pub selected: bool,
    /// Rendered as an editable region holding the draft text
    pub editing: bool,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorView {
    pub chips: Vec<ChipView>,
    pub input: String,
    pub error: Option<String>,
}

/// Build the view for the current model state
pub fn build(model: &ChipsModel) -> EditorView {
    let editing = model.editing_index();
    let chips = model
        .chips
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let is_editing = editing == Some(index);
            ChipView {
                text: match model.draft_text() {
                    Some(draft) if is_editing => draft.to_string(),
                    _ => text.to_string(),
                },
                selected: model.is_selected(index),
                editing: is_editing,
            }
        })
        .collect();

    EditorView {
        chips,
        input: model.pending_text().to_string(),
        error: model.error_message().map(str::to_string),
    }
}

impl EditorView {
    /// Draw as a single line: `[a] [*b] {c} > pending  ! error`
    ///
    /// Selected chips carry a `*`, the chip under edit is drawn in braces.
    pub fn render_line(&self) -> String {
        let mut parts: Vec<String> = self
            .chips
            .iter()
            .map(|chip| {
                if chip.editing {
                    format!("{{{}}}", chip.text)
                } else if chip.selected {
                    format!("[*{}]", chip.text)
                } else {
                    format!("[{}]", chip.text)
                }
            })
            .collect();

        parts.push(format!("> {}", self.input));
        let mut line = parts.join(" ");

        if let Some(error) = &self.error {
            line.push_str("  ! ");
            line.push_str(error);
        }
        line
    }
}
