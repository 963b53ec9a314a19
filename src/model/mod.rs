//! Chip editor model - the complete state of one chip input
//!
//! Following the Elm Architecture, all of this state is mutated only by
//! [`crate::update::update`].

pub mod chips;
pub mod selection;
pub mod validation;

pub use chips::ChipList;
pub use selection::ChipSelection;
pub use validation::ValidationError;

use crate::config::ChipsConfig;
use crate::editable::TextField;

/// A chip being re-edited inline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    /// Index of the chip under edit
    pub index: usize,
    /// Live text of the inline editable region
    pub draft: TextField,
}

impl EditTarget {
    pub fn new(index: usize, text: &str) -> Self {
        Self {
            index,
            draft: TextField::with_text(text),
        }
    }
}

/// The complete chip editor state
#[derive(Debug, Clone)]
pub struct ChipsModel {
    /// Committed chips
    pub chips: ChipList,
    /// Text typed since the last commit
    pub input: TextField,
    /// True while the pending input is inside an open quoted region
    pub quote_open: bool,
    /// Current validation message, if any
    pub error: Option<ValidationError>,
    /// Chip under inline edit (`None` = idle)
    pub edit: Option<EditTarget>,
    /// Pointer-drag multi-selection
    pub selection: ChipSelection,
    /// Behavior and message configuration
    pub config: ChipsConfig,
}

impl ChipsModel {
    pub fn new(config: ChipsConfig) -> Self {
        Self {
            chips: ChipList::new(),
            input: TextField::new(),
            quote_open: false,
            error: None,
            edit: None,
            selection: ChipSelection::new(),
            config,
        }
    }

    /// Create a model whose chips are derived from `value`
    pub fn with_value(value: &str, config: ChipsConfig) -> Self {
        let mut model = Self::new(config);
        model.chips = ChipList::from_value(value);
        model
    }

    pub fn chips(&self) -> &[String] {
        self.chips.as_slice()
    }

    /// The external representation of the current chips
    pub fn value(&self) -> String {
        self.chips.to_value()
    }

    pub fn pending_text(&self) -> &str {
        self.input.text()
    }

    /// The configured message for the current validation error
    pub fn error_message(&self) -> Option<&str> {
        self.error.map(|e| e.message(&self.config.messages))
    }

    /// Index of the chip under inline edit
    pub fn editing_index(&self) -> Option<usize> {
        self.edit.as_ref().map(|e| e.index)
    }

    /// Text of the inline editor, if a chip is being edited
    pub fn draft_text(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.draft.text())
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.contains(index)
    }

    /// Validate model invariants (debug builds only)
    ///
    /// Call this after any update to catch state corruption early.
    /// Panics with a descriptive message if any invariant is violated.
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Some(edit) = &self.edit {
            assert!(
                edit.index < self.chips.len(),
                "[{}] edit target {} out of range ({} chips)",
                context,
                edit.index,
                self.chips.len()
            );
        }

        if let Some(&last) = self.selection.indices().last() {
            assert!(
                last < self.chips.len(),
                "[{}] selected index {} out of range ({} chips)",
                context,
                last,
                self.chips.len()
            );
        }

        assert!(
            !(self.quote_open && self.input.is_empty()),
            "[{}] quote open with empty input",
            context
        );
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}

impl Default for ChipsModel {
    fn default() -> Self {
        Self::new(ChipsConfig::default())
    }
}
