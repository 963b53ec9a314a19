//! Pointer-drag multi-selection over chips

use std::collections::BTreeSet;

/// Set of highlighted chip indices plus the drag-in-progress flag.
///
/// The set outlives the drag: it is only cleared by a delete or replaced by a
/// fresh drag that starts on an unselected chip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipSelection {
    indices: BTreeSet<usize>,
    selecting: bool,
}

impl ChipSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag on `index`. Starting on an unselected chip resets the set
    /// to just that chip; starting on a selected chip keeps the set.
    pub fn begin(&mut self, index: usize) {
        self.selecting = true;
        if !self.indices.contains(&index) {
            self.indices.clear();
            self.indices.insert(index);
        }
    }

    /// Add `index` while a drag is in progress. Returns true if it was added.
    pub fn extend(&mut self, index: usize) -> bool {
        self.selecting && self.indices.insert(index)
    }

    /// Finish the drag, keeping the selected set
    pub fn end(&mut self) {
        self.selecting = false;
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn indices(&self) -> &BTreeSet<usize> {
        &self.indices
    }

    /// Take the selected set, leaving it empty
    pub fn take(&mut self) -> BTreeSet<usize> {
        std::mem::take(&mut self.indices)
    }

    /// Re-index after the chip at `removed` was spliced out: the removed
    /// index is dropped and higher indices shift down by one.
    pub fn shift_after_removal(&mut self, removed: usize) {
        self.indices = self
            .indices
            .iter()
            .filter(|&&i| i != removed)
            .map(|&i| if i > removed { i - 1 } else { i })
            .collect();
    }

    /// Drop indices that are no longer below `len`
    pub fn truncate(&mut self, len: usize) {
        self.indices.retain(|&i| i < len);
    }
}
