//! TextField - single-line editable text with one cursor.

use super::buffer::StringBuffer;

/// Single-line editable text with a character-indexed cursor.
///
/// Used for the pending chip input and for the inline chip editor. The
/// cursor is always in `0..=len_chars()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: StringBuffer,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field holding `text` with the cursor at the end
    pub fn with_text(text: &str) -> Self {
        let buffer = StringBuffer::from_text(text);
        let cursor = buffer.len_chars();
        Self { buffer, cursor }
    }

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the content is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.buffer.as_str().trim().is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        // Single-line: newlines never enter the field
        if ch == '\n' || ch == '\r' {
            return;
        }
        self.buffer.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    pub fn insert_text(&mut self, text: &str) {
        let line: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        self.buffer.insert(self.cursor, &line);
        self.cursor += line.chars().count();
    }

    /// Delete the character before the cursor (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.buffer.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
        true
    }

    /// Delete the character after the cursor (Delete)
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(self.cursor..self.cursor + 1);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.len_chars());
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len_chars();
    }

    /// Replace the content. The cursor keeps its offset when still valid,
    /// otherwise it moves to the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.cursor = self.cursor.min(self.buffer.len_chars());
    }

    pub fn clear(&mut self) {
        self.buffer.set_content("");
        self.cursor = 0;
    }
}
