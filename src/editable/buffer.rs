//! String-backed text buffer addressed by character offsets.

use std::ops::Range;

/// Single-line text buffer wrapping `String`.
///
/// All offsets are character offsets; conversion to byte offsets happens
/// internally so callers never split a multi-byte character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_owned(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte index of the character at `offset`, or the end of the text
    fn byte_index(&self, offset: usize) -> usize {
        match self.text.char_indices().nth(offset) {
            Some((byte, _)) => byte,
            None => self.text.len(),
        }
    }

    /// Insert text at character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.byte_index(offset);
        self.text.insert_str(byte_offset, text);
    }

    /// Insert single character at character offset
    pub fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.byte_index(offset);
        self.text.insert(byte_offset, ch);
    }

    /// Remove text in character range
    pub fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.byte_index(range.start);
        let end_byte = self.byte_index(range.end);
        self.text.replace_range(start_byte..end_byte, "");
    }

    /// Set content, replacing everything
    pub fn set_content(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}
