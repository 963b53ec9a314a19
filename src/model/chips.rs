//! Ordered chip collection

use std::collections::BTreeSet;

use crate::tokenizer;

/// Ordered list of chip texts.
///
/// Order is user-visible. Chips have no identity beyond position and text, so
/// every mutation addresses chips by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipList {
    chips: Vec<String>,
}

impl ChipList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the chip list from an external value
    pub fn from_value(value: &str) -> Self {
        Self {
            chips: tokenizer::parse(value),
        }
    }

    /// The external representation of this list
    pub fn to_value(&self) -> String {
        tokenizer::serialize(&self.chips)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.chips
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.chips.get(index).map(String::as_str)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.chips.iter().any(|chip| chip == text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.chips.iter().map(String::as_str)
    }

    pub fn push(&mut self, text: String) {
        self.chips.push(text);
    }

    /// Replace the text of the chip at `index`. Returns false when out of range.
    pub fn replace(&mut self, index: usize, text: String) -> bool {
        match self.chips.get_mut(index) {
            Some(chip) => {
                *chip = text;
                true
            }
            None => false,
        }
    }

    /// Remove the chip at `index`, returning its text
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.chips.len()).then(|| self.chips.remove(index))
    }

    /// Remove the last chip, returning its text
    pub fn remove_last(&mut self) -> Option<String> {
        self.chips.pop()
    }

    /// Remove every chip whose index is in `indices`. Returns the number removed.
    pub fn remove_indices(&mut self, indices: &BTreeSet<usize>) -> usize {
        let before = self.chips.len();
        let mut index = 0;
        self.chips.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
        before - self.chips.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ChipList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            chips: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_and_back() {
        let list = ChipList::from_value("a,b , c");
        assert_eq!(list.as_slice(), ["a", "b", "c"]);
        assert_eq!(list.to_value(), "a, b, c");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut list: ChipList = ["a"].into_iter().collect();
        assert_eq!(list.remove(3), None);
        assert_eq!(list.remove(0), Some("a".to_string()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_indices_keeps_order() {
        let mut list: ChipList = ["a", "b", "c", "d"].into_iter().collect();
        let removed = list.remove_indices(&BTreeSet::from([0, 2, 9]));
        assert_eq!(removed, 2);
        assert_eq!(list.as_slice(), ["b", "d"]);
    }

    #[test]
    fn test_replace() {
        let mut list: ChipList = ["a", "b"].into_iter().collect();
        assert!(list.replace(1, "z".to_string()));
        assert!(!list.replace(2, "y".to_string()));
        assert_eq!(list.as_slice(), ["a", "z"]);
    }

    #[test]
    fn test_contains_is_exact() {
        let list: ChipList = ["foo"].into_iter().collect();
        assert!(list.contains("foo"));
        assert!(!list.contains("foo "));
        assert!(!list.contains("Foo"));
    }
}
