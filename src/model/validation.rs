//! User-correctable validation states of the pending input

use std::fmt;

use crate::config::Messages;

/// Validation state shown inline under the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A delimiter commit matched an existing chip; the input is kept
    DuplicateChip,
    /// The input lost focus inside an open quote; the input is kept
    UnterminatedQuote,
}

impl ValidationError {
    /// The configured user-facing message
    pub fn message<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            ValidationError::DuplicateChip => &messages.duplicate_chip,
            ValidationError::UnterminatedQuote => &messages.unterminated_quote,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateChip => write!(f, "duplicate chip"),
            ValidationError::UnterminatedQuote => write!(f, "unterminated quote"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages_match_display() {
        let messages = Messages::default();
        for err in [
            ValidationError::DuplicateChip,
            ValidationError::UnterminatedQuote,
        ] {
            assert_eq!(err.message(&messages), err.to_string());
        }
    }

    #[test]
    fn test_custom_message() {
        let messages = Messages {
            duplicate_chip: "Такой чипс уже есть!".to_string(),
            ..Messages::default()
        };
        assert_eq!(
            ValidationError::DuplicateChip.message(&messages),
            "Такой чипс уже есть!"
        );
    }
}
