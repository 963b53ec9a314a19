//! Key codes shared by the host, the update functions and the config file

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A logical key as delivered by the host's key-down events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyCode {
    /// A printable character key
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Cursor movement
    Left,
    Right,
    Home,
    End,
}

impl KeyCode {
    /// Backspace or Delete
    pub fn is_deletion(self) -> bool {
        matches!(self, KeyCode::Backspace | KeyCode::Delete)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
        }
    }
}

/// Error for key names that do not map to a [`KeyCode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParseError(pub String);

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown key: {}", self.0)
    }
}

impl std::error::Error for KeyParseError {}

impl FromStr for KeyCode {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(if c == ' ' {
                KeyCode::Space
            } else {
                KeyCode::Char(c)
            });
        }

        match s.to_ascii_lowercase().as_str() {
            "enter" | "return" => Ok(KeyCode::Enter),
            "escape" | "esc" => Ok(KeyCode::Escape),
            "tab" => Ok(KeyCode::Tab),
            "backspace" | "back" => Ok(KeyCode::Backspace),
            "delete" | "del" => Ok(KeyCode::Delete),
            "space" => Ok(KeyCode::Space),
            "comma" => Ok(KeyCode::Char(',')),
            "left" | "arrowleft" => Ok(KeyCode::Left),
            "right" | "arrowright" => Ok(KeyCode::Right),
            "home" => Ok(KeyCode::Home),
            "end" => Ok(KeyCode::End),
            _ => Err(KeyParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for KeyCode {
    type Error = KeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyCode> for String {
    fn from(key: KeyCode) -> Self {
        key.to_string()
    }
}
