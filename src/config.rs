//! Chip editor configuration
//!
//! Stored in `~/.config/chips-editor/config.yaml`. Every field is optional;
//! missing fields take their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::keymap::KeyCode;
use crate::tokenizer::DELIMITER;

/// Which text a delimiter commit is compared against when looking for
/// duplicates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateCheck {
    /// The pending buffer as it was before the delimiter keystroke
    #[default]
    PendingBuffer,
    /// The text about to be committed (new value minus the delimiter)
    Candidate,
}

/// User-facing validation messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_duplicate_chip")]
    pub duplicate_chip: String,
    #[serde(default = "default_unterminated_quote")]
    pub unterminated_quote: String,
}

fn default_duplicate_chip() -> String {
    "duplicate chip".to_string()
}

fn default_unterminated_quote() -> String {
    "unterminated quote".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            duplicate_chip: default_duplicate_chip(),
            unterminated_quote: default_unterminated_quote(),
        }
    }
}

/// Chip editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipsConfig {
    #[serde(default)]
    pub duplicate_check: DuplicateCheck,

    /// Extra keys on the pending input that commit the buffer like the
    /// delimiter key
    #[serde(default = "default_commit_keys")]
    pub commit_keys: Vec<KeyCode>,

    #[serde(default)]
    pub messages: Messages,
}

fn default_commit_keys() -> Vec<KeyCode> {
    vec![KeyCode::Enter]
}

impl Default for ChipsConfig {
    fn default() -> Self {
        Self {
            duplicate_check: DuplicateCheck::default(),
            commit_keys: default_commit_keys(),
            messages: Messages::default(),
        }
    }
}

impl ChipsConfig {
    /// Load config from the default location, or return defaults if it is
    /// missing or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Whether `key` on the pending input commits the buffer. The delimiter
    /// key always does; `commit_keys` adds to it.
    pub fn is_commit_key(&self, key: KeyCode) -> bool {
        key == KeyCode::Char(DELIMITER) || self.commit_keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChipsConfig::default();
        assert_eq!(config.duplicate_check, DuplicateCheck::PendingBuffer);
        assert_eq!(config.commit_keys, vec![KeyCode::Enter]);
        assert_eq!(config.messages.duplicate_chip, "duplicate chip");
        assert_eq!(config.messages.unterminated_quote, "unterminated quote");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = ChipsConfig::from_yaml("duplicate_check: candidate\n").unwrap();
        assert_eq!(config.duplicate_check, DuplicateCheck::Candidate);
        assert_eq!(config.commit_keys, vec![KeyCode::Enter]);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ChipsConfig::from_yaml("").unwrap(), ChipsConfig::default());
    }

    #[test]
    fn test_unknown_key_is_error() {
        assert!(ChipsConfig::from_yaml("commit_keys: [Hyper]\n").is_err());
    }

    #[test]
    fn test_is_commit_key() {
        let config = ChipsConfig::from_yaml("commit_keys: [Enter, Tab, ';']\n").unwrap();
        assert!(config.is_commit_key(KeyCode::Tab));
        assert!(config.is_commit_key(KeyCode::Char(';')));
        assert!(!config.is_commit_key(KeyCode::Backspace));
    }

    #[test]
    fn test_delimiter_is_always_commit_key() {
        assert!(ChipsConfig::default().is_commit_key(KeyCode::Char(',')));

        let config = ChipsConfig::from_yaml("commit_keys: []\n").unwrap();
        assert!(config.is_commit_key(KeyCode::Char(',')));
        assert!(!config.is_commit_key(KeyCode::Enter));
    }
}
