//! Where the chip editor keeps its files
//!
//! ```text
//! <config root>/chips-editor/
//! ├── config.yaml
//! └── logs/chips.log.YYYY-MM-DD
//! ```
//!
//! The config root is `$XDG_CONFIG_HOME` or `~/.config` on Unix and macOS,
//! `%APPDATA%` on Windows.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

const APP_DIR: &str = "chips-editor";

/// Base name of the rolling log file
pub const LOG_FILE_PREFIX: &str = "chips.log";

#[cfg(target_os = "windows")]
fn config_root() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn config_root() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg)),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    }
}

/// `<config root>/chips-editor`, or `None` when no home directory is known
pub fn config_dir() -> Option<PathBuf> {
    Some(config_root()?.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| anyhow!("no config directory available"))?;
    std::fs::create_dir_all(&logs)
        .with_context(|| format!("failed to create {}", logs.display()))?;
    Ok(logs)
}
