//! Keyboard input types
//!
//! Hosts translate their native key events into [`KeyCode`] before routing
//! them into the chip editor. Key names in config files and event scripts use
//! the same spelling (`Enter`, `Backspace`, `,` ...).

mod types;

pub use types::{KeyCode, KeyParseError};
