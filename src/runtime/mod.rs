//! Runtime module - hosting the chip editor
//!
//! - `host` - [`ChipsHost`]: event routing, command execution, deferred focus
//!   and key listener lifecycle
//! - `events` - [`HostEvent`]: raw events as a UI toolkit delivers them

pub mod events;
pub mod host;

pub use events::HostEvent;
pub use host::{ChipsHost, Focus};
