//! Single-line text editing for the chip editor.
//!
//! Both the pending chip input and the inline chip editor are a [`TextField`]:
//! a [`StringBuffer`] plus one cursor. Keystroke-level edits are applied to a
//! copy of the field so the resulting raw value can be inspected before the
//! state machine decides whether to keep it.

mod buffer;
mod field;

pub use buffer::StringBuffer;
pub use field::TextField;
