//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that the host performs after an update.

/// Side effect requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Notify the caller of a new external value
    EmitValue(String),
    /// Focus the inline editor for the chip at `index` once the next render
    /// has created it
    FocusChipEditor { index: usize },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine two optional commands, keeping both when present
    pub fn merge(first: Option<Cmd>, second: Option<Cmd>) -> Option<Cmd> {
        match (first, second) {
            (None, None) => None,
            (Some(cmd), None) | (None, Some(cmd)) => Some(cmd),
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }

    /// The last external value this command emits, if any
    pub fn emitted_value(&self) -> Option<&str> {
        match self {
            Cmd::EmitValue(value) => Some(value),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(Cmd::emitted_value),
            Cmd::None | Cmd::FocusChipEditor { .. } => None,
        }
    }
}
