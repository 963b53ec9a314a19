//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use chips::commands::Cmd;
use chips::config::ChipsConfig;
use chips::messages::{InputMsg, Msg};
use chips::model::ChipsModel;
use chips::update::update;

/// Create a test model whose chips are derived from `value`
pub fn test_model(value: &str) -> ChipsModel {
    ChipsModel::with_value(value, ChipsConfig::default())
}

/// Type `text` into the pending input one character at a time, returning
/// every command produced
pub fn type_text(model: &mut ChipsModel, text: &str) -> Vec<Cmd> {
    text.chars()
        .filter_map(|ch| update(model, Msg::Input(InputMsg::InsertChar(ch))))
        .collect()
}

/// Values emitted by a list of commands, in order
pub fn emitted(cmds: &[Cmd]) -> Vec<String> {
    cmds.iter()
        .filter_map(|cmd| cmd.emitted_value().map(str::to_string))
        .collect()
}
