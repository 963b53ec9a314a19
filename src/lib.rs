//! Chips - Elm-style chip (tag) input editor core
//!
//! This crate provides the tokenizer and the state machine behind a chip
//! input: free-form text is split into chips on commas, double quotes escape
//! commas, and chips can be re-edited, drag-selected and deleted. The single
//! external value is the `", "` join of the chip texts.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tokenizer;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ChipsConfig;
pub use messages::Msg;
pub use model::ChipsModel;
pub use runtime::ChipsHost;
