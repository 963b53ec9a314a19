//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging chip
//! commits, selection and edit-mode transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=chips=debug,message=debug` - scoped filtering
//! - `RUST_LOG=chips::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/chips-editor/logs/chips.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::ChipsModel;
use crate::tokenizer;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG; without it the level
/// is `warn`, or `debug` when `verbose` is set. File logging is skipped when
/// the logs directory cannot be created.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // Daily rolling file at debug level; skipped if the directory is unusable
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => Some(
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(
                    dir,
                    crate::config_paths::LOG_FILE_PREFIX,
                ))
                .with_ansi(false)
                .with_target(true)
                .with_filter(EnvFilter::new("debug")),
        ),
        Err(e) => {
            // No subscriber yet, so this cannot go through tracing
            eprintln!("chips: file logging disabled: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSnapshot {
    pub chip_count: usize,
    pub value: String,
    pub pending: String,
    pub quote_open: bool,
    /// Quote parity of the pending text, as `parse` would see it
    pub quote_parity: bool,
    pub editing: Option<usize>,
    pub selected: Vec<usize>,
    pub selecting: bool,
    pub error: Option<String>,
}

impl ChipSnapshot {
    pub fn from_model(model: &ChipsModel) -> Self {
        Self {
            chip_count: model.chips.len(),
            value: model.value(),
            pending: model.pending_text().to_string(),
            quote_open: model.quote_open,
            quote_parity: tokenizer::quote_parity_open(model.pending_text()),
            editing: model.editing_index(),
            selected: model.selection.indices().iter().copied().collect(),
            selecting: model.selection.is_selecting(),
            error: model.error.map(|e| e.to_string()),
        }
    }

    /// The quote flag disagrees with the parity of the pending text, so a
    /// delimiter typed now would split differently than the value parses
    pub fn quote_drift(&self) -> bool {
        self.quote_open != self.quote_parity
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ChipSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.value != other.value {
            changes.push(format!(
                "chips: {} → {} ({:?})",
                self.chip_count, other.chip_count, other.value
            ));
        }
        if self.pending != other.pending {
            changes.push(format!("pending: {:?} → {:?}", self.pending, other.pending));
        }
        if self.quote_open != other.quote_open {
            let status = if other.quote_open { "open" } else { "closed" };
            changes.push(format!("quote {}", status));
        }
        if self.editing != other.editing {
            changes.push(format!("editing: {:?} → {:?}", self.editing, other.editing));
        }
        if self.selected != other.selected {
            changes.push(format!("selected: {:?} → {:?}", self.selected, other.selected));
        }
        if self.selecting != other.selecting {
            let status = if other.selecting { "started" } else { "ended" };
            changes.push(format!("drag {}", status));
        }
        if self.error != other.error {
            changes.push(format!("error: {:?} → {:?}", self.error, other.error));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
