//! Command-line argument parsing
//!
//! Supports:
//! - Splitting a value into chips (`parse`)
//! - Replaying a host event script (`replay`)
//! - An explicit config file (`--config`)

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::ChipsConfig;

/// Chip input editor core
#[derive(Parser, Debug)]
#[command(name = "chips", version, about = "Chip input editor core")]
pub struct CliArgs {
    /// Config file to use instead of ~/.config/chips-editor/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Split a value into chips, one per line
    Parse {
        /// External value, e.g. 'a, "b,c", d'
        value: String,

        /// Print a JSON array instead
        #[arg(long)]
        json: bool,
    },

    /// Replay a YAML or JSON event script and print the final state
    Replay {
        /// Script file (`.json` for JSON, YAML otherwise)
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Initial external value
        #[arg(long, default_value = "")]
        value: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CliArgs {
    /// Resolve the configuration. An explicit `--config` must load; the
    /// default location falls back to defaults.
    pub fn load_config(&self) -> Result<ChipsConfig> {
        match &self.config {
            Some(path) => ChipsConfig::load_from(path),
            None => Ok(ChipsConfig::load()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand() {
        let args = CliArgs::try_parse_from(["chips", "parse", "a,b", "--json"]).unwrap();
        match args.command {
            CliCommand::Parse { value, json } => {
                assert_eq!(value, "a,b");
                assert!(json);
            }
            _ => panic!("expected parse"),
        }
    }

    #[test]
    fn test_replay_defaults() {
        let args = CliArgs::try_parse_from(["chips", "-v", "replay", "s.yaml"]).unwrap();
        assert!(args.verbose);
        match args.command {
            CliCommand::Replay {
                script,
                value,
                json,
            } => {
                assert_eq!(script, PathBuf::from("s.yaml"));
                assert_eq!(value, "");
                assert!(!json);
            }
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let args = CliArgs::try_parse_from([
            "chips",
            "--config",
            "/nonexistent/chips.yaml",
            "parse",
            "a",
        ])
        .unwrap();
        assert!(args.load_config().is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
