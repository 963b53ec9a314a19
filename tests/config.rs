//! Configuration tests - file loading, defaults, script files

use std::io::Write;

use chips::config::{ChipsConfig, DuplicateCheck};
use chips::config_paths;
use chips::keymap::KeyCode;
use chips::script;
use tempfile::NamedTempFile;

// ========================================================================
// Paths
// ========================================================================

#[test]
fn test_paths_live_under_app_dir() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.ends_with("chips-editor"));
        assert_eq!(config_paths::config_file(), Some(dir.join("config.yaml")));
        assert_eq!(config_paths::logs_dir(), Some(dir.join("logs")));
    }
}

// ========================================================================
// Loading
// ========================================================================

#[test]
fn test_load_from_yaml_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "duplicate_check: candidate\ncommit_keys: [enter, tab]\nmessages:\n  duplicate_chip: dup!"
    )
    .unwrap();

    let config = ChipsConfig::load_from(file.path()).unwrap();
    assert_eq!(config.duplicate_check, DuplicateCheck::Candidate);
    assert_eq!(config.commit_keys, vec![KeyCode::Enter, KeyCode::Tab]);
    assert_eq!(config.messages.duplicate_chip, "dup!");
    assert_eq!(config.messages.unterminated_quote, "unterminated quote");
}

#[test]
fn test_load_from_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ChipsConfig::load_from(&dir.path().join("missing.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_load_from_invalid_key_is_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "commit_keys: [not-a-key]").unwrap();
    assert!(ChipsConfig::load_from(file.path()).is_err());
}

#[test]
fn test_empty_file_gives_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = ChipsConfig::load_from(file.path()).unwrap();
    assert_eq!(config, ChipsConfig::default());
}

// ========================================================================
// Scripts
// ========================================================================

#[test]
fn test_replay_yaml_script_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    write!(
        file,
        r#"
- event: type
  text: "a,b,"
- event: click_chip
  index: 0
- event: render
- event: edit_text
  text: alpha
- event: key
  key: Enter
"#
    )
    .unwrap();

    let events = script::load(file.path()).unwrap();
    let report = script::replay("", ChipsConfig::default(), events);
    assert_eq!(report.value, "alpha, b");
    assert_eq!(report.changes, vec!["a", "a, b", "alpha, b"]);
}

#[test]
fn test_replay_json_script_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"event": "key", "key": "Backspace"}}, {{"event": "unmount"}}, {{"event": "key", "key": "Backspace"}}]"#
    )
    .unwrap();

    let events = script::load(file.path()).unwrap();
    let report = script::replay("a, b, c", ChipsConfig::default(), events);
    assert_eq!(report.value, "a, b");
    assert_eq!(report.view.render_line(), "[a] [b] > ");
}
