//! Event scripts: recorded host events replayed against a [`ChipsHost`]
//!
//! Scripts are a list of [`HostEvent`]s in YAML (default) or JSON (`.json`
//! extension).

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::ChipsConfig;
use crate::runtime::{ChipsHost, HostEvent};
use crate::view::EditorView;

/// Final state after a replay
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// External value held by the caller
    pub value: String,
    /// Change notifications in emission order
    pub changes: Vec<String>,
    /// Last rendered frame
    pub view: EditorView,
}

/// Parse a script from YAML
pub fn from_yaml(yaml: &str) -> Result<Vec<HostEvent>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse a script from JSON
pub fn from_json(json: &str) -> Result<Vec<HostEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a script file, choosing the format by extension
pub fn load(path: &Path) -> Result<Vec<HostEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let events = if is_json {
        from_json(&content)
    } else {
        from_yaml(&content)
    }
    .with_context(|| format!("Failed to parse script {}", path.display()))?;

    tracing::debug!(events = events.len(), "loaded script {}", path.display());
    Ok(events)
}

/// Mount a host on `value`, deliver every event, then render once more
pub fn replay(value: &str, config: ChipsConfig, events: Vec<HostEvent>) -> ReplayReport {
    let mut host = ChipsHost::mount(value, config);
    for event in events {
        tracing::trace!(?event, "replaying");
        event.apply(&mut host);
    }

    let view = host.render();
    ReplayReport {
        value: host.value().to_string(),
        changes: host.changes().to_vec(),
        view,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script() {
        assert!(from_yaml("").unwrap().is_empty());
        assert!(from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_bad_event_is_error() {
        assert!(from_yaml("- event: explode\n").is_err());
    }

    #[test]
    fn test_replay_typing() {
        let events = from_yaml(
            r#"
- event: type
  text: "a,b,"
"#,
        )
        .unwrap();
        let report = replay("", ChipsConfig::default(), events);
        assert_eq!(report.value, "a, b");
        assert_eq!(report.changes, vec!["a", "a, b"]);
        assert_eq!(report.view.render_line(), "[a] [b] > ");
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(&path, r#"[{"event":"type","text":"x,"}]"#).unwrap();

        let events = load(&path).unwrap();
        assert_eq!(
            events,
            vec![HostEvent::Type {
                text: "x,".to_string()
            }]
        );
    }
}
