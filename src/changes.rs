//! Change-set aggregation and serialization.
//!
//! A [`ChangeSet`] maps each mismatched subdomain label to the value that
//! should be added and the value currently served, and renders as:
//!
//! ```yaml
//! web:
//!   add: 10.0.0.5
//!   delete: 10.0.0.9
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error_handling::OutputError;

/// The change needed to bring one name back to its expected value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Expected value.
    pub add: String,
    /// Value the nameserver returned.
    pub delete: String,
}

/// Mismatches found during a run, keyed by subdomain label.
///
/// Entries are only ever inserted or overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSet {
    entries: BTreeMap<String, ChangeEntry>,
}

impl ChangeSet {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `name`.
    pub fn record(&mut self, name: &str, expected: &str, observed: &str) {
        self.entries.insert(
            name.to_string(),
            ChangeEntry {
                add: expected.to_string(),
                delete: observed.to_string(),
            },
        );
    }

    /// The entry for `name`, if one was recorded.
    pub fn get(&self, name: &str) -> Option<&ChangeEntry> {
        self.entries.get(name)
    }

    /// Number of names with a change.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no mismatch was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ChangeEntry)> {
        self.entries.iter()
    }

    /// Renders the change set as YAML. An empty set renders as `{}`.
    pub fn to_yaml(&self) -> Result<String, OutputError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parses a rendered change set. A blank document is an empty set.
    pub fn from_yaml(content: &str) -> Result<Self, OutputError> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Renders the change set and writes it to `path`, returning the rendering.
    ///
    /// # Errors
    ///
    /// Returns `OutputError::Serialize` if rendering fails and
    /// `OutputError::Write` if the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<String, OutputError> {
        let rendered = self.to_yaml()?;
        std::fs::write(path, &rendered).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_change_set_round_trip() {
        let empty = ChangeSet::new();
        let rendered = empty.to_yaml().expect("renders");
        assert_eq!(rendered.trim(), "{}");
        let parsed = ChangeSet::from_yaml(&rendered).expect("parses");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_record_overwrites() {
        let mut changes = ChangeSet::new();
        changes.record("web", "10.0.0.5", "10.0.0.9");
        changes.record("web", "10.0.0.5", "10.0.0.7");

        assert_eq!(changes.len(), 1);
        assert_eq!(
            changes.get("web"),
            Some(&ChangeEntry {
                add: "10.0.0.5".to_string(),
                delete: "10.0.0.7".to_string(),
            })
        );
    }

    #[test]
    fn test_yaml_layout() {
        let mut changes = ChangeSet::new();
        changes.record("web", "10.0.0.5", "10.0.0.9");
        changes.record("api", "api.example.net.", "old.example.net.");

        let rendered = changes.to_yaml().expect("renders");
        // labels sorted, add before delete
        assert!(rendered.starts_with("api:\n  add: api.example.net.\n  delete: old.example.net.\n"));
        assert!(rendered.find("api:") < rendered.find("web:"));
        assert_eq!(ChangeSet::from_yaml(&rendered).expect("parses"), changes);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("changes.yaml");

        let mut changes = ChangeSet::new();
        changes.record("web", "10.0.0.5", "10.0.0.9");
        let rendered = changes.write_to(&path).expect("writes");

        let on_disk = std::fs::read_to_string(&path).expect("file exists");
        assert_eq!(on_disk, rendered);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("missing").join("changes.yaml");
        let err = ChangeSet::new().write_to(&path).expect_err("no parent dir");
        assert!(matches!(err, OutputError::Write { .. }));
    }
}
