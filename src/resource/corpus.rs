//! Local resource corpus.
//!
//! A [`Corpus`] answers "all local resources of kind ValueSet", in a stable
//! order. The order is significant: cross-reference output follows it.

use super::error::CorpusError;
use super::types::{NamingSystem, ValueSet};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Source of candidate resources for cross-referencing.
pub trait Corpus {
    /// Snapshot of every local ValueSet, in scan order.
    fn value_sets(&self) -> Result<Vec<ValueSet>, CorpusError>;
}

// ============================================================================
// In-memory corpus
// ============================================================================

/// Corpus over resources already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    value_sets: Vec<ValueSet>,
}

impl MemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value_set: ValueSet) {
        self.value_sets.push(value_set);
    }

    pub fn len(&self) -> usize {
        self.value_sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value_sets.is_empty()
    }
}

impl From<Vec<ValueSet>> for MemoryCorpus {
    fn from(value_sets: Vec<ValueSet>) -> Self {
        Self { value_sets }
    }
}

impl Corpus for MemoryCorpus {
    fn value_sets(&self) -> Result<Vec<ValueSet>, CorpusError> {
        Ok(self.value_sets.clone())
    }
}

// ============================================================================
// Directory corpus
// ============================================================================

/// Corpus read from `*.json` resource files below a directory.
///
/// Files are visited recursively in file-name order. JSON documents whose
/// `resourceType` is not `ValueSet` are skipped; a file that is not valid
/// JSON, or a ValueSet that doesn't deserialize, fails the scan.
///
/// A ValueSet without an explicit `webPath` gets `{prefix}ValueSet-{id}.html`
/// as its render path, or none when it has no `id`.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
    path_prefix: String,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            path_prefix: String::new(),
        }
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn render_path_for(&self, value_set: &ValueSet) -> Option<String> {
        value_set
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{}ValueSet-{id}.html", self.path_prefix))
    }
}

impl Corpus for DirectoryCorpus {
    fn value_sets(&self) -> Result<Vec<ValueSet>, CorpusError> {
        let mut value_sets = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            // Symlinks are read through, a dangling one surfaces as an Io error.
            if entry.file_type().is_dir() || !is_json_file(path) {
                continue;
            }

            let json = read_json(path)?;
            if resource_type_of(&json) != Some("ValueSet") {
                continue;
            }

            let mut value_set: ValueSet = serde_json::from_value(json)
                .map_err(|err| CorpusError::Parse(path.to_path_buf(), err))?;
            if value_set.web_path.is_none() {
                value_set.web_path = self.render_path_for(&value_set);
            }
            value_sets.push(value_set);
        }

        Ok(value_sets)
    }
}

// ============================================================================
// Single resources
// ============================================================================

/// Read a NamingSystem from a JSON file.
pub fn load_naming_system(path: &Path) -> Result<NamingSystem, CorpusError> {
    let json = read_json(path)?;
    match resource_type_of(&json) {
        Some("NamingSystem") => serde_json::from_value(json)
            .map_err(|err| CorpusError::Parse(path.to_path_buf(), err)),
        other => Err(CorpusError::UnexpectedType {
            path: path.to_path_buf(),
            expected: "NamingSystem",
            found: other.unwrap_or("resource without resourceType").to_owned(),
        }),
    }
}

fn read_json(path: &Path) -> Result<Value, CorpusError> {
    let content =
        fs::read_to_string(path).map_err(|err| CorpusError::Io(path.to_path_buf(), err))?;
    serde_json::from_str(&content).map_err(|err| CorpusError::Parse(path.to_path_buf(), err))
}

fn resource_type_of(json: &Value) -> Option<&str> {
    json.get("resourceType").and_then(Value::as_str)
}

fn is_json_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
